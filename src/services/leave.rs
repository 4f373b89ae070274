use chrono::NaiveDate;

use crate::{
    db::dao::{DaoLayerError, LeaveDao},
    db::entities::leave_request,
    error::AppError,
    services::identity::IdentityService,
};

#[derive(Clone)]
pub struct LeaveService {
    identity: IdentityService,
    leaves: LeaveDao,
}

impl LeaveService {
    pub fn new(identity: IdentityService, leaves: LeaveDao) -> Self {
        Self { identity, leaves }
    }

    /// New requests always start out PENDING, whatever the client sent.
    pub async fn apply(
        &self,
        id: i64,
        leave_type: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<leave_request::Model, AppError> {
        let profile = self.identity.resolve(id).await?.into_profile();
        Ok(self
            .leaves
            .submit(profile.id, leave_type, start_date, end_date, "PENDING")
            .await?)
    }

    /// Overwrites the status unconditionally. There is no transition
    /// check, so an APPROVED request can move straight back to PENDING
    /// or to any free-form label the reviewer supplies.
    pub async fn update_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<leave_request::Model, AppError> {
        self.leaves.set_status(id, status).await.map_err(|err| match err {
            DaoLayerError::NotFound { .. } => AppError::LeaveNotFound(id),
            other => other.into(),
        })
    }

    pub async fn employee_leaves(&self, id: i64) -> Result<Vec<leave_request::Model>, AppError> {
        let profile = self.identity.resolve(id).await?.into_profile();
        Ok(self.leaves.find_by_employee(profile.id).await?)
    }

    pub async fn pending(&self) -> Result<Vec<leave_request::Model>, AppError> {
        Ok(self.leaves.find_by_status("PENDING").await?)
    }

    /// Employees with an APPROVED request covering `date`.
    pub async fn on_leave(&self, date: NaiveDate) -> Result<Vec<leave_request::Model>, AppError> {
        Ok(self.leaves.find_approved_on(date).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::LeaveService;
    use crate::db::dao::DaoBase;
    use crate::db::entities::{employee, leave_request};
    use crate::error::AppError;
    use crate::services::identity::IdentityService;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).expect("date should be valid")
    }

    fn profile(id: i64) -> employee::Model {
        employee::Model {
            id,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            department: None,
            designation: None,
            salary: None,
            joining_date: None,
            status: Some("ACTIVE".to_string()),
            employee_code: None,
            employment_type: None,
            work_model: None,
            linkedin: None,
            twitter: None,
            instagram: None,
            transportation_allowance: None,
            meal_allowance: None,
            internet_allowance: None,
            health_insurance: None,
            life_insurance: None,
            training_program: None,
            fitness_membership: None,
            gender: None,
            dob: None,
            address: None,
            city: None,
            experience: None,
        }
    }

    fn request(id: i64, status: &str) -> leave_request::Model {
        leave_request::Model {
            id,
            employee_id: 1,
            leave_type: "ANNUAL".to_string(),
            start_date: day(9),
            end_date: day(11),
            status: status.to_string(),
        }
    }

    fn service(db: &sea_orm::DatabaseConnection) -> LeaveService {
        LeaveService::new(
            IdentityService::new(DaoBase::new(db), DaoBase::new(db)),
            DaoBase::new(db),
        )
    }

    #[tokio::test]
    async fn apply_submits_pending_request_for_resolved_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[profile(1)]])
            .append_query_results([[request(20, "PENDING")]])
            .into_connection();

        let created = service(&db)
            .apply(1, "ANNUAL", day(9), day(11))
            .await
            .expect("apply should succeed");
        assert_eq!(created.status, "PENDING");
        assert_eq!(created.employee_id, 1);
    }

    #[tokio::test]
    async fn update_status_overwrites_without_transition_rules() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[request(20, "APPROVED")]])
            .append_query_results([[request(20, "PENDING")]])
            .into_connection();

        let updated = service(&db)
            .update_status(20, "PENDING")
            .await
            .expect("update should succeed");
        assert_eq!(updated.status, "PENDING");
    }

    #[tokio::test]
    async fn update_status_on_missing_request_maps_to_leave_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<leave_request::Model>::new()])
            .into_connection();

        let err = service(&db)
            .update_status(5, "APPROVED")
            .await
            .expect_err("update should fail");
        assert!(matches!(err, AppError::LeaveNotFound(5)));
        assert_eq!(err.message(), "Leave request not found with id: 5");
    }

    #[tokio::test]
    async fn pending_lists_only_queued_pending_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[request(20, "PENDING"), request(21, "PENDING")]])
            .into_connection();

        let rows = service(&db).pending().await.expect("query should succeed");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.status == "PENDING"));
    }
}
