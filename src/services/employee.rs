use chrono::NaiveDate;
use sea_orm::{IntoActiveModel, Set};
use serde::Deserialize;

use crate::{
    db::dao::{DaoLayerError, EmployeeDao},
    db::entities::employee,
    error::AppError,
};

/// Full profile payload for creation. Everything the directory tracks
/// beyond name and email is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub joining_date: Option<NaiveDate>,
    pub status: Option<String>,
    #[serde(rename = "employeeId")]
    pub employee_code: Option<String>,
    pub employment_type: Option<String>,
    pub work_model: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub transportation_allowance: Option<f64>,
    pub meal_allowance: Option<f64>,
    pub internet_allowance: Option<f64>,
    pub health_insurance: Option<f64>,
    pub life_insurance: Option<f64>,
    pub training_program: Option<f64>,
    pub fitness_membership: Option<f64>,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub experience: Option<String>,
}

impl IntoActiveModel<employee::ActiveModel> for EmployeeInput {
    fn into_active_model(self) -> employee::ActiveModel {
        employee::ActiveModel {
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
            department: Set(self.department),
            designation: Set(self.designation),
            salary: Set(self.salary),
            joining_date: Set(self.joining_date),
            status: Set(self.status),
            employee_code: Set(self.employee_code),
            employment_type: Set(self.employment_type),
            work_model: Set(self.work_model),
            linkedin: Set(self.linkedin),
            twitter: Set(self.twitter),
            instagram: Set(self.instagram),
            transportation_allowance: Set(self.transportation_allowance),
            meal_allowance: Set(self.meal_allowance),
            internet_allowance: Set(self.internet_allowance),
            health_insurance: Set(self.health_insurance),
            life_insurance: Set(self.life_insurance),
            training_program: Set(self.training_program),
            fitness_membership: Set(self.fitness_membership),
            gender: Set(self.gender),
            dob: Set(self.dob),
            address: Set(self.address),
            city: Set(self.city),
            experience: Set(self.experience),
            ..Default::default()
        }
    }
}

/// Contact-level patch. The four fields below are overwritten as
/// given; omitted optionals null out the stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeePatch {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Employee not found with id: {id}"))
}

#[derive(Clone)]
pub struct EmployeeService {
    employees: EmployeeDao,
}

impl EmployeeService {
    pub fn new(employees: EmployeeDao) -> Self {
        Self { employees }
    }

    pub async fn create(&self, input: EmployeeInput) -> Result<employee::Model, AppError> {
        Ok(self.employees.insert(input).await?)
    }

    pub async fn list(&self) -> Result<Vec<employee::Model>, AppError> {
        Ok(self.employees.find_all(|query| query).await?)
    }

    pub async fn get(&self, id: i64) -> Result<employee::Model, AppError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i64, patch: EmployeePatch) -> Result<employee::Model, AppError> {
        self.employees
            .update(id, move |active| {
                active.name = Set(patch.name);
                active.email = Set(patch.email);
                active.phone = Set(patch.phone);
                active.department = Set(patch.department);
            })
            .await
            .map_err(|err| match err {
                DaoLayerError::NotFound { .. } => not_found(id),
                other => other.into(),
            })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.employees.delete(id).await.map_err(|err| match err {
            DaoLayerError::NotFound { .. } => not_found(id),
            other => other.into(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::{EmployeePatch, EmployeeService};
    use crate::db::dao::DaoBase;
    use crate::db::entities::employee;
    use crate::error::AppError;

    fn profile(id: i64, name: &str, department: Option<&str>) -> employee::Model {
        employee::Model {
            id,
            name: name.to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            department: department.map(str::to_string),
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

    #[tokio::test]
    async fn get_missing_profile_names_the_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<employee::Model>::new()])
            .into_connection();
        let service = EmployeeService::new(DaoBase::new(&db));

        let err = service.get(42).await.expect_err("get should fail");
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.message(), "Employee not found with id: 42");
    }

    #[tokio::test]
    async fn update_overwrites_contact_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[profile(4, "Alice", Some("General"))]])
            .append_query_results([[profile(4, "Alice Doe", Some("Platform"))]])
            .into_connection();
        let service = EmployeeService::new(DaoBase::new(&db));

        let updated = service
            .update(
                4,
                EmployeePatch {
                    name: "Alice Doe".to_string(),
                    email: "alice@example.com".to_string(),
                    phone: None,
                    department: Some("Platform".to_string()),
                },
            )
            .await
            .expect("update should succeed");
        assert_eq!(updated.name, "Alice Doe");
        assert_eq!(updated.department.as_deref(), Some("Platform"));
    }

    #[tokio::test]
    async fn delete_missing_profile_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let service = EmployeeService::new(DaoBase::new(&db));

        let err = service.delete(42).await.expect_err("delete should fail");
        assert_eq!(err.message(), "Employee not found with id: 42");
    }
}
