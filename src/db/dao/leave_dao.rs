use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::leave_request;
use crate::db::entities::prelude::LeaveRequest;

#[derive(Clone)]
pub struct LeaveDao {
    db: DatabaseConnection,
}

impl DaoBase for LeaveDao {
    type Entity = LeaveRequest;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl LeaveDao {
    pub async fn submit(
        &self,
        employee_id: i64,
        leave_type: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: &str,
    ) -> DaoResult<leave_request::Model> {
        let model = leave_request::ActiveModel {
            employee_id: Set(employee_id),
            leave_type: Set(leave_type.to_string()),
            start_date: Set(start_date),
            end_date: Set(end_date),
            status: Set(status.to_string()),
            ..Default::default()
        };
        self.insert(model).await
    }

    pub async fn set_status(&self, id: i64, status: &str) -> DaoResult<leave_request::Model> {
        let status = status.to_string();
        self.update(id, move |active| {
            active.status = Set(status);
        })
        .await
    }

    pub async fn find_by_employee(&self, employee_id: i64) -> DaoResult<Vec<leave_request::Model>> {
        self.find_all(move |query| query.filter(leave_request::Column::EmployeeId.eq(employee_id)))
            .await
    }

    /// Exact, case-sensitive status match.
    pub async fn find_by_status(&self, status: &str) -> DaoResult<Vec<leave_request::Model>> {
        let status = status.to_string();
        self.find_all(move |query| query.filter(leave_request::Column::Status.eq(status)))
            .await
    }

    /// APPROVED requests whose [start, end] range contains `date`,
    /// inclusive on both ends.
    pub async fn find_approved_on(&self, date: NaiveDate) -> DaoResult<Vec<leave_request::Model>> {
        self.find_all(move |query| {
            query
                .filter(leave_request::Column::Status.eq("APPROVED"))
                .filter(leave_request::Column::StartDate.lte(date))
                .filter(leave_request::Column::EndDate.gte(date))
        })
        .await
    }
}
