use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, DatabaseConnection, IntoActiveModel, QueryFilter, Set};

use super::error::DaoLayerError;
use super::{DaoBase, DaoResult};
use crate::db::entities::attendance;
use crate::db::entities::prelude::Attendance;

#[derive(Clone)]
pub struct AttendanceDao {
    db: DatabaseConnection,
}

impl DaoBase for AttendanceDao {
    type Entity = Attendance;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AttendanceDao {
    /// The one record for (employee, date), if any. Uniqueness of that
    /// pair is maintained by the check-in flow, not by a constraint.
    pub async fn find_for_day(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> DaoResult<Option<attendance::Model>> {
        self.find_one(move |query| {
            query
                .filter(attendance::Column::EmployeeId.eq(employee_id))
                .filter(attendance::Column::Date.eq(date))
        })
        .await
    }

    pub async fn find_by_employee(&self, employee_id: i64) -> DaoResult<Vec<attendance::Model>> {
        self.find_all(move |query| query.filter(attendance::Column::EmployeeId.eq(employee_id)))
            .await
    }

    pub async fn find_by_date(&self, date: NaiveDate) -> DaoResult<Vec<attendance::Model>> {
        self.find_all(move |query| query.filter(attendance::Column::Date.eq(date)))
            .await
    }

    pub async fn open_day(
        &self,
        employee_id: i64,
        date: NaiveDate,
        check_in: NaiveTime,
    ) -> DaoResult<attendance::Model> {
        let model = attendance::ActiveModel {
            employee_id: Set(employee_id),
            date: Set(date),
            check_in: Set(check_in),
            check_out: Set(None),
            working_hours: Set(None),
            ..Default::default()
        };
        self.insert(model).await
    }

    /// Single UPDATE closing out an already-fetched record.
    pub async fn complete(
        &self,
        record: attendance::Model,
        check_out: NaiveTime,
        working_hours: f64,
    ) -> DaoResult<attendance::Model> {
        let mut active = record.into_active_model();
        active.check_out = Set(Some(check_out));
        active.working_hours = Set(Some(working_hours));
        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }
}
