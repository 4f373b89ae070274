use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::employee;
use crate::db::entities::prelude::Employee;

#[derive(Clone)]
pub struct EmployeeDao {
    db: DatabaseConnection,
}

impl DaoBase for EmployeeDao {
    type Entity = Employee;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl EmployeeDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<employee::Model>> {
        let email = email.to_string();
        self.find_one(move |query| query.filter(employee::Column::Email.eq(email)))
            .await
    }

    /// Minimal ACTIVE profile as synthesized by identity resolution and
    /// registration. Everything beyond the given fields stays unset.
    pub async fn provision(
        &self,
        name: &str,
        email: &str,
        joining_date: NaiveDate,
        department: Option<&str>,
        designation: Option<&str>,
    ) -> DaoResult<employee::Model> {
        let model = employee::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            status: Set(Some("ACTIVE".to_string())),
            joining_date: Set(Some(joining_date)),
            department: Set(department.map(str::to_string)),
            designation: Set(designation.map(str::to_string)),
            ..Default::default()
        };
        self.insert(model).await
    }
}
