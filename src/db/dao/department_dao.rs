use sea_orm::{DatabaseConnection, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::department;
use crate::db::entities::prelude::Department;

#[derive(Clone)]
pub struct DepartmentDao {
    db: DatabaseConnection,
}

impl DaoBase for DepartmentDao {
    type Entity = Department;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DepartmentDao {
    pub async fn create_department(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> DaoResult<department::Model> {
        let model = department::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.map(str::to_string)),
            ..Default::default()
        };
        self.insert(model).await
    }

    pub async fn rename(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> DaoResult<department::Model> {
        let name = name.to_string();
        let description = description.map(str::to_string);
        self.update(id, move |active| {
            active.name = Set(name);
            active.description = Set(description);
        })
        .await
    }
}
