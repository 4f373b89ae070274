use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::account;
use crate::db::entities::prelude::Account;

#[derive(Clone)]
pub struct AccountDao {
    db: DatabaseConnection,
}

impl DaoBase for AccountDao {
    type Entity = Account;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AccountDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<account::Model>> {
        let email = email.to_string();
        self.find_one(move |query| query.filter(account::Column::Email.eq(email)))
            .await
    }

    pub async fn create_account(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> DaoResult<account::Model> {
        let model = account::ActiveModel {
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            role: Set(role.to_string()),
            ..Default::default()
        };
        self.insert(model).await
    }
}
