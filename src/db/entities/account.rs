use sea_orm::entity::prelude::*;

/// Authenticated identity record. Linked to an employee profile only by
/// matching email; the link is soft and never enforced by a foreign key.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Stored normalized with the role namespace prefix, e.g. `ROLE_ADMIN`.
    pub role: String,
}

impl ActiveModelBehavior for ActiveModel {}
