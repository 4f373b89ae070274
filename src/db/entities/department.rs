use sea_orm::entity::prelude::*;

/// Standalone label registry. Employee profiles carry a free-text
/// department name; nothing joins on this table.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
