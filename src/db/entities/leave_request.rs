use sea_orm::entity::prelude::*;

/// Leave-request row. Status is free text (PENDING / APPROVED / REJECTED
/// by convention); submission order is implicit in id order.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "leave_requests")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub employee_id: i64,
    pub leave_type: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: String,
    #[sea_orm(belongs_to, from = "employee_id", to = "id")]
    pub employee: HasOne<super::employee::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
