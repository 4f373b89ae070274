use sea_orm::entity::prelude::*;

/// One per (employee, date). Created at check-in, completed once at
/// check-out; never deleted.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_records")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub employee_id: i64,
    pub date: Date,
    pub check_in: Time,
    pub check_out: Option<Time>,
    /// Fractional hours, whole-minute resolution. Set together with
    /// `check_out`.
    pub working_hours: Option<f64>,
    #[sea_orm(belongs_to, from = "employee_id", to = "id")]
    pub employee: HasOne<super::employee::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
