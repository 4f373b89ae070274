use sea_orm::entity::prelude::*;

/// HR-facing profile of a person's employment details. Email is indexed
/// for the resolver's lookup path but deliberately not unique: profile
/// auto-provisioning relies on find-then-create, and a DB constraint
/// would change the observable duplicate behavior under races.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(indexed)]
    pub email: String,
    pub phone: Option<String>,
    /// Free-text department label, not a foreign key to `departments`.
    pub department: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub joining_date: Option<Date>,
    /// ACTIVE / INACTIVE by convention, free text in storage.
    pub status: Option<String>,
    /// Custom badge code like EMP-0289, distinct from the numeric id.
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
    pub dob: Option<Date>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub experience: Option<String>,
    #[sea_orm(has_many)]
    pub attendance_records: HasMany<super::attendance::Entity>,
    #[sea_orm(has_many)]
    pub leave_requests: HasMany<super::leave_request::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
