use chrono::Local;

use crate::{
    db::dao::{AccountDao, DaoBase, EmployeeDao},
    db::entities::employee,
    error::AppError,
};

/// Outcome of resolving a caller-supplied id to an employee profile.
#[derive(Debug)]
pub enum Resolution {
    Found(employee::Model),
    Created(employee::Model),
}

impl Resolution {
    pub fn into_profile(self) -> employee::Model {
        match self {
            Resolution::Found(profile) | Resolution::Created(profile) => profile,
        }
    }
}

/// Maps the ids clients send (profile id or account id, they drift
/// apart once accounts exist without profiles) onto a single employee
/// profile, provisioning one on first contact.
#[derive(Clone)]
pub struct IdentityService {
    accounts: AccountDao,
    employees: EmployeeDao,
}

impl IdentityService {
    pub fn new(accounts: AccountDao, employees: EmployeeDao) -> Self {
        Self {
            accounts,
            employees,
        }
    }

    /// Three steps, first hit wins: employee profile by id, then
    /// account by id followed by profile lookup on the account email,
    /// then auto-provisioning a General/Employee profile named after
    /// the account.
    ///
    /// Two concurrent resolves for the same fresh account can both
    /// reach the provisioning step and create duplicate profiles;
    /// later lookups then settle on whichever row sorts first.
    pub async fn resolve(&self, id: i64) -> Result<Resolution, AppError> {
        if let Some(profile) = self.employees.find_by_id(id).await? {
            return Ok(Resolution::Found(profile));
        }

        let account = self
            .accounts
            .find_by_id(id)
            .await?
            .ok_or(AppError::IdentityNotFound(id))?;

        if let Some(profile) = self.employees.find_by_email(&account.email).await? {
            return Ok(Resolution::Found(profile));
        }

        let profile = self
            .employees
            .provision(
                &account.username,
                &account.email,
                Local::now().date_naive(),
                Some("General"),
                Some("Employee"),
            )
            .await?;
        Ok(Resolution::Created(profile))
    }
}
