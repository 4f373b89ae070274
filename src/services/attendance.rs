use chrono::{Local, NaiveDate, NaiveTime};

use crate::{
    db::dao::AttendanceDao,
    db::entities::attendance,
    error::AppError,
    services::identity::IdentityService,
};

/// Elapsed time between check-in and check-out in hours, truncated to
/// whole minutes first. An overnight pair (check-out before check-in on
/// the clock) comes out negative.
pub fn working_hours(check_in: NaiveTime, check_out: NaiveTime) -> f64 {
    (check_out - check_in).num_minutes() as f64 / 60.0
}

/// Per-day attendance state machine: at most one record per employee
/// and day, opened by check-in and closed exactly once by check-out.
#[derive(Clone)]
pub struct AttendanceService {
    identity: IdentityService,
    attendance: AttendanceDao,
}

impl AttendanceService {
    pub fn new(identity: IdentityService, attendance: AttendanceDao) -> Self {
        Self {
            identity,
            attendance,
        }
    }

    pub async fn check_in(&self, id: i64) -> Result<attendance::Model, AppError> {
        let profile = self.identity.resolve(id).await?.into_profile();
        let now = Local::now();
        let today = now.date_naive();

        if self
            .attendance
            .find_for_day(profile.id, today)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyCheckedIn);
        }

        Ok(self.attendance.open_day(profile.id, today, now.time()).await?)
    }

    pub async fn check_out(&self, id: i64) -> Result<attendance::Model, AppError> {
        let profile = self.identity.resolve(id).await?.into_profile();
        let now = Local::now();
        let today = now.date_naive();

        let record = self
            .attendance
            .find_for_day(profile.id, today)
            .await?
            .ok_or(AppError::NoCheckInFound)?;

        if record.check_out.is_some() {
            return Err(AppError::AlreadyCheckedOut);
        }

        let hours = working_hours(record.check_in, now.time());
        Ok(self.attendance.complete(record, now.time(), hours).await?)
    }

    /// Full history for an employee, id resolved the same way the
    /// check-in flow resolves it.
    pub async fn history(&self, id: i64) -> Result<Vec<attendance::Model>, AppError> {
        let profile = self.identity.resolve(id).await?.into_profile();
        Ok(self.attendance.find_by_employee(profile.id).await?)
    }

    pub async fn on_date(&self, date: NaiveDate) -> Result<Vec<attendance::Model>, AppError> {
        Ok(self.attendance.find_by_date(date).await?)
    }
}
