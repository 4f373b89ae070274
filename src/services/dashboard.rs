use std::cmp::Ordering;

use chrono::Local;
use serde_json::{Value, json};

use crate::{
    db::dao::{AttendanceDao, DaoBase, EmployeeDao, LeaveDao},
    db::entities::{attendance, employee, leave_request},
    error::AppError,
};

/// Fixed annual leave allotment, in days.
const ANNUAL_LEAVE_DAYS: i64 = 24;

/// Integer attendance percentage, `"0%"` when nobody is active.
pub fn attendance_rate(present_today: usize, active: usize) -> String {
    if active == 0 {
        return "0%".to_string();
    }
    format!("{}%", present_today * 100 / active)
}

/// Letter grade over average working hours.
pub fn grade(avg_hours: f64) -> &'static str {
    if avg_hours >= 8.5 {
        "A+"
    } else if avg_hours >= 7.5 {
        "A"
    } else if avg_hours >= 6.0 {
        "B"
    } else {
        "C"
    }
}

fn name_of(employees: &[employee::Model], employee_id: i64) -> String {
    employees
        .iter()
        .find(|e| e.id == employee_id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| format!("Employee #{employee_id}"))
}

fn activity(text: String, time: String, kind: &str) -> Value {
    json!({ "text": text, "time": time, "type": kind })
}

/// Administrative metrics over full table snapshots. Counts are exact
/// at read time; nothing is cached.
pub fn admin_summary(
    employees: &[employee::Model],
    leaves: &[leave_request::Model],
    today_records: &[attendance::Model],
    on_leave: &[leave_request::Model],
) -> Value {
    let active = employees
        .iter()
        .filter(|e| {
            e.status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case("ACTIVE"))
        })
        .count();
    let pending = leaves.iter().filter(|l| l.status == "PENDING").count();

    let on_leave_names: Vec<Value> = on_leave
        .iter()
        .map(|l| json!({ "name": name_of(employees, l.employee_id) }))
        .collect();

    // Newest hires first; profiles without a joining date sort last and
    // get the literal "Recently" as their time label.
    let mut hires: Vec<&employee::Model> = employees.iter().collect();
    hires.sort_by(|a, b| match (a.joining_date, b.joining_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut recent: Vec<Value> = hires
        .iter()
        .take(3)
        .map(|e| {
            activity(
                format!("{} joined the company", e.name),
                e.joining_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "Recently".to_string()),
                "HIRE",
            )
        })
        .collect();

    let mut recent_leaves: Vec<&leave_request::Model> = leaves.iter().collect();
    recent_leaves.sort_by(|a, b| b.id.cmp(&a.id));
    recent.extend(recent_leaves.iter().take(3).map(|l| {
        activity(
            format!(
                "{} requested {} leave",
                name_of(employees, l.employee_id),
                l.leave_type
            ),
            l.start_date.to_string(),
            "LEAVE",
        )
    }));

    json!({
        "totalEmployees": employees.len(),
        "activeEmployees": active,
        "pendingLeaves": pending,
        "onLeaveToday": on_leave.len(),
        "onLeaveEmployees": on_leave_names,
        "attendanceRate": attendance_rate(today_records.len(), active),
        "recentActivities": recent,
    })
}

/// Self-service metrics for one employee's own records.
pub fn self_summary(records: &[attendance::Model], leaves: &[leave_request::Model]) -> Value {
    let approved = leaves.iter().filter(|l| l.status == "APPROVED").count() as i64;

    let avg_hours = if records.is_empty() {
        0.0
    } else {
        records
            .iter()
            .map(|r| r.working_hours.unwrap_or(0.0))
            .sum::<f64>()
            / records.len() as f64
    };

    let mut clock_records: Vec<&attendance::Model> = records.iter().collect();
    clock_records.sort_by(|a, b| b.date.cmp(&a.date));
    let mut recent: Vec<Value> = clock_records
        .iter()
        .take(3)
        .map(|r| {
            activity(
                format!("Checked in at {}", r.check_in.format("%H:%M")),
                r.date.to_string(),
                "CLOCK",
            )
        })
        .collect();

    let mut recent_leaves: Vec<&leave_request::Model> = leaves.iter().collect();
    recent_leaves.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    recent.extend(recent_leaves.iter().take(2).map(|l| {
        activity(
            format!("{} leave {}", l.leave_type, l.status),
            l.start_date.to_string(),
            "LEAVE",
        )
    }));

    json!({
        "presentDays": records.len(),
        "leavesRemaining": ANNUAL_LEAVE_DAYS - approved,
        "performanceScore": grade(avg_hours),
        "upcomingHolidays": 0,
        "recentActivities": recent,
    })
}

/// Self view for an account that has no employee profile yet. The
/// stats read path never provisions one.
pub fn placeholder_summary() -> Value {
    json!({
        "presentDays": 0,
        "leavesRemaining": ANNUAL_LEAVE_DAYS,
        "performanceScore": "C",
        "upcomingHolidays": 0,
        "recentActivities": [],
    })
}

#[derive(Clone)]
pub struct DashboardService {
    employees: EmployeeDao,
    attendance: AttendanceDao,
    leaves: LeaveDao,
}

impl DashboardService {
    pub fn new(employees: EmployeeDao, attendance: AttendanceDao, leaves: LeaveDao) -> Self {
        Self {
            employees,
            attendance,
            leaves,
        }
    }

    pub async fn admin_stats(&self) -> Result<Value, AppError> {
        let today = Local::now().date_naive();
        let employees = self.employees.find_all(|query| query).await?;
        let leaves = self.leaves.find_all(|query| query).await?;
        let today_records = self.attendance.find_by_date(today).await?;
        let on_leave = self.leaves.find_approved_on(today).await?;

        Ok(admin_summary(&employees, &leaves, &today_records, &on_leave))
    }

    pub async fn self_stats(&self, email: &str) -> Result<Value, AppError> {
        let Some(profile) = self.employees.find_by_email(email).await? else {
            return Ok(placeholder_summary());
        };

        let records = self.attendance.find_by_employee(profile.id).await?;
        let leaves = self.leaves.find_by_employee(profile.id).await?;
        Ok(self_summary(&records, &leaves))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).expect("date should be valid")
    }

    fn profile(id: i64, name: &str, status: Option<&str>, joined: Option<NaiveDate>) -> employee::Model {
        employee::Model {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            department: None,
            designation: None,
            salary: None,
            joining_date: joined,
            status: status.map(str::to_string),
            employee_code: None,
            employment_type: None,
            work_model: None,
            linkedin: None,
            twitter: None,
            instagram: None,
            transportation_allowance: None,
            meal_allowance: None,
            internet_allowance: None,
            health_insurance: None,
            life_insurance: None,
            training_program: None,
            fitness_membership: None,
            gender: None,
            dob: None,
            address: None,
            city: None,
            experience: None,
        }
    }

    fn record(id: i64, employee_id: i64, date: NaiveDate, hours: Option<f64>) -> attendance::Model {
        attendance::Model {
            id,
            employee_id,
            date,
            check_in: chrono::NaiveTime::from_hms_opt(9, 0, 0).expect("time should be valid"),
            check_out: None,
            working_hours: hours,
        }
    }

    fn leave(id: i64, employee_id: i64, status: &str, start: NaiveDate) -> leave_request::Model {
        leave_request::Model {
            id,
            employee_id,
            leave_type: "ANNUAL".to_string(),
            start_date: start,
            end_date: start,
            status: status.to_string(),
        }
    }

    #[test]
    fn attendance_rate_guards_division_by_zero() {
        assert_eq!(attendance_rate(5, 0), "0%");
        assert_eq!(attendance_rate(1, 2), "50%");
        assert_eq!(attendance_rate(1, 3), "33%");
        assert_eq!(attendance_rate(3, 3), "100%");
    }

    #[test]
    fn grade_thresholds_are_inclusive() {
        assert_eq!(grade(9.0), "A+");
        assert_eq!(grade(8.5), "A+");
        assert_eq!(grade(8.49), "A");
        assert_eq!(grade(7.5), "A");
        assert_eq!(grade(7.49), "B");
        assert_eq!(grade(6.0), "B");
        assert_eq!(grade(5.99), "C");
        assert_eq!(grade(0.0), "C");
    }

    #[test]
    fn admin_counts_active_case_insensitively_and_pending_exactly() {
        let employees = vec![
            profile(1, "Alice", Some("ACTIVE"), None),
            profile(2, "Bob", Some("Active"), None),
            profile(3, "Cara", Some("RESIGNED"), None),
            profile(4, "Dan", None, None),
        ];
        let leaves = vec![
            leave(1, 1, "PENDING", day(3, 9)),
            leave(2, 2, "pending", day(3, 9)),
            leave(3, 3, "APPROVED", day(3, 9)),
        ];

        let summary = admin_summary(&employees, &leaves, &[], &[]);
        assert_eq!(summary["totalEmployees"], 4);
        assert_eq!(summary["activeEmployees"], 2);
        assert_eq!(summary["pendingLeaves"], 1);
    }

    #[test]
    fn admin_rate_uses_active_count_as_denominator() {
        let employees = vec![
            profile(1, "Alice", Some("ACTIVE"), None),
            profile(2, "Bob", Some("ACTIVE"), None),
            profile(3, "Cara", Some("RESIGNED"), None),
        ];
        let today = vec![record(1, 1, day(3, 2), None)];

        let summary = admin_summary(&employees, &[], &today, &[]);
        assert_eq!(summary["attendanceRate"], "50%");

        let none_active = vec![profile(3, "Cara", Some("RESIGNED"), None)];
        let summary = admin_summary(&none_active, &[], &today, &[]);
        assert_eq!(summary["attendanceRate"], "0%");
    }

    #[test]
    fn hire_feed_sorts_missing_joining_dates_last() {
        let employees = vec![
            profile(1, "Alice", Some("ACTIVE"), None),
            profile(2, "Bob", Some("ACTIVE"), Some(day(2, 1))),
            profile(3, "Cara", Some("ACTIVE"), Some(day(4, 1))),
            profile(4, "Dan", Some("ACTIVE"), Some(day(3, 1))),
        ];

        let summary = admin_summary(&employees, &[], &[], &[]);
        let feed = summary["recentActivities"]
            .as_array()
            .expect("activities should be an array");
        assert_eq!(feed[0]["text"], "Cara joined the company");
        assert_eq!(feed[0]["type"], "HIRE");
        assert_eq!(feed[1]["text"], "Dan joined the company");
        assert_eq!(feed[2]["text"], "Bob joined the company");
    }

    #[test]
    fn hire_without_joining_date_is_labelled_recently() {
        let employees = vec![profile(1, "Alice", Some("ACTIVE"), None)];

        let summary = admin_summary(&employees, &[], &[], &[]);
        let feed = summary["recentActivities"]
            .as_array()
            .expect("activities should be an array");
        assert_eq!(feed[0]["time"], "Recently");
    }

    #[test]
    fn on_leave_names_come_from_profiles() {
        let employees = vec![profile(1, "Alice", Some("ACTIVE"), None)];
        let on_leave = vec![leave(1, 1, "APPROVED", day(3, 2)), leave(2, 9, "APPROVED", day(3, 2))];

        let summary = admin_summary(&employees, &[], &[], &on_leave);
        assert_eq!(summary["onLeaveToday"], 2);
        assert_eq!(summary["onLeaveEmployees"][0]["name"], "Alice");
        assert_eq!(summary["onLeaveEmployees"][1]["name"], "Employee #9");
    }

    #[test]
    fn self_summary_counts_all_days_and_subtracts_approved_leaves() {
        let records = vec![
            record(1, 1, day(3, 2), Some(8.0)),
            record(2, 1, day(3, 3), Some(9.0)),
        ];
        let leaves = vec![
            leave(1, 1, "APPROVED", day(3, 9)),
            leave(2, 1, "APPROVED", day(3, 10)),
            leave(3, 1, "APPROVED", day(3, 11)),
            leave(4, 1, "PENDING", day(3, 12)),
        ];

        let summary = self_summary(&records, &leaves);
        assert_eq!(summary["presentDays"], 2);
        assert_eq!(summary["leavesRemaining"], 21);
        assert_eq!(summary["performanceScore"], "A+");
        assert_eq!(summary["upcomingHolidays"], 0);
    }

    #[test]
    fn self_summary_treats_missing_hours_as_zero() {
        let records = vec![
            record(1, 1, day(3, 2), Some(8.0)),
            record(2, 1, day(3, 3), None),
        ];

        let summary = self_summary(&records, &[]);
        // mean of 8.0 and 0.0
        assert_eq!(summary["performanceScore"], "C");
    }

    #[test]
    fn self_summary_without_records_grades_c() {
        let summary = self_summary(&[], &[]);
        assert_eq!(summary["presentDays"], 0);
        assert_eq!(summary["performanceScore"], "C");
    }

    #[test]
    fn leaves_remaining_can_go_negative() {
        let leaves: Vec<leave_request::Model> = (1..=25)
            .map(|i| leave(i, 1, "APPROVED", day(3, 1)))
            .collect();

        let summary = self_summary(&[], &leaves);
        assert_eq!(summary["leavesRemaining"], -1);
    }

    #[test]
    fn placeholder_has_full_allotment_and_empty_feed() {
        let summary = placeholder_summary();
        assert_eq!(summary["presentDays"], 0);
        assert_eq!(summary["leavesRemaining"], 24);
        assert_eq!(summary["performanceScore"], "C");
        assert_eq!(
            summary["recentActivities"]
                .as_array()
                .expect("activities should be an array")
                .len(),
            0
        );
    }

    #[tokio::test]
    async fn self_stats_without_profile_returns_placeholder() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<employee::Model>::new()])
            .into_connection();
        let service = DashboardService::new(DaoBase::new(&db), DaoBase::new(&db), DaoBase::new(&db));

        let stats = service
            .self_stats("ghost@example.com")
            .await
            .expect("stats should succeed");
        assert_eq!(stats, placeholder_summary());
    }

    #[tokio::test]
    async fn admin_stats_aggregates_all_snapshots() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                profile(1, "Alice", Some("ACTIVE"), Some(day(2, 1))),
                profile(2, "Bob", Some("ACTIVE"), Some(day(1, 1))),
            ]])
            .append_query_results([vec![leave(1, 1, "PENDING", day(3, 9))]])
            .append_query_results([vec![record(1, 1, day(3, 2), None)]])
            .append_query_results([vec![leave(2, 2, "APPROVED", day(3, 2))]])
            .into_connection();
        let service = DashboardService::new(DaoBase::new(&db), DaoBase::new(&db), DaoBase::new(&db));

        let stats = service.admin_stats().await.expect("stats should succeed");
        assert_eq!(stats["totalEmployees"], 2);
        assert_eq!(stats["activeEmployees"], 2);
        assert_eq!(stats["pendingLeaves"], 1);
        assert_eq!(stats["onLeaveToday"], 1);
        assert_eq!(stats["attendanceRate"], "50%");
        assert_eq!(stats["onLeaveEmployees"][0]["name"], "Bob");
    }
}
