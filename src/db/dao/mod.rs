pub mod account_dao;
pub mod attendance_dao;
pub mod base;
mod context;
pub mod department_dao;
pub mod employee_dao;
pub mod error;
pub mod leave_dao;

pub use account_dao::AccountDao;
pub use attendance_dao::AttendanceDao;
pub use base::DaoBase;
pub use context::DaoContext;
pub use department_dao::DepartmentDao;
pub use employee_dao::EmployeeDao;
pub use error::{DaoLayerError, DaoResult};
pub use leave_dao::LeaveDao;
