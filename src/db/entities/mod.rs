#[allow(unused_imports)]
pub mod prelude {
    pub use super::account::Entity as Account;
    pub use super::attendance::Entity as Attendance;
    pub use super::department::Entity as Department;
    pub use super::employee::Entity as Employee;
    pub use super::leave_request::Entity as LeaveRequest;
}

pub mod account;
pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave_request;
