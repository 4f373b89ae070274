pub mod attendance;
pub mod auth;
pub mod context;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod identity;
pub mod leave;

pub use context::ServiceContext;
