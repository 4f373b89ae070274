use sea_orm::DatabaseConnection;

use super::{AccountDao, AttendanceDao, DaoBase, DepartmentDao, EmployeeDao, LeaveDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn account(&self) -> AccountDao {
        DaoBase::new(&self.db)
    }

    pub fn employee(&self) -> EmployeeDao {
        DaoBase::new(&self.db)
    }

    pub fn department(&self) -> DepartmentDao {
        DaoBase::new(&self.db)
    }

    pub fn attendance(&self) -> AttendanceDao {
        DaoBase::new(&self.db)
    }

    pub fn leave(&self) -> LeaveDao {
        DaoBase::new(&self.db)
    }
}
