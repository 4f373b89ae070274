use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::JwtKeys,
    db::dao::DaoContext,
    services::{
        attendance::AttendanceService, auth::AuthService, dashboard::DashboardService,
        department::DepartmentService, employee::EmployeeService, identity::IdentityService,
        leave::LeaveService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn identity(&self) -> IdentityService {
        IdentityService::new(self.daos.account(), self.daos.employee())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.identity(), self.daos.attendance())
    }

    pub fn leave(&self) -> LeaveService {
        LeaveService::new(self.identity(), self.daos.leave())
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.daos.employee(), self.daos.attendance(), self.daos.leave())
    }

    pub fn employee(&self) -> EmployeeService {
        EmployeeService::new(self.daos.employee())
    }

    pub fn department(&self) -> DepartmentService {
        DepartmentService::new(self.daos.department())
    }

    pub fn auth(&self, jwt: &JwtKeys) -> AuthService {
        AuthService::new(self.daos.account(), self.daos.employee(), jwt.clone())
    }
}
