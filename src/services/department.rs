use crate::{
    db::dao::{DaoLayerError, DepartmentDao},
    db::entities::department,
    error::AppError,
};

fn not_found() -> AppError {
    AppError::not_found("Department not found")
}

#[derive(Clone)]
pub struct DepartmentService {
    departments: DepartmentDao,
}

impl DepartmentService {
    pub fn new(departments: DepartmentDao) -> Self {
        Self { departments }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<department::Model, AppError> {
        Ok(self.departments.create_department(name, description).await?)
    }

    pub async fn list(&self) -> Result<Vec<department::Model>, AppError> {
        Ok(self.departments.find_all(|query| query).await?)
    }

    pub async fn get(&self, id: i64) -> Result<department::Model, AppError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<department::Model, AppError> {
        self.departments
            .rename(id, name, description)
            .await
            .map_err(|err| match err {
                DaoLayerError::NotFound { .. } => not_found(),
                other => other.into(),
            })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.departments.delete(id).await.map_err(|err| match err {
            DaoLayerError::NotFound { .. } => not_found(),
            other => other.into(),
        })?;
        Ok(())
    }
}
