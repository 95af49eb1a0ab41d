use std::sync::Arc;

use platform_db::EmployeeRepository;
use tracing::{debug, instrument};

use crate::{
    dto::EmployeeDto,
    error::{HrError, HrResult},
    mapper,
};

/// Employee use cases on top of an [`EmployeeRepository`].
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    #[instrument(name = "hr.employees.get", skip(self))]
    pub async fn get_employee_by_id(&self, id: i64) -> HrResult<EmployeeDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(EmployeeDto::from)
            .ok_or(HrError::NotFound(id))
    }

    #[instrument(name = "hr.employees.create", skip_all)]
    pub async fn create_employee(&self, dto: EmployeeDto) -> HrResult<EmployeeDto> {
        let stored = self.repository.save(mapper::new_record(dto)).await?;
        debug!(id = stored.id, "employee created");
        Ok(stored.into())
    }

    #[instrument(name = "hr.employees.list", skip(self))]
    pub async fn get_all_employees(&self) -> HrResult<Vec<EmployeeDto>> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(EmployeeDto::from).collect())
    }

    /// Returns `false` instead of failing when the id is unknown.
    #[instrument(name = "hr.employees.delete", skip(self))]
    pub async fn delete_employee_by_id(&self, id: i64) -> HrResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repository.delete_by_id(id).await?;
        debug!(id, "employee deleted");
        Ok(true)
    }
}
