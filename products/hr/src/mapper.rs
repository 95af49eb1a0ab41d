use entity::employees;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::dto::EmployeeDto;

impl From<employees::Model> for EmployeeDto {
    fn from(model: employees::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            date_of_joining: model.date_of_joining,
            is_active: model.is_active,
        }
    }
}

/// Build a row to insert. Any client-supplied id is dropped so storage assigns one.
pub(crate) fn new_record(dto: EmployeeDto) -> employees::ActiveModel {
    employees::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        date_of_joining: Set(dto.date_of_joining),
        is_active: Set(dto.is_active),
    }
}
