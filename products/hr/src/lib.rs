//! HR module: employee records.

mod dto;
mod error;
mod mapper;
mod service;

pub use dto::EmployeeDto;
pub use error::{HrError, HrResult};
pub use service::EmployeeService;
