use platform_api::ApiError;
use platform_db::DbError;
use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("employee {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] DbError),
}

impl From<HrError> for ApiError {
    fn from(value: HrError) -> Self {
        match value {
            HrError::NotFound(_) => ApiError::NotFound(value.to_string()),
            HrError::Storage(err) => ApiError::internal(err.into()),
        }
    }
}
