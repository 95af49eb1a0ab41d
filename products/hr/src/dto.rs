use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire shape of an employee record.
///
/// `id` is ignored on create and always present in responses. `name` and
/// `dateOfJoining` are required on create; a missing `isactive` reads as `false`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmployeeDto {
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "dateOfJoining")]
    pub date_of_joining: NaiveDate,
    #[serde(rename = "isactive", default)]
    pub is_active: bool,
}
