//! Employee entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timesheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{trimmed, trimmed_opt};

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub emp_id: DbId,
    pub first_name: String,
    pub second_name: String,
    /// Derived from the names on create; see
    /// [`derive_email`](timesheet_core::employee::derive_email).
    pub email_address: String,
    pub designation: String,
    pub project_name: String,
    pub manager: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an employee. The id is assigned by the caller.
///
/// Names are trimmed on the way in, so the stored names and the derived
/// address always agree.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    pub emp_id: DbId,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    pub second_name: String,
    #[validate(length(min = 1))]
    pub designation: String,
    #[validate(length(min = 1))]
    pub project_name: String,
    #[validate(length(min = 1))]
    pub manager: String,
}

/// DTO for updating an employee. All fields are optional.
///
/// When `email_address` is omitted it is re-derived from the resulting names.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEmployee {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 1))]
    pub second_name: Option<String>,
    #[validate(email)]
    pub email_address: Option<String>,
    #[validate(length(min = 1))]
    pub designation: Option<String>,
    #[validate(length(min = 1))]
    pub project_name: Option<String>,
    #[validate(length(min = 1))]
    pub manager: Option<String>,
}
