use serde::{Deserialize, Serialize};

/// A student record.
///
/// The roll number acts as the primary key: uniqueness is enforced when a
/// record is created, and updates never rewrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub roll_number: String,
    pub course: String,
}

/// Input for creating a new student. All fields are required and must be
/// non-empty; presence is validated in the handler layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub course: String,
}

/// Input for updating an existing student. The roll number selects the
/// record; only present, non-empty fields overwrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentInput {
    #[serde(default)]
    pub roll_number: String,
    pub name: Option<String>,
    pub course: Option<String>,
}

/// Input for deleting a student by roll number or name. At least one key
/// must be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStudentInput {
    pub name: Option<String>,
    pub roll_number: Option<String>,
}

/// Confirmation body returned by the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
