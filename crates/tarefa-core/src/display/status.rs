//! One-line status messages for operations without a task to show.

use std::fmt;

/// A success or failure notice, such as "Deleted 3 completed tasks".
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Cleared 2 completed tasks");
        assert_eq!(format!("{success}"), "Success: Cleared 2 completed tasks\n");

        let failure = OperationStatus::failure(String::from("No task with ID 9"));
        assert!(format!("{failure}").starts_with("Error:"));
    }
}
