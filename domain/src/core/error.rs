//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid agent role: {0}")]
    InvalidRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_role_display() {
        let error = DomainError::InvalidRole("critic-9".to_string());
        assert_eq!(error.to_string(), "Invalid agent role: critic-9");
    }
}
