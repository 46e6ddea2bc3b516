use thiserror::Error;

/// Errors raised while building, loading or selecting tasks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("invalid date '{value}', expected DD-MM-YY")]
    InvalidDate { value: String },

    #[error("invalid urgency status '{value}'")]
    InvalidUrgency { value: String },

    #[error("invalid task id: {id}")]
    UnknownTask { id: usize },

    #[error("invalid task selection '{value}'")]
    InvalidSelection { value: String },

    #[error("task name must not be empty")]
    EmptyName,

    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("aborted")]
    Aborted,
}

impl TaskError {
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    pub fn invalid_urgency(value: impl Into<String>) -> Self {
        Self::InvalidUrgency {
            value: value.into(),
        }
    }

    pub fn invalid_selection(value: impl Into<String>) -> Self {
        Self::InvalidSelection {
            value: value.into(),
        }
    }

    /// Attach a record line number to an error raised while parsing that line
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::MalformedRecord { .. } | Self::Aborted => self,
            other => Self::MalformedRecord {
                line,
                reason: other.to_string(),
            },
        }
    }
}
