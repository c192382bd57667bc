//! Typed result of a service operation.

use crate::errors::ServiceError;

/// What a completed operation produced: a payload, or an explained absence
/// (unknown id, dangling author reference).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found { data: T, message: String },
    Absent { message: String },
}

pub type ServiceResult<T> = Result<Outcome<T>, ServiceError>;

impl<T> Outcome<T> {
    pub fn found(data: T, message: impl Into<String>) -> Self {
        Self::Found { data, message: message.into() }
    }

    pub fn absent(message: impl Into<String>) -> Self {
        Self::Absent { message: message.into() }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Found { message, .. } | Self::Absent { message } => message,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Found { data, .. } => Some(data),
            Self::Absent { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Found { data, .. } => Some(data),
            Self::Absent { .. } => None,
        }
    }
}
