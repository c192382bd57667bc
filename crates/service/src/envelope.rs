//! Uniform response wrapper returned to callers for every operation.
//!
//! Absence keeps `success = true` with an empty payload; only unexpected
//! failures flip `success` to false.

use serde::{Deserialize, Serialize};

use crate::outcome::{Outcome, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self { data: None, message: String::new(), success: true }
    }
}

impl<T> From<Outcome<T>> for Envelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Found { data, message } => Self { data: Some(data), message, success: true },
            Outcome::Absent { message } => Self { data: None, message, success: true },
        }
    }
}

impl<T> From<ServiceResult<T>> for Envelope<T> {
    fn from(res: ServiceResult<T>) -> Self {
        match res {
            Ok(outcome) => outcome.into(),
            Err(e) => Self { data: None, message: e.to_string(), success: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ServiceError;

    #[test]
    fn found_carries_payload() {
        let env: Envelope<i32> = Ok(Outcome::found(7, "Author located!")).into();
        assert_eq!(env, Envelope { data: Some(7), message: "Author located!".into(), success: true });
    }

    #[test]
    fn absent_is_still_successful() {
        let env: Envelope<i32> = Ok(Outcome::absent("No record found!")).into();
        assert!(env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "No record found!");
    }

    #[test]
    fn failure_uses_error_text() {
        let env: Envelope<i32> = Err(ServiceError::Db("pool timed out".into())).into();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "database error: pool timed out");
    }

    #[test]
    fn serializes_null_payload() -> anyhow::Result<()> {
        let env: Envelope<Vec<i32>> = Envelope { message: "No author found!".into(), ..Default::default() };
        let json = serde_json::to_value(&env)?;
        assert_eq!(json, serde_json::json!({"data": null, "message": "No author found!", "success": true}));
        Ok(())
    }
}
