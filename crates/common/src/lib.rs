//! Shared building blocks for the author/book API crates:
//! logging setup, the audit log, startup environment checks and
//! small wire types.

pub mod types;
pub mod utils;
pub mod env;
pub mod audit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }
}
