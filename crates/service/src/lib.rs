//! Service layer for the author/book API.
//! - Each operation takes the store handle explicitly and runs mutations in
//!   their own transaction.
//! - Results are typed (`Outcome` / `ServiceError`) and convert into the
//!   `Envelope` returned to callers.

pub mod errors;
pub mod outcome;
pub mod envelope;
pub mod dto;
pub mod audit;
pub mod author_service;
pub mod book_service;
#[cfg(test)]
pub mod test_support;

pub use author_service::AuthorService;
pub use book_service::BookService;
pub use envelope::Envelope;
pub use outcome::{Outcome, ServiceResult};
