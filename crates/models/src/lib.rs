//! SeaORM entities for authors and books, plus connection helpers.

pub mod errors;
pub mod db;
pub mod author;
pub mod book;

#[cfg(test)]
mod tests;
