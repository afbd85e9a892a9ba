// src/types/mod.rs
pub mod records;
pub mod tree;

pub use records::{DateRange, Education, Experience, SearchResult};
