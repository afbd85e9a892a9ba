//! voyager-parsers: typed decoders for LinkedIn voyager profile responses.
//!
//! The upstream profile-components endpoint returns a presentation-oriented
//! component tree rather than a data schema: the same logical field can sit
//! at different depths under different wrappers depending on the layout
//! variant used to render it. This crate recovers flat, typed records
//! (work experience, education, search hits) from those documents.
//!
//! The network/session layer is deliberately not part of this crate; it is
//! expected to hand over fully materialized JSON documents.
//!
//! ```
//! use serde_json::json;
//! use voyager_parsers::parse_experience_response;
//!
//! let doc = json!({"included": []});
//! assert!(parse_experience_response(&doc).is_empty());
//! ```

pub mod parsers;
pub mod types;
pub mod utils;

pub use parsers::education::{parse_education_pages, parse_education_response};
pub use parsers::experience::{parse_experience_pages, parse_experience_response};
pub use parsers::search::{parse_search_result, parse_search_results};
pub use parsers::{parse_education_json, parse_experience_json, parse_search_json};
pub use types::records::{DateRange, Education, Experience, SearchResult};
