// src/parsers/mod.rs
//! Decoders for voyager profile-components and people-search responses.
//!
//! Everything in here is a pure transform over fully materialized JSON: no
//! I/O, no shared state. The fetch layer hands each function one response
//! document (or a caller-assembled list of paginated documents) and gets
//! back an ordered record list. Schema drift degrades to null fields and
//! partial records; no decode path raises.

use anyhow::{Context, Result};
use serde_json::Value;

pub mod dates;
pub mod education;
pub mod experience;
pub mod index;
pub mod search;
pub mod urls;

use crate::types::records::{Education, Experience, SearchResult};

/// The `included` array of a response document, or empty when absent.
pub(crate) fn included_entities(response: &Value) -> &[Value] {
    response
        .get("included")
        .and_then(Value::as_array)
        .map(|entities| entities.as_slice())
        .unwrap_or(&[])
}

/// Parse an experience response straight from its raw JSON body.
pub fn parse_experience_json(raw: &str) -> Result<Vec<Experience>> {
    let document: Value =
        serde_json::from_str(raw).context("Experience response is not valid JSON")?;
    Ok(experience::parse_experience_response(&document))
}

/// Parse an education response straight from its raw JSON body.
pub fn parse_education_json(raw: &str) -> Result<Vec<Education>> {
    let document: Value =
        serde_json::from_str(raw).context("Education response is not valid JSON")?;
    Ok(education::parse_education_response(&document))
}

/// Parse a page of search hits straight from its raw JSON body, which must
/// be a JSON array of hit objects.
pub fn parse_search_json(raw: &str) -> Result<Vec<SearchResult>> {
    let document: Value = serde_json::from_str(raw).context("Search page is not valid JSON")?;
    let items = document
        .as_array()
        .context("Search page is not a JSON array")?;
    Ok(search::parse_search_results(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_entry_points() {
        assert!(parse_experience_json("{\"included\": []}").unwrap().is_empty());
        assert!(parse_experience_json("not json").is_err());
        assert!(parse_education_json("{}").unwrap().is_empty());
        assert!(parse_search_json("[]").unwrap().is_empty());
        assert!(parse_search_json("{}").is_err());
    }
}
