// src/types/records.rs
//! Flat record types produced by the parsers.
//!
//! Every field the upstream tree may or may not carry is optional: a missing
//! branch degrades to `None` on the record, never to a failed parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized date range. `is_current` and `end` are mutually exclusive:
/// an ongoing range never carries an end date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub is_current: bool,
}

/// One work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub company_id: Option<String>,
    pub company_url: Option<String>,
    pub company_logo: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub location: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

/// One education entry. Dates are plain years here; upstream captions for
/// education rarely carry a month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: Option<String>,
    pub school_id: Option<String>,
    pub school_url: Option<String>,
    pub school_logo: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub description: Option<String>,
}

/// One people-search hit, aggregated from the per-field extractors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub urn_id: Option<String>,
    pub lead_name: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub profile_url: Option<String>,
    pub image_url: Option<String>,
    pub distance: Option<String>,
    pub public_identifier: Option<String>,
    pub connection_degree: Option<String>,
    pub mutual_connections_count: u32,
    pub mutual_connections_url: Option<String>,
    pub is_premium: bool,
    pub company: Option<String>,
    pub member_id: Option<u64>,
    pub profile_ring_status: Option<String>,
    pub is_hiring: bool,
    pub is_open_to_work: bool,
}
