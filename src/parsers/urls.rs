// src/parsers/urls.rs
//! Organization identifier extraction from action-target URLs.

use std::sync::LazyLock;

use regex::Regex;

static COMPANY_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/company/(\d+)/?").unwrap());
static SCHOOL_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/school/(\d+)/?").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationKind {
    Company,
    School,
}

impl OrganizationKind {
    fn id_pattern(self) -> &'static Regex {
        match self {
            OrganizationKind::Company => &COMPANY_ID_RE,
            OrganizationKind::School => &SCHOOL_ID_RE,
        }
    }

    /// URN under which the organization appears in the `included` array.
    pub fn urn(self, id: &str) -> String {
        match self {
            OrganizationKind::Company => format!("urn:li:fsd_company:{id}"),
            OrganizationKind::School => format!("urn:li:fsd_school:{id}"),
        }
    }
}

/// Pull the numeric organization id out of a URL like
/// `https://www.linkedin.com/company/143650/`.
pub fn extract_organization_id(url: &str, kind: OrganizationKind) -> Option<String> {
    let caps = kind.id_pattern().captures(url)?;
    Some(caps[1].to_string())
}
