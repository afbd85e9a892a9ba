// src/parsers/search.rs
//! Field extractors for people-search hits.
//!
//! Search hits are flatter than profile sections: no component tree, just a
//! record with a handful of deeply optional sub-objects. Each extractor is
//! an independent, pure mapping from the hit to one field and returns a
//! neutral default when the expected sub-structure is missing.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::records::SearchResult;
use crate::utils::{id_from_urn, urn_from_raw};

static MUTUAL_CONNECTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+mutual\s+connection").unwrap());
static CONNECTION_DEGREE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").unwrap());
static PUBLIC_IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/in/([^?]+)").unwrap());
static MEMBER_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"member:(\d+)").unwrap());

/// Headline separators between role and company, tried in order.
static COMPANY_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"\s+@\s+(.+)$").unwrap(),
        Regex::new(r"\s+at\s+(.+)$").unwrap(),
        Regex::new(r"\s+At\s+(.+)$").unwrap(),
        Regex::new(r"\s+AT\s+(.+)$").unwrap(),
    ]
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutualConnections {
    pub count: u32,
    pub url: Option<String>,
}

/// Parse "55 mutual connections" out of the first insight, if any.
pub fn extract_mutual_connections(item: &Value) -> MutualConnections {
    let Some(insight) = item
        .get("insightsResolutionResults")
        .and_then(Value::as_array)
        .and_then(|insights| insights.first())
        .and_then(|insight| insight.get("simpleInsight"))
        .filter(|insight| insight.is_object())
    else {
        return MutualConnections::default();
    };
    let title_text = insight
        .get("title")
        .and_then(|title| title.get("text"))
        .and_then(Value::as_str)
        .unwrap_or("");
    let count = MUTUAL_CONNECTIONS_RE
        .captures(title_text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);
    MutualConnections {
        count,
        url: insight
            .get("navigationUrl")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// "• 2nd" -> "2nd".
pub fn extract_connection_degree(item: &Value) -> Option<String> {
    let badge_text = item
        .get("badgeText")
        .and_then(|badge| badge.get("text"))
        .and_then(Value::as_str)?;
    CONNECTION_DEGREE_RE
        .find(badge_text)
        .map(|m| m.as_str().to_string())
}

pub fn extract_premium_status(item: &Value) -> bool {
    item.get("badgeIcon")
        .and_then(|badge| badge.get("attributes"))
        .and_then(Value::as_array)
        .and_then(|attributes| attributes.first())
        .and_then(|attribute| attribute.get("detailData"))
        .and_then(|detail| detail.get("icon"))
        .and_then(Value::as_str)
        .map(|icon| icon.contains("PREMIUM"))
        .unwrap_or(false)
}

/// Pull the vanity slug out of a profile URL's `/in/` path segment.
pub fn extract_public_identifier(profile_url: &str) -> Option<String> {
    let caps = PUBLIC_IDENTIFIER_RE.captures(profile_url)?;
    Some(caps[1].to_string())
}

/// "Sr Engineer at Acme" -> "Acme". Handles "@", "at", "At" and "AT".
pub fn extract_company_from_job_title(job_title: &str) -> Option<String> {
    COMPANY_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(job_title)
            .map(|caps| caps[1].trim().to_string())
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingStatus {
    pub status: Option<String>,
    pub is_hiring: bool,
    pub is_open_to_work: bool,
}

/// Classify the profile-photo ring ("HIRING", "OPEN_TO_WORK", …).
pub fn extract_ring_status(item: &Value) -> RingStatus {
    let status = item
        .get("image")
        .and_then(|image| image.get("attributes"))
        .and_then(Value::as_array)
        .and_then(|attributes| attributes.first())
        .and_then(|attribute| attribute.get("detailData"))
        .and_then(|detail| detail.get("nonEntityProfilePicture"))
        .and_then(|picture| picture.get("ringStatus"))
        .and_then(Value::as_str)
        .map(str::to_string);
    RingStatus {
        is_hiring: status.as_deref() == Some("HIRING"),
        is_open_to_work: status.as_deref() == Some("OPEN_TO_WORK"),
        status,
    }
}

/// Numeric member id from the tracking URN.
pub fn extract_member_id(item: &Value) -> Option<u64> {
    let tracking_urn = item.get("trackingUrn").and_then(Value::as_str)?;
    MEMBER_ID_RE
        .captures(tracking_urn)
        .and_then(|caps| caps[1].parse().ok())
}

fn extract_image_url(item: &Value) -> Option<String> {
    let attributes = item.get("image")?.get("attributes")?.as_array()?;
    for attribute in attributes {
        let artifacts = attribute
            .get("detailData")
            .and_then(|detail| detail.get("nonEntityProfilePicture"))
            .and_then(|picture| picture.get("vectorImage"))
            .and_then(|image| image.get("artifacts"))
            .and_then(Value::as_array);
        if let Some(artifacts) = artifacts.filter(|artifacts| !artifacts.is_empty()) {
            return artifacts[0]
                .get("fileIdentifyingUrlPathSegment")
                .and_then(Value::as_str)
                .map(str::to_string);
        }
    }
    None
}

/// Aggregate all field extractors over one search hit.
///
/// Non-object input yields an all-default record; there is no fatal error
/// path in this layer.
pub fn parse_search_result(item: &Value) -> SearchResult {
    let job_title = item
        .get("primarySubtitle")
        .and_then(|subtitle| subtitle.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let profile_url = item
        .get("navigationContext")
        .and_then(|context| context.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let mutual = extract_mutual_connections(item);
    let ring = extract_ring_status(item);

    SearchResult {
        urn_id: item
            .get("entityUrn")
            .and_then(Value::as_str)
            .and_then(urn_from_raw)
            .and_then(id_from_urn)
            .map(str::to_string),
        lead_name: item
            .get("title")
            .and_then(|title| title.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string),
        location: item
            .get("secondarySubtitle")
            .and_then(|subtitle| subtitle.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string),
        image_url: extract_image_url(item),
        distance: item
            .get("entityCustomTrackingInfo")
            .and_then(|info| info.get("memberDistance"))
            .and_then(Value::as_str)
            .map(str::to_string),
        public_identifier: profile_url
            .as_deref()
            .and_then(extract_public_identifier),
        connection_degree: extract_connection_degree(item),
        mutual_connections_count: mutual.count,
        mutual_connections_url: mutual.url,
        is_premium: extract_premium_status(item),
        company: job_title
            .as_deref()
            .and_then(extract_company_from_job_title),
        member_id: extract_member_id(item),
        profile_ring_status: ring.status,
        is_hiring: ring.is_hiring,
        is_open_to_work: ring.is_open_to_work,
        job_title,
        profile_url,
    }
}

/// Aggregate a whole page of search hits, in page order.
pub fn parse_search_results(items: &[Value]) -> Vec<SearchResult> {
    items.iter().map(parse_search_result).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mutual_connections() {
        let item = json!({
            "insightsResolutionResults": [{
                "simpleInsight": {
                    "title": {"text": "55 mutual connections"},
                    "navigationUrl": "https://linkedin.com/mutual"
                }
            }]
        });
        let mutual = extract_mutual_connections(&item);
        assert_eq!(mutual.count, 55);
        assert_eq!(mutual.url.as_deref(), Some("https://linkedin.com/mutual"));
    }

    #[test]
    fn test_single_mutual_connection() {
        let item = json!({
            "insightsResolutionResults": [{
                "simpleInsight": {"title": {"text": "1 mutual connection"}}
            }]
        });
        let mutual = extract_mutual_connections(&item);
        assert_eq!(mutual.count, 1);
        assert_eq!(mutual.url, None);
    }

    #[test]
    fn test_no_mutual_connections() {
        assert_eq!(
            extract_mutual_connections(&json!({"insightsResolutionResults": []})),
            MutualConnections::default()
        );
        assert_eq!(
            extract_mutual_connections(&json!({})),
            MutualConnections::default()
        );
    }

    #[test]
    fn test_connection_degree() {
        for degree in ["1st", "2nd", "3rd"] {
            let item = json!({"badgeText": {"text": format!("• {degree}")}});
            assert_eq!(extract_connection_degree(&item).as_deref(), Some(degree));
        }
        assert_eq!(extract_connection_degree(&json!({})), None);
    }

    #[test]
    fn test_premium_status() {
        let item = json!({
            "badgeIcon": {"attributes": [{"detailData": {"icon": "IMG_PREMIUM_BUG_GOLD_48DP"}}]}
        });
        assert!(extract_premium_status(&item));
        assert!(!extract_premium_status(&json!({"badgeIcon": {}})));
        assert!(!extract_premium_status(&json!({})));
    }

    #[test]
    fn test_public_identifier() {
        assert_eq!(
            extract_public_identifier(
                "https://www.linkedin.com/in/katie-oberle-37a64a278?miniProfileUrn=x"
            )
            .as_deref(),
            Some("katie-oberle-37a64a278")
        );
        assert_eq!(
            extract_public_identifier("https://www.linkedin.com/in/plain").as_deref(),
            Some("plain")
        );
        assert_eq!(extract_public_identifier("https://example.com/"), None);
    }

    #[test]
    fn test_company_from_job_title() {
        assert_eq!(
            extract_company_from_job_title("Sr Engineer at Acme").as_deref(),
            Some("Acme")
        );
        assert_eq!(
            extract_company_from_job_title("Recruiter @ Med4Hire").as_deref(),
            Some("Med4Hire")
        );
        assert_eq!(
            extract_company_from_job_title("Director At BigCo").as_deref(),
            Some("BigCo")
        );
        assert_eq!(extract_company_from_job_title("Freelancer"), None);
    }

    #[test]
    fn test_ring_status() {
        let item = json!({
            "image": {"attributes": [{"detailData": {"nonEntityProfilePicture": {"ringStatus": "HIRING"}}}]}
        });
        let ring = extract_ring_status(&item);
        assert_eq!(ring.status.as_deref(), Some("HIRING"));
        assert!(ring.is_hiring);
        assert!(!ring.is_open_to_work);

        let item = json!({
            "image": {"attributes": [{"detailData": {"nonEntityProfilePicture": {"ringStatus": "OPEN_TO_WORK"}}}]}
        });
        let ring = extract_ring_status(&item);
        assert!(!ring.is_hiring);
        assert!(ring.is_open_to_work);

        assert_eq!(extract_ring_status(&json!({})), RingStatus::default());
    }

    #[test]
    fn test_member_id() {
        assert_eq!(
            extract_member_id(&json!({"trackingUrn": "urn:li:member:1136267662"})),
            Some(1136267662)
        );
        assert_eq!(extract_member_id(&json!({})), None);
    }

    #[test]
    fn test_aggregate_result() {
        let item = json!({
            "entityUrn": "urn:li:fsd_entityResultViewModel:(urn:li:fsd_profile:ACoAAA,SEARCH_SRP,DEFAULT)",
            "title": {"text": "Katie Oberle"},
            "primarySubtitle": {"text": "Talent Acquisition at Med4Hire"},
            "secondarySubtitle": {"text": "Cincinnati, OH"},
            "navigationContext": {"url": "https://www.linkedin.com/in/katie-oberle-37a64a278?x=y"},
            "entityCustomTrackingInfo": {"memberDistance": "DISTANCE_2"},
            "trackingUrn": "urn:li:member:1136267662",
            "badgeText": {"text": "• 2nd"},
            "insightsResolutionResults": [{
                "simpleInsight": {"title": {"text": "12 mutual connections"}}
            }],
            "image": {"attributes": [{"detailData": {"nonEntityProfilePicture": {
                "ringStatus": "OPEN_TO_WORK",
                "vectorImage": {"artifacts": [{"fileIdentifyingUrlPathSegment": "photo.png"}]}
            }}}]}
        });

        let result = parse_search_result(&item);
        assert_eq!(result.urn_id.as_deref(), Some("ACoAAA"));
        assert_eq!(result.lead_name.as_deref(), Some("Katie Oberle"));
        assert_eq!(
            result.job_title.as_deref(),
            Some("Talent Acquisition at Med4Hire")
        );
        assert_eq!(result.company.as_deref(), Some("Med4Hire"));
        assert_eq!(result.location.as_deref(), Some("Cincinnati, OH"));
        assert_eq!(
            result.public_identifier.as_deref(),
            Some("katie-oberle-37a64a278")
        );
        assert_eq!(result.connection_degree.as_deref(), Some("2nd"));
        assert_eq!(result.mutual_connections_count, 12);
        assert_eq!(result.member_id, Some(1136267662));
        assert_eq!(result.distance.as_deref(), Some("DISTANCE_2"));
        assert_eq!(result.image_url.as_deref(), Some("photo.png"));
        assert!(result.is_open_to_work);
        assert!(!result.is_hiring);
        assert!(!result.is_premium);
    }

    #[test]
    fn test_non_object_input_yields_defaults() {
        assert_eq!(parse_search_result(&json!(null)), SearchResult::default());
        assert_eq!(parse_search_result(&json!("junk")), SearchResult::default());
    }

    #[test]
    fn test_results_preserve_page_order() {
        let items = vec![
            json!({"title": {"text": "A"}}),
            json!({"title": {"text": "B"}}),
        ];
        let names: Vec<_> = parse_search_results(&items)
            .into_iter()
            .map(|result| result.lead_name.unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
