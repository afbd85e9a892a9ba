// src/utils.rs
//! URN and text helpers shared across the parsers.

/// Take the id segment out of a URN.
///
/// `"urn:li:fsd_profile:ACoAAA"` -> `"ACoAAA"`.
pub fn id_from_urn(urn: &str) -> Option<&str> {
    urn.split(':').nth(3).filter(|id| !id.is_empty())
}

/// Unwrap the inner URN from a composite one.
///
/// `"urn:li:fsd_entityResultViewModel:(urn:li:fsd_profile:ACoAAA,SEARCH)"`
/// -> `"urn:li:fsd_profile:ACoAAA"`.
pub fn urn_from_raw(raw: &str) -> Option<&str> {
    let (_, inner) = raw.split_once('(')?;
    inner.split(',').next().filter(|urn| !urn.is_empty())
}

/// Strip the middle-dot-delimited suffix from an organization name.
///
/// Upstream appends annotations like "· Full-time" to the name field;
/// idempotent on already-clean names.
pub fn clean_organization_name(name: &str) -> &str {
    name.split('·').next().unwrap_or(name).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_urn() {
        assert_eq!(id_from_urn("urn:li:fsd_profile:ACoAAA"), Some("ACoAAA"));
        assert_eq!(id_from_urn("urn:li:member:1136267662"), Some("1136267662"));
        assert_eq!(id_from_urn("urn:li"), None);
        assert_eq!(id_from_urn(""), None);
    }

    #[test]
    fn test_urn_from_raw() {
        assert_eq!(
            urn_from_raw("urn:li:fsd_entityResultViewModel:(urn:li:fsd_profile:ACoAAA,SEARCH_SRP,DEFAULT)"),
            Some("urn:li:fsd_profile:ACoAAA")
        );
        assert_eq!(urn_from_raw("urn:li:fsd_profile:ACoAAA"), None);
        assert_eq!(urn_from_raw(""), None);
    }

    #[test]
    fn test_clean_organization_name() {
        assert_eq!(clean_organization_name("Acme Inc. · Full-time"), "Acme Inc.");
        assert_eq!(clean_organization_name("EVOTEK · Part-time"), "EVOTEK");
        assert_eq!(clean_organization_name("Forcepoint"), "Forcepoint");
        // Idempotent: cleaning a clean name changes nothing.
        assert_eq!(clean_organization_name("Acme Inc."), "Acme Inc.");
    }
}
