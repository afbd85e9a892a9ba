// src/parsers/education.rs
//! Education extraction from profile-components responses.
//!
//! Education entries are flatter than experience: no position groups, and
//! the sub-component mapping is positional rather than content-based. The
//! first sub-component's text is the field of study, the second's is the
//! description, by index order only.

use serde_json::Value;
use tracing::debug;

use crate::parsers::dates::parse_year_range;
use crate::parsers::included_entities;
use crate::parsers::index::EntityIndex;
use crate::parsers::urls::{extract_organization_id, OrganizationKind};
use crate::types::records::Education;
use crate::types::tree::{Component, EntityComponent};
use crate::utils::clean_organization_name;

/// Decode one education response document into an ordered record list.
pub fn parse_education_response(response: &Value) -> Vec<Education> {
    let included = included_entities(response);
    let index = EntityIndex::new(included);
    let Some(list) = index.primary_paged_list() else {
        debug!(
            "No paged list found among {} included entities",
            included.len()
        );
        return Vec::new();
    };
    list.elements()
        .iter()
        .filter_map(|element| extract_education(element, &index))
        .collect()
}

/// Decode a caller-assembled sequence of paginated response documents.
pub fn parse_education_pages(responses: &[Value]) -> Vec<Education> {
    responses.iter().flat_map(parse_education_response).collect()
}

fn extract_education(element: &Component, index: &EntityIndex) -> Option<Education> {
    let entity = element.entity()?;

    let degree = entity.title().map(str::to_string);
    let school_url = entity.action_target().map(str::to_string);
    let school_id = school_url
        .as_deref()
        .and_then(|url| extract_organization_id(url, OrganizationKind::School));

    let (start_year, end_year) = parse_year_range(entity.caption_text().unwrap_or(""));
    let (field_of_study, description) = positional_texts(entity);

    let school_logo = school_id
        .as_deref()
        .and_then(|id| index.organization(&OrganizationKind::School.urn(id)))
        .and_then(|org| org.logo_url());
    let school = entity
        .subtitle_text()
        .map(|name| clean_organization_name(name).to_string());

    Some(Education {
        school,
        school_id,
        school_url,
        school_logo,
        degree,
        field_of_study,
        start_year,
        end_year,
        description,
    })
}

fn positional_texts(entity: &EntityComponent) -> (Option<String>, Option<String>) {
    let mut field_of_study = None;
    let mut description = None;
    for (idx, sub) in entity.sub_components().iter().enumerate() {
        let Some(text) = sub.first_text() else {
            continue;
        };
        match idx {
            0 => field_of_study = Some(text.to_string()),
            1 => description = Some(text.to_string()),
            _ => {}
        }
    }
    (field_of_study, description)
}
