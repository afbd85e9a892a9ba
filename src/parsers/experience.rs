// src/parsers/experience.rs
//! Work-experience extraction from profile-components responses.
//!
//! One employer with several roles arrives as a position group: the group
//! element carries a reference marker pointing at a nested list root in the
//! `included` array, and each element of that nested list is an ordinary
//! single-role entry. Groups expand in place, preserving the group's slot in
//! the section order. An unresolvable group degrades to zero records.

use serde_json::Value;
use tracing::debug;

use crate::parsers::dates::{contains_month_token, parse_date_range};
use crate::parsers::included_entities;
use crate::parsers::index::EntityIndex;
use crate::parsers::urls::{extract_organization_id, OrganizationKind};
use crate::types::records::Experience;
use crate::types::tree::{Component, ComponentRef, EntityComponent};
use crate::utils::clean_organization_name;

/// Reference-marker token identifying a nested position-group list.
const POSITION_GROUP_TOKEN: &str = "profilePositionGroup";

/// Text runs longer than this are description candidates; shorter runs are
/// assumed to be captions, locations or other fragments.
const DESCRIPTION_MIN_CHARS: usize = 50;

const SKILLS_PREFIX: &str = "Skills:";

/// Decode one experience response document into an ordered record list.
///
/// Returns an empty list when the document holds no list root; that outcome
/// is indistinguishable from "no experience entries" by design.
pub fn parse_experience_response(response: &Value) -> Vec<Experience> {
    let included = included_entities(response);
    let index = EntityIndex::new(included);
    let Some(list) = index.primary_paged_list() else {
        debug!(
            "No paged list found among {} included entities",
            included.len()
        );
        return Vec::new();
    };

    let mut experiences = Vec::new();
    for element in list.elements() {
        if let Some(group_ref) = position_group_ref(element) {
            experiences.extend(expand_position_group(group_ref, &index));
        } else if let Some(experience) = extract_experience(element, &index) {
            experiences.push(experience);
        }
    }
    experiences
}

/// Decode a caller-assembled sequence of paginated response documents.
pub fn parse_experience_pages(responses: &[Value]) -> Vec<Experience> {
    responses.iter().flat_map(parse_experience_response).collect()
}

/// A group element carries a reference to a nested list root whose URN
/// contains the position-group token.
fn position_group_ref(element: &Component) -> Option<&ComponentRef> {
    let entity = element.entity()?;
    entity.sub_components().iter().find_map(|sub| {
        sub.paged_list_ref()
            .filter(|r| r.urn().contains(POSITION_GROUP_TOKEN))
    })
}

fn expand_position_group(group_ref: &ComponentRef, index: &EntityIndex) -> Vec<Experience> {
    let Some(nested) = index.paged_list(group_ref.urn()) else {
        debug!("Unresolvable position group reference: {}", group_ref.urn());
        return Vec::new();
    };
    nested
        .elements()
        .iter()
        .filter_map(|element| extract_experience(element, index))
        .collect()
}

/// Extract a single record. `None` only when the element carries no entity
/// node at all; every other missing piece degrades to a null field.
fn extract_experience(element: &Component, index: &EntityIndex) -> Option<Experience> {
    let entity = element.entity()?;

    let title = entity.title().map(str::to_string);
    let company_url = entity.action_target().map(str::to_string);
    let company_id = company_url
        .as_deref()
        .and_then(|url| extract_organization_id(url, OrganizationKind::Company));

    let date_range = parse_date_range(entity.caption_text().unwrap_or(""));
    let (description, skills) = scan_sub_components(entity);
    let location = extract_location(entity);

    let organization = company_id
        .as_deref()
        .and_then(|id| index.organization(&OrganizationKind::Company.urn(id)));
    let company_logo = organization.as_ref().and_then(|org| org.logo_url());

    // The index commonly supplies only the logo, not the name; the subtitle
    // is the authoritative name source in most responses.
    let company = organization
        .as_ref()
        .and_then(|org| org.name.clone())
        .or_else(|| entity.subtitle_text().map(str::to_string))
        .map(|name| clean_organization_name(&name).to_string());

    Some(Experience {
        title,
        company,
        company_id,
        company_url,
        company_logo,
        start_date: date_range.start,
        end_date: date_range.end,
        is_current: date_range.is_current,
        location,
        description,
        skills,
    })
}

/// Scan sibling sub-components for the description and the skills list.
///
/// The description is the first text run over the length threshold that does
/// not look like a date; a run with the `Skills:` prefix is split on middle
/// dots into individual skills.
fn scan_sub_components(entity: &EntityComponent) -> (Option<String>, Vec<String>) {
    let mut description = None;
    let mut skills = Vec::new();

    for sub in entity.sub_components() {
        for text in sub.texts() {
            if let Some(rest) = text.strip_prefix(SKILLS_PREFIX) {
                skills = rest
                    .split('·')
                    .map(str::trim)
                    .filter(|skill| !skill.is_empty())
                    .map(str::to_string)
                    .collect();
            } else if description.is_none()
                && text.chars().count() > DESCRIPTION_MIN_CHARS
                && !contains_month_token(text)
            {
                description = Some(text.to_string());
            }
        }
    }
    (description, skills)
}

/// Location lives in a sibling entity node's metadata text. The month-token
/// guard keeps a reshaped date fragment from being taken for a location.
fn extract_location(entity: &EntityComponent) -> Option<String> {
    entity.sub_components().iter().find_map(|sub| {
        let text = sub.entity()?.metadata_text()?;
        if contains_month_token(text) {
            None
        } else {
            Some(text.to_string())
        }
    })
}
