// src/parsers/index.rs
//! Lookup over the `included` array of a response document.
//!
//! `included` interleaves unrelated entity kinds: list-root components,
//! organization records, endorsement records. Items are addressed by their
//! `entityUrn`; references inside the component tree resolve against this
//! index. A missing entry is a normal outcome (upstream simply did not
//! expand that entity), never an error.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::types::tree::PagedListComponent;

pub(crate) const PAGED_LIST_TYPE: &str =
    "com.linkedin.voyager.dash.identity.profile.tetris.PagedListComponent";

/// Preferred logo artifact width.
const PREFERRED_LOGO_WIDTH: u64 = 200;

/// Identifier → entity lookup, built once per decode call and read-only
/// thereafter. Duplicate URNs are last-write-wins.
pub struct EntityIndex<'a> {
    by_urn: HashMap<&'a str, &'a Value>,
    included: &'a [Value],
}

impl<'a> EntityIndex<'a> {
    pub fn new(included: &'a [Value]) -> Self {
        let mut by_urn = HashMap::new();
        for item in included {
            if let Some(urn) = item.get("entityUrn").and_then(Value::as_str) {
                by_urn.insert(urn, item);
            }
        }
        Self { by_urn, included }
    }

    pub fn resolve(&self, urn: &str) -> Option<&'a Value> {
        self.by_urn.get(urn).copied()
    }

    /// Typed view of an organization entity (company or school).
    pub fn organization(&self, urn: &str) -> Option<Organization> {
        serde_json::from_value(self.resolve(urn)?.clone()).ok()
    }

    /// Typed view of a list-root entity, used to expand position groups.
    pub fn paged_list(&self, urn: &str) -> Option<PagedListComponent> {
        serde_json::from_value(self.resolve(urn)?.clone()).ok()
    }

    /// Select the list root holding the record set being decoded.
    ///
    /// A document can carry several list roots at once (the outer section
    /// list plus nested position-group lists); the outer one is reliably the
    /// one with the most immediately-visible elements, with the declared
    /// total as tie-break. The first candidate wins a full tie.
    pub fn primary_paged_list(&self) -> Option<PagedListComponent> {
        let mut best: Option<(usize, u64, PagedListComponent)> = None;
        for item in self.included {
            if item.get("$type").and_then(Value::as_str) != Some(PAGED_LIST_TYPE) {
                continue;
            }
            let Ok(list) = serde_json::from_value::<PagedListComponent>(item.clone()) else {
                continue;
            };
            let key = (list.elements().len(), list.declared_total());
            let better = match &best {
                Some((count, total, _)) => key > (*count, *total),
                None => true,
            };
            if better {
                best = Some((key.0, key.1, list));
            }
        }
        let (count, total, list) = best?;
        debug!(
            "Selected paged list with {} elements (declared total {})",
            count, total
        );
        Some(list)
    }
}

/// The denormalized organization fields the extractors consume. Upstream
/// commonly supplies only the logo here, not the name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    pub name: Option<String>,
    logo_resolution_result: Option<LogoResolutionResult>,
}

impl Organization {
    /// Resolve the logo URL, preferring the 200×200 artifact and falling
    /// back to the first available size.
    pub fn logo_url(&self) -> Option<String> {
        let image = self
            .logo_resolution_result
            .as_ref()?
            .vector_image
            .as_ref()?;
        let artifacts = image.artifacts.as_deref().unwrap_or(&[]);
        let artifact = artifacts
            .iter()
            .find(|a| a.width == Some(PREFERRED_LOGO_WIDTH))
            .or_else(|| artifacts.first())?;
        let root = image.root_url.as_deref().unwrap_or("");
        let segment = artifact
            .file_identifying_url_path_segment
            .as_deref()
            .unwrap_or("");
        Some(format!("{root}{segment}"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LogoResolutionResult {
    vector_image: Option<VectorImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VectorImage {
    root_url: Option<String>,
    artifacts: Option<Vec<Artifact>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Artifact {
    width: Option<u64>,
    file_identifying_url_path_segment: Option<String>,
}
