// src/types/tree.rs
//! Typed model of the voyager component tree.
//!
//! The upstream endpoint renders profile sections as a generic tree of UI
//! components. The same logical field can show up at different depths under
//! different wrappers, so every slot here is optional and deserialization of
//! a node never fails on a missing branch. The known node shapes are a small
//! closed set: entity nodes, text nodes, fixed-list wrappers, and references
//! to paged lists stored out of band in the `included` array.

use serde::Deserialize;

/// One element of the component tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub components: Option<ComponentBody>,
}

/// The per-node slots. At most one of these is meaningful per node in
/// practice, but upstream does not guarantee that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentBody {
    #[serde(rename = "entityComponent")]
    pub entity: Option<EntityComponent>,
    #[serde(rename = "textComponent")]
    pub text: Option<TextComponent>,
    #[serde(rename = "fixedListComponent")]
    pub fixed_list: Option<FixedListComponent>,
    /// Reference marker: not inline data but a pointer into the `included`
    /// array. The `*`-prefixed key is the upstream convention for these.
    #[serde(rename = "*pagedListComponent")]
    pub paged_list_ref: Option<ComponentRef>,
}

/// An out-of-band pointer to another entity, addressed by URN.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn urn(&self) -> &str {
        &self.0
    }
}

/// The main data-bearing node: title, subtitle, caption, an action-target
/// URL, and an ordered list of nested sub-components.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityComponent {
    pub title_v2: Option<TitleText>,
    pub subtitle: Option<AttributedText>,
    pub caption: Option<AttributedText>,
    pub metadata: Option<AttributedText>,
    pub text_action_target: Option<String>,
    pub sub_components: Option<SubComponents>,
}

impl EntityComponent {
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title_v2.as_ref()?.text.as_ref()?.text.as_deref()?)
    }

    pub fn subtitle_text(&self) -> Option<&str> {
        non_empty(self.subtitle.as_ref()?.text.as_deref()?)
    }

    pub fn caption_text(&self) -> Option<&str> {
        non_empty(self.caption.as_ref()?.text.as_deref()?)
    }

    pub fn metadata_text(&self) -> Option<&str> {
        non_empty(self.metadata.as_ref()?.text.as_deref()?)
    }

    pub fn action_target(&self) -> Option<&str> {
        non_empty(self.text_action_target.as_deref()?)
    }

    pub fn sub_components(&self) -> &[Component] {
        self.sub_components
            .as_ref()
            .and_then(|s| s.components.as_deref())
            .unwrap_or(&[])
    }
}

/// `{ "text": { "text": "…" } }`, the shape of `titleV2`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TitleText {
    pub text: Option<AttributedText>,
}

/// `{ "text": "…" }`, the innermost text wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AttributedText {
    pub text: Option<String>,
}

/// A leaf text node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextComponent {
    pub text: Option<AttributedText>,
}

impl TextComponent {
    pub fn value(&self) -> Option<&str> {
        non_empty(self.text.as_ref()?.text.as_deref()?)
    }
}

/// Groups sibling nodes without adding data of its own.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixedListComponent {
    pub components: Option<Vec<Component>>,
}

impl FixedListComponent {
    pub fn children(&self) -> &[Component] {
        self.components.as_deref().unwrap_or(&[])
    }
}

/// The `subComponents` wrapper inside an entity node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubComponents {
    pub components: Option<Vec<Component>>,
}

/// A list-root node: the ordered element list for one profile section,
/// plus paging metadata. Lives in the `included` array, addressed by URN.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PagedListComponent {
    pub components: Option<ListContents>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListContents {
    pub elements: Option<Vec<Component>>,
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Paging {
    pub total: Option<u64>,
}

impl PagedListComponent {
    pub fn elements(&self) -> &[Component] {
        self.components
            .as_ref()
            .and_then(|c| c.elements.as_deref())
            .unwrap_or(&[])
    }

    /// The total count declared by upstream paging metadata, which may be
    /// larger than the number of elements present in this response.
    pub fn declared_total(&self) -> u64 {
        self.components
            .as_ref()
            .and_then(|c| c.paging.as_ref())
            .and_then(|p| p.total)
            .unwrap_or(0)
    }
}

impl Component {
    pub fn entity(&self) -> Option<&EntityComponent> {
        self.components.as_ref()?.entity.as_ref()
    }

    pub fn paged_list_ref(&self) -> Option<&ComponentRef> {
        self.components.as_ref()?.paged_list_ref.as_ref()
    }

    /// First leaf text node reachable by depth-first traversal, children in
    /// document order. Descends transparently through fixed-list wrappers
    /// and entity sub-components.
    pub fn first_text_component(&self) -> Option<&TextComponent> {
        let body = self.components.as_ref()?;
        if let Some(text) = &body.text {
            return Some(text);
        }
        if let Some(fixed_list) = &body.fixed_list {
            if let Some(found) = fixed_list
                .children()
                .iter()
                .find_map(|c| c.first_text_component())
            {
                return Some(found);
            }
        }
        if let Some(entity) = &body.entity {
            if let Some(found) = entity
                .sub_components()
                .iter()
                .find_map(|c| c.first_text_component())
            {
                return Some(found);
            }
        }
        None
    }

    pub fn first_text(&self) -> Option<&str> {
        self.first_text_component()?.value()
    }

    /// All leaf text nodes in document order.
    pub fn text_components(&self) -> Vec<&TextComponent> {
        let mut found = Vec::new();
        self.collect_text_components(&mut found);
        found
    }

    /// All non-empty leaf text values in document order.
    pub fn texts(&self) -> Vec<&str> {
        self.text_components()
            .into_iter()
            .filter_map(TextComponent::value)
            .collect()
    }

    fn collect_text_components<'a>(&'a self, out: &mut Vec<&'a TextComponent>) {
        let Some(body) = self.components.as_ref() else {
            return;
        };
        if let Some(text) = &body.text {
            out.push(text);
        }
        if let Some(fixed_list) = &body.fixed_list {
            for child in fixed_list.children() {
                child.collect_text_components(out);
            }
        }
        if let Some(entity) = &body.entity {
            for child in entity.sub_components() {
                child.collect_text_components(out);
            }
        }
    }
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component(value: serde_json::Value) -> Component {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_first_text_through_fixed_list() {
        let node = component(json!({
            "components": {
                "fixedListComponent": {
                    "components": [
                        {"components": {"textComponent": {"text": {"text": "inner"}}}}
                    ]
                }
            }
        }));
        assert_eq!(node.first_text(), Some("inner"));
    }

    #[test]
    fn test_texts_in_document_order() {
        let node = component(json!({
            "components": {
                "fixedListComponent": {
                    "components": [
                        {"components": {"textComponent": {"text": {"text": "first"}}}},
                        {"components": {"textComponent": {"text": {"text": ""}}}},
                        {"components": {"textComponent": {"text": {"text": "second"}}}}
                    ]
                }
            }
        }));
        assert_eq!(node.texts(), vec!["first", "second"]);
    }

    #[test]
    fn test_descends_into_entity_sub_components() {
        let node = component(json!({
            "components": {
                "entityComponent": {
                    "subComponents": {
                        "components": [
                            {"components": {"textComponent": {"text": {"text": "nested"}}}}
                        ]
                    }
                }
            }
        }));
        assert_eq!(node.first_text(), Some("nested"));
    }

    #[test]
    fn test_malformed_branches_yield_nothing() {
        let node = component(json!({"components": null}));
        assert_eq!(node.first_text(), None);
        assert!(node.texts().is_empty());

        let node = component(json!({}));
        assert_eq!(node.first_text(), None);

        let node = component(json!({
            "components": {"entityComponent": {"subComponents": null}}
        }));
        assert!(node.entity().unwrap().sub_components().is_empty());
    }

    #[test]
    fn test_entity_accessors_skip_empty_strings() {
        let node = component(json!({
            "components": {
                "entityComponent": {
                    "titleV2": {"text": {"text": ""}},
                    "subtitle": {"text": "Acme"},
                    "textActionTarget": ""
                }
            }
        }));
        let entity = node.entity().unwrap();
        assert_eq!(entity.title(), None);
        assert_eq!(entity.subtitle_text(), Some("Acme"));
        assert_eq!(entity.action_target(), None);
    }

    #[test]
    fn test_paged_list_defaults() {
        let list: PagedListComponent = serde_json::from_value(json!({})).unwrap();
        assert!(list.elements().is_empty());
        assert_eq!(list.declared_total(), 0);

        let list: PagedListComponent = serde_json::from_value(json!({
            "components": {"elements": [{}], "paging": {"total": 7}}
        }))
        .unwrap();
        assert_eq!(list.elements().len(), 1);
        assert_eq!(list.declared_total(), 7);
    }
}
