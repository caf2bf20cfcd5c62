//! Shared props and class helpers for the component set.

use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Props for stateless wrappers that only add classes around children.
#[derive(Properties, PartialEq)]
pub struct BasicProps {
    /// Optional element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes appended after the component's own.
    #[prop_or_default]
    pub class: Classes,
    /// Content.
    #[prop_or_default]
    pub children: Children,
}

/// Merge a base class string with consumer-provided classes.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    let mut classes = Classes::from(base);
    if !extra.is_empty() {
        classes.push(extra.clone());
    }
    classes
}

/// Render `tag` with `base_class` plus the caller's classes around children.
#[must_use]
pub fn render_container(tag: &'static str, base_class: &'static str, props: &BasicProps) -> Html {
    let mut node = VTag::new(tag);
    if let Some(id) = &props.id {
        node.add_attribute("id", id.clone());
    }
    node.add_attribute("class", merge_classes(base_class, &props.class).to_string());
    for child in props.children.iter() {
        node.add_child(child);
    }
    node.into()
}

/// `data-state` value for disclosure elements.
#[must_use]
pub const fn open_state(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

/// Stringified boolean for `aria-*` attributes.
#[must_use]
pub const fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
