use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::components::icons::ChevronRightIcon;
use crate::core::variants::SeparatorGlyph;
use yew::prelude::*;

/// Breadcrumb landmark.
#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BasicProps) -> Html {
    html! {
        <nav aria-label="breadcrumb" class={props.class.clone()}>
            { for props.children.iter() }
        </nav>
    }
}

/// Ordered trail.
#[function_component(BreadcrumbList)]
pub fn breadcrumb_list(props: &BasicProps) -> Html {
    render_container(
        "ol",
        "flex flex-wrap items-center gap-1.5 text-sm text-muted-foreground",
        props,
    )
}

/// One step of the trail.
#[function_component(BreadcrumbItem)]
pub fn breadcrumb_item(props: &BasicProps) -> Html {
    render_container("li", "inline-flex items-center gap-1.5", props)
}

/// Props for [`BreadcrumbLink`].
#[derive(Properties, PartialEq)]
pub struct BreadcrumbLinkProps {
    /// Target URL.
    pub href: AttrValue,
    /// Link text.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Navigable ancestor.
#[function_component(BreadcrumbLink)]
pub fn breadcrumb_link(props: &BreadcrumbLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            class={merge_classes("transition-colors hover:text-foreground", &props.class)}
        >
            { for props.children.iter() }
        </a>
    }
}

/// Current page.
#[function_component(BreadcrumbPage)]
pub fn breadcrumb_page(props: &BasicProps) -> Html {
    html! {
        <span
            role="link"
            aria-disabled="true"
            aria-current="page"
            class={merge_classes("font-medium text-foreground", &props.class)}
        >
            { for props.children.iter() }
        </span>
    }
}

/// Props for [`BreadcrumbSeparator`].
#[derive(Properties, PartialEq)]
pub struct BreadcrumbSeparatorProps {
    /// Built-in glyph used when no children are given.
    #[prop_or_default]
    pub variant: SeparatorGlyph,
    /// Custom separator content.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Divider between steps.
#[function_component(BreadcrumbSeparator)]
pub fn breadcrumb_separator(props: &BreadcrumbSeparatorProps) -> Html {
    let glyph = if props.children.is_empty() {
        match props.variant {
            SeparatorGlyph::Slash => html! { <span>{ "/" }</span> },
            SeparatorGlyph::Chevron => html! { <ChevronRightIcon class={classes!("h-3.5", "w-3.5")} /> },
        }
    } else {
        html! { <>{ for props.children.iter() }</> }
    };
    html! {
        <li
            role="presentation"
            aria-hidden="true"
            class={merge_classes("text-muted-foreground [&>svg]:h-3.5 [&>svg]:w-3.5", &props.class)}
        >
            { glyph }
        </li>
    }
}
