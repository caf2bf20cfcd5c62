use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, EllipsisIcon};
use crate::core::variants::PAGINATION_LINK_BASE;
use yew::prelude::*;

const PAGINATION_STEP_CLASS: &str = "inline-flex items-center justify-center gap-1 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 h-10 px-3 hover:bg-accent hover:text-accent-foreground";

/// Page navigation landmark.
#[function_component(Pagination)]
pub fn pagination(props: &BasicProps) -> Html {
    html! {
        <nav
            role="navigation"
            aria-label="pagination"
            class={merge_classes("mx-auto flex w-full justify-center", &props.class)}
        >
            { for props.children.iter() }
        </nav>
    }
}

/// Row of pagination items.
#[function_component(PaginationContent)]
pub fn pagination_content(props: &BasicProps) -> Html {
    render_container("ul", "flex flex-row items-center gap-1", props)
}

/// List entry wrapping one link.
#[function_component(PaginationItem)]
pub fn pagination_item(props: &BasicProps) -> Html {
    html! {
        <li class={props.class.clone()}>{ for props.children.iter() }</li>
    }
}

/// Props for [`PaginationLink`].
#[derive(Properties, PartialEq)]
pub struct PaginationLinkProps {
    /// Page label.
    #[prop_or_default]
    pub children: Children,
    /// Marks the current page.
    #[prop_or_default]
    pub active: bool,
    /// Ignore clicks.
    #[prop_or_default]
    pub disabled: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Numbered page button.
#[function_component(PaginationLink)]
pub fn pagination_link(props: &PaginationLinkProps) -> Html {
    let tone = if props.active {
        "bg-primary text-primary-foreground"
    } else {
        "hover:bg-accent hover:text-accent-foreground"
    };
    html! {
        <button
            type="button"
            aria-current={props.active.then_some("page")}
            disabled={props.disabled}
            class={classes!(PAGINATION_LINK_BASE, tone, props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

/// Props for [`PaginationPrevious`] and [`PaginationNext`].
#[derive(Properties, PartialEq)]
pub struct PaginationStepProps {
    /// Ignore clicks, typically on the first or last page.
    #[prop_or_default]
    pub disabled: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Link to the previous page.
#[function_component(PaginationPrevious)]
pub fn pagination_previous(props: &PaginationStepProps) -> Html {
    html! {
        <button
            type="button"
            aria-label="Go to previous page"
            disabled={props.disabled}
            class={merge_classes(PAGINATION_STEP_CLASS, &props.class)}
            onclick={props.onclick.clone()}
        >
            <ChevronLeftIcon />
            <span>{ "Previous" }</span>
        </button>
    }
}

/// Link to the next page.
#[function_component(PaginationNext)]
pub fn pagination_next(props: &PaginationStepProps) -> Html {
    html! {
        <button
            type="button"
            aria-label="Go to next page"
            disabled={props.disabled}
            class={merge_classes(PAGINATION_STEP_CLASS, &props.class)}
            onclick={props.onclick.clone()}
        >
            <span>{ "Next" }</span>
            <ChevronRightIcon />
        </button>
    }
}

/// Gap marker between page ranges.
#[function_component(PaginationEllipsis)]
pub fn pagination_ellipsis(props: &BasicProps) -> Html {
    html! {
        <span
            aria-hidden="true"
            class={merge_classes("flex h-10 w-10 items-center justify-center text-muted-foreground", &props.class)}
        >
            <EllipsisIcon />
            <span class="sr-only">{ "More pages" }</span>
        </span>
    }
}
