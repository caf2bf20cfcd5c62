//! Badges, alerts and loading placeholders.

use crate::components::foundations::{BasicProps, render_container};
use crate::components::icons::CloseIcon;
use crate::core::variants::{ALERT_BASE, AlertVariant, BADGE_BASE, BadgeVariant};
use yew::prelude::*;

/// Props for [`Badge`].
#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    /// Content.
    #[prop_or_default]
    pub children: Children,
    /// Tone.
    #[prop_or_default]
    pub variant: BadgeVariant,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Small status pill.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!(BADGE_BASE, props.variant.class(), props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}

/// Props for [`Alert`].
#[derive(Properties, PartialEq)]
pub struct AlertProps {
    /// Icon, content, actions and close button.
    #[prop_or_default]
    pub children: Children,
    /// Tone.
    #[prop_or_default]
    pub variant: AlertVariant,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Inline status message.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    html! {
        <div class={classes!(ALERT_BASE, props.variant.class(), props.class.clone())} role="alert">
            { for props.children.iter() }
        </div>
    }
}

/// Leading icon slot.
#[function_component(AlertIcon)]
pub fn alert_icon(props: &BasicProps) -> Html {
    render_container("span", "mt-0.5 flex-shrink-0 [&>svg]:h-5 [&>svg]:w-5", props)
}

/// Heading.
#[function_component(AlertTitle)]
pub fn alert_title(props: &BasicProps) -> Html {
    render_container("h4", "font-bold leading-none mb-1", props)
}

/// Body text.
#[function_component(AlertDescription)]
pub fn alert_description(props: &BasicProps) -> Html {
    render_container("p", "text-sm opacity-90", props)
}

/// Wrapper taking the remaining width.
#[function_component(AlertContent)]
pub fn alert_content(props: &BasicProps) -> Html {
    render_container("div", "flex-1", props)
}

/// Row of follow-up actions.
#[function_component(AlertActions)]
pub fn alert_actions(props: &BasicProps) -> Html {
    render_container("div", "mt-3 flex gap-3", props)
}

/// Props for [`AlertClose`].
#[derive(Properties, PartialEq)]
pub struct AlertCloseProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Dismiss button.
#[function_component(AlertClose)]
pub fn alert_close(props: &AlertCloseProps) -> Html {
    html! {
        <button
            type="button"
            aria-label="Close alert"
            class={classes!("flex-shrink-0", "opacity-50", "transition-opacity", "hover:opacity-100", props.class.clone())}
            onclick={props.onclick.clone()}
        >
            <CloseIcon />
        </button>
    }
}

/// Props for [`Skeleton`].
#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// Size/shape classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Shimmering placeholder block.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! {
        <div
            class={classes!(
                "relative overflow-hidden rounded-md bg-muted before:absolute before:inset-0 before:-translate-x-full before:bg-gradient-to-r before:from-transparent before:via-foreground/5 before:to-transparent before:animate-shimmer",
                props.class.clone()
            )}
            aria-hidden="true"
        />
    }
}
