//! Inline stroke icons used by the composite components.

use yew::prelude::*;

/// Props shared by every icon.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Extra classes.
    #[prop_or_else(default_icon_class)]
    pub class: Classes,
}

fn default_icon_class() -> Classes {
    classes!("h-4", "w-4")
}

fn stroke_icon(class: &Classes, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={class.clone()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

/// Downward chevron.
#[function_component(ChevronDownIcon)]
pub fn chevron_down_icon(props: &IconProps) -> Html {
    stroke_icon(&props.class, html! { <path d="m6 9 6 6 6-6" /> })
}

/// Left chevron.
#[function_component(ChevronLeftIcon)]
pub fn chevron_left_icon(props: &IconProps) -> Html {
    stroke_icon(&props.class, html! { <path d="m15 18-6-6 6-6" /> })
}

/// Right chevron.
#[function_component(ChevronRightIcon)]
pub fn chevron_right_icon(props: &IconProps) -> Html {
    stroke_icon(&props.class, html! { <path d="m9 18 6-6-6-6" /> })
}

/// Cross.
#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! { <><path d="M18 6 6 18" /><path d="m6 6 12 12" /></> },
    )
}

/// Magnifier.
#[function_component(SearchIcon)]
pub fn search_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! { <><circle cx="11" cy="11" r="8" /><path d="m21 21-4.3-4.3" /></> },
    )
}

/// Bell.
#[function_component(BellIcon)]
pub fn bell_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
                <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
            </>
        },
    )
}

/// Three dots.
#[function_component(EllipsisIcon)]
pub fn ellipsis_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="1" />
                <circle cx="19" cy="12" r="1" />
                <circle cx="5" cy="12" r="1" />
            </>
        },
    )
}

/// Open eye.
#[function_component(EyeIcon)]
pub fn eye_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" />
                <circle cx="12" cy="12" r="3" />
            </>
        },
    )
}

/// Crossed-out eye.
#[function_component(EyeOffIcon)]
pub fn eye_off_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <path d="M9.88 9.88a3 3 0 1 0 4.24 4.24" />
                <path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" />
                <path d="M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" />
                <line x1="2" x2="22" y1="2" y2="22" />
            </>
        },
    )
}

/// Padlock.
#[function_component(LockIcon)]
pub fn lock_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <rect width="18" height="11" x="3" y="11" rx="2" ry="2" />
                <path d="M7 11V7a5 5 0 0 1 10 0v4" />
            </>
        },
    )
}

/// Filled play triangle.
#[function_component(PlayIcon)]
pub fn play_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! { <polygon points="6 3 20 12 6 21 6 3" fill="currentColor" /> },
    )
}

/// Filled pause bars.
#[function_component(PauseIcon)]
pub fn pause_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <rect x="14" y="4" width="4" height="16" rx="1" fill="currentColor" />
                <rect x="6" y="4" width="4" height="16" rx="1" fill="currentColor" />
            </>
        },
    )
}

/// Speaker.
#[function_component(VolumeIcon)]
pub fn volume_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5" />
                <path d="M15.54 8.46a5 5 0 0 1 0 7.07" />
            </>
        },
    )
}
