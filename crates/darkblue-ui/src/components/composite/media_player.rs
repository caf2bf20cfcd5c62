//! Presentational media player chrome. Playback itself belongs to the host;
//! these components only render the state they are given.

use crate::components::foundations::{BasicProps, merge_classes, render_container};
use crate::components::icons::{PauseIcon, PlayIcon, VolumeIcon};
use crate::core::format::{clamp_percent, width_style};
use crate::core::variants::{MEDIA_PLAYER_BASE, MediaVariant, PLAY_BUTTON_BASE};
use yew::prelude::*;

/// Props for [`MediaPlayer`].
#[derive(Properties, PartialEq)]
pub struct MediaPlayerProps {
    /// Display, overlay and controls.
    #[prop_or_default]
    pub children: Children,
    /// Video frame or audio strip.
    #[prop_or_default]
    pub variant: MediaVariant,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Player frame; lays out display and controls for the chosen variant.
#[function_component(MediaPlayer)]
pub fn media_player(props: &MediaPlayerProps) -> Html {
    html! {
        <div class={classes!(MEDIA_PLAYER_BASE, props.variant.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

/// 16:9 frame for artwork or video.
#[function_component(MediaPlayerDisplay)]
pub fn media_player_display(props: &BasicProps) -> Html {
    render_container("div", "relative aspect-video overflow-hidden", props)
}

/// Transport and scrubber area.
#[function_component(MediaPlayerControls)]
pub fn media_player_controls(props: &BasicProps) -> Html {
    render_container("div", "flex flex-col gap-4 p-4 sm:p-6", props)
}

/// Gradient layer over the display.
#[function_component(MediaPlayerOverlay)]
pub fn media_player_overlay(props: &BasicProps) -> Html {
    render_container(
        "div",
        "absolute inset-0 flex flex-col justify-between bg-gradient-to-t from-black/90 via-transparent to-black/40 p-6 transition-opacity",
        props,
    )
}

/// Props for [`MediaPlayerScrubber`].
#[derive(Properties, PartialEq)]
pub struct MediaPlayerScrubberProps {
    /// Playback position in percent; clamped to `0..=100`.
    #[prop_or_default]
    pub progress: f64,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Progress bar with a hover thumb.
#[function_component(MediaPlayerScrubber)]
pub fn media_player_scrubber(props: &MediaPlayerScrubberProps) -> Html {
    let progress = clamp_percent(props.progress);
    html! {
        <div
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={progress.to_string()}
            class={merge_classes("group/scrub relative h-1.5 w-full cursor-pointer rounded-full bg-muted", &props.class)}
        >
            <div class="absolute left-0 top-0 h-full rounded-full bg-primary" style={width_style(progress)}>
                <div class="absolute -right-2 -top-[5px] h-4 w-4 rounded-full border-2 border-primary bg-background shadow-lg opacity-0 transition-opacity group-hover/scrub:opacity-100" />
            </div>
        </div>
    }
}

/// Props for [`MediaPlayerPlayButton`].
#[derive(Properties, PartialEq)]
pub struct MediaPlayerPlayButtonProps {
    /// Show the pause glyph instead of play.
    #[prop_or_default]
    pub playing: bool,
    /// Sizing to match the player.
    #[prop_or_default]
    pub variant: MediaVariant,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Primary play/pause toggle.
#[function_component(MediaPlayerPlayButton)]
pub fn media_player_play_button(props: &MediaPlayerPlayButtonProps) -> Html {
    html! {
        <button
            type="button"
            aria-label={if props.playing { "Pause" } else { "Play" }}
            class={classes!(PLAY_BUTTON_BASE, props.variant.play_button_class(), props.class.clone())}
            onclick={props.onclick.clone()}
        >
            if props.playing {
                <PauseIcon class={classes!("h-5", "w-5")} />
            } else {
                <PlayIcon class={classes!("h-5", "w-5", "ml-0.5")} />
            }
        </button>
    }
}

/// Props for [`MediaPlayerButton`].
#[derive(Properties, PartialEq)]
pub struct MediaPlayerButtonProps {
    /// Icon.
    #[prop_or_default]
    pub children: Children,
    /// Accessible name.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Secondary transport control.
#[function_component(MediaPlayerButton)]
pub fn media_player_button(props: &MediaPlayerButtonProps) -> Html {
    html! {
        <button
            type="button"
            aria-label={props.aria_label.clone()}
            class={merge_classes("text-muted-foreground transition-colors hover:text-primary", &props.class)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

/// Elapsed or total time label.
#[function_component(MediaPlayerTime)]
pub fn media_player_time(props: &BasicProps) -> Html {
    render_container(
        "span",
        "text-xs font-medium tabular-nums text-muted-foreground",
        props,
    )
}

fn default_volume_level() -> f64 {
    67.0
}

/// Props for [`MediaPlayerVolume`].
#[derive(Properties, PartialEq)]
pub struct MediaPlayerVolumeProps {
    /// Fill level in percent; clamped to `0..=100`.
    #[prop_or_else(default_volume_level)]
    pub level: f64,
    /// Replaces the speaker icon.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Speaker icon plus level bar.
#[function_component(MediaPlayerVolume)]
pub fn media_player_volume(props: &MediaPlayerVolumeProps) -> Html {
    html! {
        <div class={merge_classes("flex items-center gap-3", &props.class)}>
            if props.children.is_empty() {
                <VolumeIcon class={classes!("h-4", "w-4", "text-muted-foreground")} />
            } else {
                { for props.children.iter() }
            }
            <div class="h-1.5 w-20 overflow-hidden rounded-full bg-muted">
                <div class="h-full rounded-full bg-primary" style={width_style(props.level)} />
            </div>
        </div>
    }
}

/// Title and subtitle stack.
#[function_component(MediaPlayerInfo)]
pub fn media_player_info(props: &BasicProps) -> Html {
    render_container("div", "flex flex-col", props)
}

/// Track or video title.
#[function_component(MediaPlayerTitle)]
pub fn media_player_title(props: &BasicProps) -> Html {
    render_container("h3", "font-bold text-lg", props)
}

/// Artist or secondary line.
#[function_component(MediaPlayerSubtitle)]
pub fn media_player_subtitle(props: &BasicProps) -> Html {
    render_container("p", "text-xs text-muted-foreground", props)
}
