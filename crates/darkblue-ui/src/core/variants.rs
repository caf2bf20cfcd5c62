//! Class-token tables for every variant and size option.
//!
//! Components compose `BASE` strings with the option classes below and any
//! caller-supplied classes; nothing here touches the DOM.

use serde::{Deserialize, Serialize};

/// Shared button base classes.
pub const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

/// Text input base classes.
pub const INPUT_BASE: &str = "flex w-full rounded-md border bg-background px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Multi-line input base classes.
pub const TEXTAREA_BASE: &str = "flex min-h-[80px] w-full rounded-md border bg-background px-3 py-2 text-sm ring-offset-background placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Native select base classes.
pub const SELECT_BASE: &str = "flex w-full rounded-md border bg-background px-3 py-2 text-sm ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Checkbox base classes.
pub const CHECKBOX_BASE: &str = "peer shrink-0 rounded-sm border border-primary ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 checked:bg-primary checked:text-primary-foreground";

/// Radio base classes.
pub const RADIO_BASE: &str = "peer shrink-0 rounded-full border border-primary ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 checked:border-primary checked:bg-primary";

/// Label base classes.
pub const LABEL_BASE: &str =
    "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

/// Badge base classes.
pub const BADGE_BASE: &str = "inline-flex items-center gap-1.5 px-3 py-1 text-xs font-bold rounded-lg";

/// Alert base classes.
pub const ALERT_BASE: &str = "relative flex items-start gap-4 rounded-lg border p-4 shadow-sm";

/// Card base classes.
pub const CARD_BASE: &str = "rounded-lg border bg-card text-card-foreground";

/// Toast base classes.
pub const TOAST_BASE: &str = "group pointer-events-auto relative flex w-full items-center justify-between space-x-4 overflow-hidden rounded-md border p-6 pr-8 shadow-lg transition-all animate-slide-in-from-right";

/// Navbar base classes.
pub const NAVBAR_BASE: &str =
    "flex items-center justify-between h-16 px-4 bg-surface-raised border-b border-border z-50";

/// Sidebar base classes.
pub const SIDEBAR_BASE: &str =
    "flex flex-col bg-surface-raised border-r border-border transition-all duration-200";

/// Sidebar item base classes.
pub const SIDEBAR_ITEM_BASE: &str = "flex items-center gap-3 px-3 py-2 text-muted-foreground rounded-lg transition-colors border border-transparent";

/// Pagination link base classes.
pub const PAGINATION_LINK_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 h-10 w-10";

/// Container base classes.
pub const CONTAINER_BASE: &str = "mx-auto w-full px-4 sm:px-6 lg:px-8";

/// Footer base classes.
pub const FOOTER_BASE: &str = "w-full border-t border-border bg-background text-foreground";

/// Media player base classes.
pub const MEDIA_PLAYER_BASE: &str = "relative overflow-hidden rounded-xl";

/// Play button base classes.
pub const PLAY_BUTTON_BASE: &str =
    "inline-flex items-center justify-center rounded-full transition-transform hover:scale-105";

/// Button appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    /// Filled primary.
    #[default]
    Default,
    /// Filled destructive.
    Destructive,
    /// Bordered.
    Outline,
    /// Filled secondary.
    Secondary,
    /// Transparent until hovered.
    Ghost,
    /// Text link.
    Link,
}

impl ButtonVariant {
    /// Classes for the variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Button dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    /// Standard height.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
    /// Square icon button.
    Icon,
}

impl ButtonSize {
    /// Classes for the size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Validation tone for form fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldVariant {
    /// Neutral border.
    #[default]
    Default,
    /// Invalid input.
    Error,
    /// Accepted input.
    Success,
}

impl FieldVariant {
    /// Border/ring classes for the tone.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "border-input",
            Self::Error => "border-destructive focus-visible:ring-destructive",
            Self::Success => "border-success focus-visible:ring-success",
        }
    }
}

/// Three-step size scale for form controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlSize {
    /// Standard.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
}

impl ControlSize {
    /// Height classes for text inputs and selects.
    #[must_use]
    pub const fn field_class(self) -> &'static str {
        match self {
            Self::Default => "h-10",
            Self::Sm => "h-9 text-xs",
            Self::Lg => "h-11",
        }
    }

    /// Box classes for checkboxes and radios.
    #[must_use]
    pub const fn choice_class(self) -> &'static str {
        match self {
            Self::Default => "h-4 w-4",
            Self::Sm => "h-3 w-3",
            Self::Lg => "h-5 w-5",
        }
    }
}

/// Badge tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeVariant {
    /// Filled primary.
    #[default]
    Default,
    /// Filled success.
    Success,
    /// Filled amber.
    Warning,
    /// Filled destructive.
    Destructive,
    /// Bordered.
    Outline,
    /// Muted.
    Subtle,
    /// Tinted success.
    SuccessSubtle,
    /// Tinted destructive.
    DestructiveSubtle,
}

impl BadgeVariant {
    /// Classes for the tone.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground",
            Self::Success => "bg-success text-success-foreground",
            Self::Warning => "bg-amber-500 text-white",
            Self::Destructive => "bg-destructive text-destructive-foreground",
            Self::Outline => "border border-border text-foreground bg-transparent",
            Self::Subtle => "bg-muted text-muted-foreground",
            Self::SuccessSubtle => "bg-success/15 text-success",
            Self::DestructiveSubtle => "bg-destructive/15 text-destructive",
        }
    }
}

/// Alert tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertVariant {
    /// Informational.
    #[default]
    Info,
    /// Positive outcome.
    Success,
    /// Needs attention.
    Warning,
    /// Failure.
    Destructive,
}

impl AlertVariant {
    /// Classes for the tone.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "border-info-border bg-info-bg text-info-foreground [&>svg]:text-info",
            Self::Success => {
                "border-success/20 bg-success/5 text-success-foreground dark:border-success/30 dark:bg-success/10 [&>svg]:text-success"
            }
            Self::Warning => {
                "border-warning-border bg-warning-bg text-warning-foreground [&>svg]:text-warning"
            }
            Self::Destructive => {
                "border-destructive/20 bg-destructive/5 text-destructive-foreground dark:border-destructive/30 dark:bg-destructive/10 [&>svg]:text-destructive"
            }
        }
    }
}

/// Card border/shadow treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    /// Light shadow.
    #[default]
    Default,
    /// Border only.
    Outline,
    /// Deeper shadow with inner glow.
    Elevated,
    /// Glows on hover.
    Glow,
    /// Gradient border.
    Gradient,
}

impl CardVariant {
    /// Classes for the treatment.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "shadow-sm border-border",
            Self::Outline => "shadow-none border-border",
            Self::Elevated => "shadow-md border-border shadow-inner-glow",
            Self::Glow => {
                "shadow-sm border-border transition-all duration-200 hover:border-primary hover:shadow-glow"
            }
            Self::Gradient => {
                "shadow-sm border-transparent bg-gradient-to-b from-card to-card relative before:absolute before:inset-0 before:rounded-lg before:p-[1px] before:bg-gradient-to-b before:from-primary/50 before:to-transparent before:-z-10"
            }
        }
    }
}

/// Card background level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    /// Card color.
    #[default]
    Default,
    /// Lowest surface.
    Base,
    /// Raised surface.
    Raised,
    /// Highest surface.
    High,
}

impl Surface {
    /// Background class for the level.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-card",
            Self::Base => "bg-surface-base",
            Self::Raised => "bg-surface-raised",
            Self::High => "bg-surface-high",
        }
    }
}

/// Navbar positioning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavbarPosition {
    /// In document flow.
    #[default]
    Static,
    /// Pinned to the viewport top.
    Fixed,
    /// Sticks once scrolled to.
    Sticky,
}

impl NavbarPosition {
    /// Positioning classes; `None` for static.
    #[must_use]
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Static => None,
            Self::Fixed => Some("fixed top-0 left-0 right-0"),
            Self::Sticky => Some("sticky top-0"),
        }
    }
}

/// Media player chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaVariant {
    /// Dark video frame.
    #[default]
    Video,
    /// Card-styled audio strip.
    Audio,
}

impl MediaVariant {
    /// Root classes.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Video => "bg-black border border-border shadow-2xl",
            Self::Audio => "bg-card border border-border shadow-xl",
        }
    }

    /// Play button classes.
    #[must_use]
    pub const fn play_button_class(self) -> &'static str {
        match self {
            Self::Video => "h-12 w-12 bg-background text-foreground shadow-xl",
            Self::Audio => {
                "h-10 w-10 bg-primary text-primary-foreground shadow-lg shadow-primary/30"
            }
        }
    }
}

/// Horizontal placement of dropdown content relative to its trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropdownAlign {
    /// Left edges aligned.
    #[default]
    Start,
    /// Centered under the trigger.
    Center,
    /// Right edges aligned.
    End,
}

impl DropdownAlign {
    /// Placement classes.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Start => "left-0",
            Self::Center => "left-1/2 -translate-x-1/2",
            Self::End => "right-0",
        }
    }
}

/// Glyph between breadcrumb items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparatorGlyph {
    /// `/`
    #[default]
    Slash,
    /// Right chevron icon.
    Chevron,
}

/// Maximum content width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerSize {
    /// Narrow column.
    Sm,
    /// Medium column.
    Md,
    /// Wide column.
    #[default]
    Lg,
    /// Extra wide column.
    Xl,
    /// No limit.
    Full,
}

impl ContainerSize {
    /// Max-width class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "max-w-3xl",
            Self::Md => "max-w-5xl",
            Self::Lg => "max-w-7xl",
            Self::Xl => "max-w-[1440px]",
            Self::Full => "max-w-full",
        }
    }
}

/// Main axis of a stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackDirection {
    /// Horizontal.
    Row,
    /// Vertical.
    #[default]
    Column,
}

impl StackDirection {
    /// Flex direction class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Row => "flex-row",
            Self::Column => "flex-col",
        }
    }
}

/// Cross-axis alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    /// Start edge.
    Start,
    /// Centered.
    Center,
    /// End edge.
    End,
    /// Fill the track.
    #[default]
    Stretch,
    /// Text baseline.
    Baseline,
}

impl Align {
    /// `items-*` class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Start => "items-start",
            Self::Center => "items-center",
            Self::End => "items-end",
            Self::Stretch => "items-stretch",
            Self::Baseline => "items-baseline",
        }
    }
}

/// Main-axis distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    /// Packed at the start.
    #[default]
    Start,
    /// Packed in the middle.
    Center,
    /// Packed at the end.
    End,
    /// Space between items.
    Between,
    /// Space around items.
    Around,
    /// Items fill their cells.
    Stretch,
}

impl Justify {
    /// `justify-*` class for flex containers.
    #[must_use]
    pub const fn content_class(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::End => "justify-end",
            Self::Between => "justify-between",
            Self::Around => "justify-around",
            Self::Stretch => "justify-stretch",
        }
    }

    /// `justify-items-*` class for grids; distribution modes have none.
    #[must_use]
    pub const fn items_class(self) -> Option<&'static str> {
        match self {
            Self::Start => Some("justify-items-start"),
            Self::Center => Some("justify-items-center"),
            Self::End => Some("justify-items-end"),
            Self::Stretch => Some("justify-items-stretch"),
            Self::Between | Self::Around => None,
        }
    }
}

/// Footer padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FooterVariant {
    /// Roomy.
    #[default]
    Default,
    /// Compact.
    Minimal,
}

impl FooterVariant {
    /// Padding class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "py-12",
            Self::Minimal => "py-6",
        }
    }
}

/// `gap-*` class for a spacing step; unsupported steps have none.
#[must_use]
pub const fn gap_class(step: u8) -> Option<&'static str> {
    match step {
        0 => Some("gap-0"),
        1 => Some("gap-1"),
        2 => Some("gap-2"),
        3 => Some("gap-3"),
        4 => Some("gap-4"),
        5 => Some("gap-5"),
        6 => Some("gap-6"),
        8 => Some("gap-8"),
        10 => Some("gap-10"),
        12 => Some("gap-12"),
        _ => None,
    }
}

/// `grid-cols-*` class for a column count; unsupported counts have none.
#[must_use]
pub const fn grid_cols_class(cols: u8) -> Option<&'static str> {
    match cols {
        1 => Some("grid-cols-1"),
        2 => Some("grid-cols-2"),
        3 => Some("grid-cols-3"),
        4 => Some("grid-cols-4"),
        5 => Some("grid-cols-5"),
        6 => Some("grid-cols-6"),
        12 => Some("grid-cols-12"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_has_gaps() {
        assert_eq!(gap_class(4), Some("gap-4"));
        assert_eq!(gap_class(12), Some("gap-12"));
        assert_eq!(gap_class(7), None);
        assert_eq!(grid_cols_class(12), Some("grid-cols-12"));
        assert_eq!(grid_cols_class(0), None);
    }

    #[test]
    fn grid_justify_skips_distribution_modes() {
        assert_eq!(Justify::Between.content_class(), "justify-between");
        assert_eq!(Justify::Between.items_class(), None);
        assert_eq!(Justify::Center.items_class(), Some("justify-items-center"));
    }

    #[test]
    fn static_navbar_adds_no_positioning() {
        assert_eq!(NavbarPosition::Static.class(), None);
        assert_eq!(NavbarPosition::Sticky.class(), Some("sticky top-0"));
    }

    #[test]
    fn control_sizes_differ_by_widget() {
        assert_eq!(ControlSize::Sm.field_class(), "h-9 text-xs");
        assert_eq!(ControlSize::Sm.choice_class(), "h-3 w-3");
    }

    #[test]
    fn defaults_match_documented_options() {
        assert_eq!(ContainerSize::default(), ContainerSize::Lg);
        assert_eq!(StackDirection::default(), StackDirection::Column);
        assert_eq!(AlertVariant::default(), AlertVariant::Info);
        assert_eq!(MediaVariant::default(), MediaVariant::Video);
    }

    #[test]
    fn compound_variant_names_are_kebab_case() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&BadgeVariant::DestructiveSubtle)?,
            "\"destructive-subtle\""
        );
        let surface: Surface = serde_json::from_str("\"raised\"")?;
        assert_eq!(surface.class(), "bg-surface-raised");
        Ok(())
    }
}
