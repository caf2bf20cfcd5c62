//! Multi-part widgets. Stateful roots share a disclosure machine with their
//! children through context.

/// Expandable sections, single or multiple open.
pub mod accordion;
/// Surface with header, body and footer slots.
pub mod card;
/// Slide deck with step buttons and indicators.
pub mod carousel;
/// Menu anchored to a trigger button.
pub mod dropdown;
pub mod media_player;
/// Dialog over a dimmed overlay.
pub mod modal;
/// Top application bar.
pub mod navbar;
/// Page navigation links.
pub mod pagination;
/// Collapsible navigation rail.
pub mod sidebar;
/// Tab strip with one visible panel.
pub mod tabs;
/// Transient notifications and their queue.
pub mod toast;

pub use accordion::*;
pub use card::*;
pub use carousel::*;
pub use dropdown::*;
pub use media_player::*;
pub use modal::*;
pub use navbar::*;
pub use pagination::*;
pub use sidebar::*;
pub use tabs::*;
pub use toast::*;
