//! Form controls, feedback and navigation atoms.

/// Location trail.
pub mod breadcrumb;
/// Buttons.
pub mod button;
/// Checkbox and radio inputs.
pub mod choice;
pub mod feedback;
/// Text inputs and textarea.
pub mod input;
/// Native select and form labels.
pub mod select;

pub use breadcrumb::*;
pub use button::*;
pub use choice::*;
pub use feedback::*;
pub use input::*;
pub use select::*;
