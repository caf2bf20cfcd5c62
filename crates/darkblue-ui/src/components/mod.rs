//! Yew component set.
//!
//! # Design
//! - Primitives and layout pieces are stateless; they only compose class
//!   tables from [`crate::core::variants`] with caller classes.
//! - Composite roots keep their state in a [`crate::core::disclosure`]
//!   machine and hand it to their parts through a private context.
//! - Every component accepts `class` and appends it after its own classes.

pub mod composite;
pub mod foundations;
pub mod icons;
pub mod layout;
pub mod primitives;
mod theme;

pub use composite::*;
pub use layout::*;
pub use primitives::*;
pub use theme::{ThemeProvider, ThemeProviderProps, ThemeToggle, ThemeToggleProps};
