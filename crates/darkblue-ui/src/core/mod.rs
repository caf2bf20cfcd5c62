//! Core, DOM-free primitives and helpers for the component library.
//!
//! Everything here compiles and is tested on native targets; the Yew layer
//! only wires these types to markup and browser events.
pub mod context;
pub mod controlled;
pub mod disclosure;
pub mod error;
pub mod format;
pub mod theme;
pub mod toast;
pub mod variants;
