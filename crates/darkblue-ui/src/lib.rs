#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Dark Blue: a Yew component library built around a shared disclosure state
//! machine.
//!
//! DOM-free logic (state machines, class tables, theme resolution, toast
//! bookkeeping) lives in [`core`] and is tested natively. Components, hooks
//! and browser persistence compile only for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod preferences;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use crate::core::disclosure::{
    Disclosure, DisclosureAction, DisclosureMode, DisclosureState, DisclosureValue, IndexBounds,
};
pub use crate::core::error::{ContextError, ThemeParseError};
pub use crate::core::theme::{ResolvedTheme, THEME_STORAGE_KEY, ThemeMode};
pub use crate::core::toast::{DEFAULT_TOAST_DURATION_MS, ToastDraft, ToastVariant};

#[cfg(test)]
mod tests {
    use crate::{DisclosureAction, DisclosureState, DisclosureValue};

    #[test]
    fn reexports_drive_a_tabs_root() {
        let state = DisclosureState::single(Some("account".to_string()))
            .apply(&DisclosureAction::Select("password".to_string()))
            .apply(&DisclosureAction::Select("password".to_string()));
        assert_eq!(
            state.value(),
            &DisclosureValue::Selected(Some("password".to_string()))
        );
    }
}
