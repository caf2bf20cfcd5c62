//! Theme persistence and document helpers.

use crate::core::theme::{DARK_SCHEME_QUERY, ResolvedTheme, THEME_STORAGE_KEY, ThemeMode};
use gloo::console;
use gloo::events::EventListener;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use serde::Serialize;
use web_sys::MediaQueryList;
use yew::Callback;

/// Stored preference, tolerating values written without JSON encoding.
pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<String>(THEME_STORAGE_KEY) {
        return ThemeMode::from_stored(&value);
    }
    match LocalStorage::raw().get_item(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => ThemeMode::from_stored(&raw),
        Ok(None) => ThemeMode::System,
        Err(err) => {
            log_storage_error("get", THEME_STORAGE_KEY, &format!("{err:?}"));
            ThemeMode::System
        }
    }
}

pub(crate) fn persist_theme(mode: ThemeMode) {
    set_storage(THEME_STORAGE_KEY, mode.as_str());
}

/// Replace the `light`/`dark` class on the document element.
pub(crate) fn apply_theme(theme: ResolvedTheme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    if let Err(err) = classes.remove_2("light", "dark") {
        console::error!("theme class removal failed", format!("{err:?}"));
    }
    if let Err(err) = classes.add_1(theme.class()) {
        console::error!("theme class update failed", format!("{err:?}"));
    }
}

pub(crate) fn system_prefers_dark() -> bool {
    dark_scheme_query().is_some_and(|media| media.matches())
}

/// Report OS preference changes until the listener is dropped.
pub(crate) fn watch_system_theme(on_change: Callback<bool>) -> Option<EventListener> {
    let media = dark_scheme_query()?;
    let target = media.clone();
    Some(EventListener::new(&target, "change", move |_event| {
        on_change.emit(media.matches());
    }))
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    window().match_media(DARK_SCHEME_QUERY).ok().flatten()
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
