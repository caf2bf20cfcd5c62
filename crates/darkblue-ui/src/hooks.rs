//! Hooks binding the DOM-free core to Yew components.
//!
//! # Design
//! - State machines live in a `use_mut_ref` cell so a dispatch is visible to
//!   the next event handler before the re-render lands.
//! - Change callbacks are read from a cell refreshed every render; a
//!   dispatcher captured by an older render still reports to the latest one.

use crate::core::context::ContextSite;
use crate::core::disclosure::{Disclosure, DisclosureAction, DisclosureState, DisclosureValue};
use crate::core::theme::{ResolvedTheme, ThemeMode};
use crate::core::toast::{ToastDraft, ToastItem, ToastQueue};
use gloo::console;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Read a context that must be provided by an enclosing root component.
///
/// # Panics
///
/// Panics with [`crate::ContextError::MissingProvider`]'s message when no
/// provider is in scope; rendering cannot continue without one.
#[hook]
pub fn use_required_context<T>(site: ContextSite) -> T
where
    T: Clone + PartialEq + 'static,
{
    let found = use_context::<T>();
    match site.require(found) {
        Ok(context) => context,
        Err(err) => {
            let message = err.to_string();
            console::error!("component rendered outside its provider", message.clone());
            panic!("{message}");
        }
    }
}

/// Current disclosure state plus a dispatcher, shared from a root to its
/// children through context.
#[derive(Clone, PartialEq)]
pub struct DisclosureHandle {
    state: DisclosureState,
    dispatch: Callback<DisclosureAction>,
}

impl DisclosureHandle {
    /// Snapshot the root rendered with.
    #[must_use]
    pub const fn state(&self) -> &DisclosureState {
        &self.state
    }

    /// Shorthand for `state().value()`.
    #[must_use]
    pub const fn value(&self) -> &DisclosureValue {
        self.state.value()
    }

    /// Cursor position for indexed roots, `0` otherwise.
    #[must_use]
    pub fn index(&self) -> usize {
        self.state.value().index().unwrap_or_default()
    }

    /// Send an action to the root.
    pub fn dispatch(&self, action: DisclosureAction) {
        self.dispatch.emit(action);
    }

    /// Event callback that sends `action` whenever it fires.
    #[must_use]
    pub fn on<E: 'static>(&self, action: DisclosureAction) -> Callback<E> {
        let dispatch = self.dispatch.clone();
        Callback::from(move |_event: E| dispatch.emit(action.clone()))
    }
}

/// Drive a disclosure root.
///
/// `initial` seeds the machine on first render and carries the latest wrap
/// flag afterwards; `controlled` is the caller-owned value, if any.
/// `on_change` fires only when a dispatch produces a different value.
#[hook]
pub fn use_disclosure(
    initial: DisclosureState,
    controlled: Option<DisclosureValue>,
    on_change: Callback<DisclosureValue>,
) -> DisclosureHandle {
    let looping = initial.bounds().looping;
    let machine = use_mut_ref({
        let controlled = controlled.clone();
        move || Disclosure::new(initial, controlled)
    });
    let latest_on_change = use_mut_ref(|| on_change.clone());
    let force_update = use_force_update();

    *latest_on_change.borrow_mut() = on_change;
    {
        let mut machine = machine.borrow_mut();
        machine.sync(controlled);
        machine.set_looping(looping);
    }

    let dispatch = {
        let machine = machine.clone();
        let latest_on_change = latest_on_change.clone();
        use_memo(
            move |_| {
                Callback::from(move |action: DisclosureAction| {
                    let before = machine.borrow().state();
                    let reported = machine.borrow_mut().dispatch(&action);
                    if machine.borrow().state() != before {
                        force_update.force_update();
                    }
                    if let Some(value) = reported {
                        let on_change = latest_on_change.borrow().clone();
                        on_change.emit(value);
                    }
                })
            },
            (),
        )
    };

    let state = machine.borrow().state();
    DisclosureHandle {
        state,
        dispatch: (*dispatch).clone(),
    }
}

/// Toast list plus push/dismiss operations.
#[derive(Clone)]
pub struct UseToastHandle {
    queue: Rc<RefCell<ToastQueue>>,
    toasts: Vec<ToastItem>,
    refresh: UseForceUpdateHandle,
}

impl UseToastHandle {
    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[ToastItem] {
        &self.toasts
    }

    /// Queue a toast and return its id.
    pub fn toast(&self, draft: ToastDraft) -> u64 {
        let id = self.queue.borrow_mut().push(draft);
        self.refresh.force_update();
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        let removed = self.queue.borrow_mut().dismiss(id);
        if removed {
            self.refresh.force_update();
        }
    }

    /// Callback form of [`Self::dismiss`].
    #[must_use]
    pub fn dismiss_callback(&self) -> Callback<u64> {
        let handle = self.clone();
        Callback::from(move |id| handle.dismiss(id))
    }
}

impl PartialEq for UseToastHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.queue, &other.queue) && self.toasts == other.toasts
    }
}

/// Component-local toast queue.
#[hook]
pub fn use_toast() -> UseToastHandle {
    let queue = use_mut_ref(ToastQueue::new);
    let refresh = use_force_update();
    let toasts = queue.borrow().items().to_vec();
    UseToastHandle {
        queue,
        toasts,
        refresh,
    }
}

/// Theme preference shared by [`crate::components::ThemeProvider`].
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub(crate) mode: ThemeMode,
    pub(crate) resolved: ResolvedTheme,
    pub(crate) set_mode: Callback<ThemeMode>,
}

impl ThemeHandle {
    /// Stored preference.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Theme currently applied to the document.
    #[must_use]
    pub const fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    /// Persist and apply a new preference.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.set_mode.emit(mode);
    }

    /// Switch to the explicit opposite of the applied theme.
    pub fn toggle(&self) {
        self.set_mode(self.resolved.toggled());
    }
}

/// Access the nearest [`crate::components::ThemeProvider`].
#[hook]
pub fn use_theme() -> ThemeHandle {
    use_required_context::<ThemeHandle>(ContextSite::new("use_theme", "ThemeProvider"))
}

/// Collapsed flag shared by [`crate::components::Sidebar`].
#[derive(Clone, PartialEq)]
pub struct SidebarHandle(pub(crate) DisclosureHandle);

impl SidebarHandle {
    /// Whether the rail is collapsed.
    #[must_use]
    pub const fn collapsed(&self) -> bool {
        self.0.value().is_open()
    }

    /// Collapse or expand the rail.
    pub fn set_collapsed(&self, collapsed: bool) {
        self.0.dispatch(DisclosureAction::SetOpen(collapsed));
    }

    /// Flip the collapsed flag.
    pub fn toggle(&self) {
        self.0.dispatch(DisclosureAction::Flip);
    }

    /// Event callback that flips the collapsed flag.
    #[must_use]
    pub fn on_toggle<E: 'static>(&self) -> Callback<E> {
        self.0.on(DisclosureAction::Flip)
    }
}

/// Access the nearest [`crate::components::Sidebar`].
#[hook]
pub fn use_sidebar() -> SidebarHandle {
    use_required_context::<SidebarHandle>(ContextSite::new("use_sidebar", "Sidebar"))
}
