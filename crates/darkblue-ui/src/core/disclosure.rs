//! Disclosure/selection state machine shared by the composite widgets.
//!
//! # Design
//! - One value type covers boolean-open, single-select, multi-select and
//!   bounded-index widgets; the variant in use is the widget's mode.
//! - Transitions are pure: `(state, action) -> state`.
//! - Out-of-range navigation is normalized, never rejected.
//! - Actions that do not apply to a mode leave the state untouched.

use crate::core::controlled::Controllable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of state a disclosure root owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisclosureMode {
    /// A single open/closed flag (modal, dropdown, sidebar).
    Boolean,
    /// At most one key selected (single accordion, tabs).
    Single,
    /// Any number of keys open (multiple accordion).
    Multiple,
    /// Cursor over an ordered collection (carousel).
    Indexed,
}

/// Current value held by a disclosure root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureValue {
    /// Open flag.
    Open(bool),
    /// Selected key, if any.
    Selected(Option<String>),
    /// Set of open keys.
    OpenSet(BTreeSet<String>),
    /// Cursor position.
    Index(usize),
}

impl DisclosureValue {
    /// Build a key-based value from a caller-supplied list.
    ///
    /// Single-select keeps only the first key.
    #[must_use]
    pub fn from_keys<I, K>(multiple: bool, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut keys = keys.into_iter().map(Into::into);
        if multiple {
            Self::OpenSet(keys.collect())
        } else {
            Self::Selected(keys.next())
        }
    }

    /// Mode implied by the variant.
    #[must_use]
    pub const fn mode(&self) -> DisclosureMode {
        match self {
            Self::Open(_) => DisclosureMode::Boolean,
            Self::Selected(_) => DisclosureMode::Single,
            Self::OpenSet(_) => DisclosureMode::Multiple,
            Self::Index(_) => DisclosureMode::Indexed,
        }
    }

    /// Open flag for boolean roots; `false` for every other mode.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(true))
    }

    /// Whether `key` is selected/open in a key-based root.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Self::Selected(selected) => selected.as_deref() == Some(key),
            Self::OpenSet(open) => open.contains(key),
            Self::Open(_) | Self::Index(_) => false,
        }
    }

    /// Cursor position for indexed roots.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            _ => None,
        }
    }

    /// Selected/open keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        match self {
            Self::Selected(selected) => selected.iter().cloned().collect(),
            Self::OpenSet(open) => open.iter().cloned().collect(),
            Self::Open(_) | Self::Index(_) => Vec::new(),
        }
    }
}

/// Bounds for indexed roots.
///
/// `item_count` stays `None` until the content element reports how many items
/// it renders; until then the cursor is only floored at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IndexBounds {
    /// Number of rendered items, once measured.
    pub item_count: Option<usize>,
    /// Wrap around the ends instead of clamping.
    pub looping: bool,
}

impl IndexBounds {
    /// Unmeasured bounds with the given wrap behaviour.
    #[must_use]
    pub const fn new(looping: bool) -> Self {
        Self {
            item_count: None,
            looping,
        }
    }

    /// Bounds with a known item count.
    #[must_use]
    pub const fn measured(item_count: usize, looping: bool) -> Self {
        Self {
            item_count: Some(item_count),
            looping,
        }
    }

    /// Map a requested position into `[0, item_count - 1]`.
    #[must_use]
    pub fn normalize(self, target: isize) -> usize {
        match self.item_count {
            None => usize::try_from(target).unwrap_or(0),
            Some(0) => 0,
            Some(count) if self.looping => {
                let span = isize::try_from(count).unwrap_or(isize::MAX);
                usize::try_from(target.rem_euclid(span)).unwrap_or(0)
            }
            Some(count) => usize::try_from(target).map_or(0, |target| target.min(count - 1)),
        }
    }

    /// Clamp an existing cursor after the item count changed.
    #[must_use]
    pub fn clamp(self, index: usize) -> usize {
        match self.item_count {
            None => index,
            Some(count) => index.min(count.saturating_sub(1)),
        }
    }

    /// Whether a step backwards would move the cursor.
    ///
    /// Always `false` once measured as empty.
    #[must_use]
    pub const fn can_step_back(self, index: usize) -> bool {
        match self.item_count {
            Some(0) => false,
            _ => self.looping || index > 0,
        }
    }

    /// Whether a step forwards would move the cursor.
    ///
    /// Always `false` once measured as empty.
    #[must_use]
    pub const fn can_step_forward(self, index: usize) -> bool {
        match self.item_count {
            Some(0) => false,
            Some(count) => self.looping || index + 1 < count,
            None => self.looping,
        }
    }
}

/// Requests a disclosure root understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisclosureAction {
    /// Flip a boolean root, or toggle `key` in a key-based root.
    Toggle(String),
    /// Flip a boolean root.
    Flip,
    /// Set a boolean root's flag.
    SetOpen(bool),
    /// Select `key` without toggling it off.
    Select(String),
    /// Jump to a position.
    GoTo(isize),
    /// Move relative to the current position.
    Step(isize),
    /// Record how many items are rendered.
    Measure(usize),
}

/// Toggle `key` within an open set (symmetric difference with `{key}`).
#[must_use]
pub fn toggle_member(open: &BTreeSet<String>, key: &str) -> BTreeSet<String> {
    let mut next = open.clone();
    if !next.remove(key) {
        next.insert(key.to_string());
    }
    next
}

/// Toggle `key` in a single-select root; re-toggling the selected key clears it.
#[must_use]
pub fn toggle_single(selected: Option<&str>, key: &str) -> Option<String> {
    if selected == Some(key) {
        None
    } else {
        Some(key.to_string())
    }
}

fn offset(index: usize, delta: isize) -> isize {
    isize::try_from(index)
        .unwrap_or(isize::MAX)
        .saturating_add(delta)
}

/// Value plus bounds; the pure state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    value: DisclosureValue,
    bounds: IndexBounds,
}

impl DisclosureState {
    /// Build a state from an explicit value and bounds.
    #[must_use]
    pub fn new(value: DisclosureValue, bounds: IndexBounds) -> Self {
        let value = match value {
            DisclosureValue::Index(index) => DisclosureValue::Index(bounds.clamp(index)),
            other => other,
        };
        Self { value, bounds }
    }

    /// Boolean root.
    #[must_use]
    pub fn boolean(open: bool) -> Self {
        Self::new(DisclosureValue::Open(open), IndexBounds::default())
    }

    /// Single-select root.
    #[must_use]
    pub fn single(selected: Option<String>) -> Self {
        Self::new(DisclosureValue::Selected(selected), IndexBounds::default())
    }

    /// Multi-select root.
    #[must_use]
    pub fn multiple<I, K>(open: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(
            DisclosureValue::from_keys(true, open),
            IndexBounds::default(),
        )
    }

    /// Indexed root, unmeasured.
    #[must_use]
    pub fn indexed(default_index: usize, looping: bool) -> Self {
        Self::new(
            DisclosureValue::Index(default_index),
            IndexBounds::new(looping),
        )
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> &DisclosureValue {
        &self.value
    }

    /// Current bounds.
    #[must_use]
    pub const fn bounds(&self) -> IndexBounds {
        self.bounds
    }

    /// Mode of the root.
    #[must_use]
    pub const fn mode(&self) -> DisclosureMode {
        self.value.mode()
    }

    /// Compute the state after `action`.
    #[must_use]
    pub fn apply(&self, action: &DisclosureAction) -> Self {
        use DisclosureAction as A;
        use DisclosureValue as V;

        let mut bounds = self.bounds;
        let value = match (&self.value, action) {
            (V::Open(open), A::Toggle(_) | A::Flip) => V::Open(!open),
            (V::Open(_), A::SetOpen(open)) => V::Open(*open),
            (V::Selected(selected), A::Toggle(key)) => {
                V::Selected(toggle_single(selected.as_deref(), key))
            }
            (V::Selected(_), A::Select(key)) => V::Selected(Some(key.clone())),
            (V::OpenSet(open), A::Toggle(key)) => V::OpenSet(toggle_member(open, key)),
            (V::OpenSet(open), A::Select(key)) => {
                let mut next = open.clone();
                next.insert(key.clone());
                V::OpenSet(next)
            }
            (V::Index(_), A::GoTo(target)) => V::Index(bounds.normalize(*target)),
            (V::Index(index), A::Step(delta)) => {
                V::Index(bounds.normalize(offset(*index, *delta)))
            }
            (V::Index(index), A::Measure(count)) => {
                bounds.item_count = Some(*count);
                V::Index(bounds.clamp(*index))
            }
            (value, action) => {
                tracing::debug!(mode = ?value.mode(), ?action, "disclosure action ignored for mode");
                return self.clone();
            }
        };
        Self { value, bounds }
    }
}

/// State machine plus controlled/uncontrolled adapter, kept across renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disclosure {
    value: Controllable<DisclosureValue>,
    bounds: IndexBounds,
}

impl Disclosure {
    /// Start from `initial` (used when uncontrolled) and the caller's value.
    #[must_use]
    pub fn new(initial: DisclosureState, controlled: Option<DisclosureValue>) -> Self {
        let mode = initial.mode();
        Self {
            value: Controllable::new(matching(mode, controlled), initial.value),
            bounds: initial.bounds,
        }
    }

    /// Adopt the caller's value from the latest render.
    pub fn sync(&mut self, controlled: Option<DisclosureValue>) {
        let mode = self.mode();
        self.value.sync(matching(mode, controlled));
    }

    /// Keep the wrap flag aligned with the latest props.
    pub fn set_looping(&mut self, looping: bool) {
        self.bounds.looping = looping;
    }

    /// Mode of the root.
    #[must_use]
    pub fn mode(&self) -> DisclosureMode {
        self.value.current().mode()
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    /// Snapshot of the value to render with, normalized against the bounds.
    #[must_use]
    pub fn state(&self) -> DisclosureState {
        DisclosureState::new(self.value.current().clone(), self.bounds)
    }

    /// Run `action` through the machine and the adapter.
    ///
    /// Returns the value to report through the change callback, if any.
    pub fn dispatch(&mut self, action: &DisclosureAction) -> Option<DisclosureValue> {
        let next = self.state().apply(action);
        self.bounds = next.bounds;
        self.value.update(next.value)
    }
}

fn matching(mode: DisclosureMode, value: Option<DisclosureValue>) -> Option<DisclosureValue> {
    match value {
        Some(value) if value.mode() != mode => {
            tracing::debug!(expected = ?mode, actual = ?value.mode(), "controlled value ignored for mode");
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn toggle(state: &DisclosureState, key: &str) -> DisclosureState {
        state.apply(&DisclosureAction::Toggle(key.to_string()))
    }

    fn measured(count: usize, looping: bool) -> DisclosureState {
        DisclosureState::indexed(0, looping).apply(&DisclosureAction::Measure(count))
    }

    #[test]
    fn single_accordion_scenario() {
        let state = DisclosureState::single(None);

        let state = toggle(&state, "item-2");
        assert_eq!(state.value().keys(), vec!["item-2".to_string()]);

        let state = toggle(&state, "item-2");
        assert!(state.value().keys().is_empty());

        let state = toggle(&toggle(&state, "item-1"), "item-3");
        assert_eq!(state.value().keys(), vec!["item-3".to_string()]);
    }

    #[test]
    fn carousel_scenario_clamps_at_both_ends() {
        let step = |state: &DisclosureState, delta| state.apply(&DisclosureAction::Step(delta));
        let state = measured(4, false);

        let state = step(&state, -1);
        assert_eq!(state.value().index(), Some(0));

        let state = step(&step(&step(&state, 1), 1), 1);
        assert_eq!(state.value().index(), Some(3));

        let state = step(&state, 1);
        assert_eq!(state.value().index(), Some(3));
    }

    #[test]
    fn boolean_root_flips_and_sets() {
        let state = DisclosureState::boolean(false);
        assert!(state.apply(&DisclosureAction::Flip).value().is_open());
        assert!(toggle(&state, "ignored").value().is_open());
        assert!(!state.apply(&DisclosureAction::SetOpen(false)).value().is_open());
        assert!(state.apply(&DisclosureAction::SetOpen(true)).value().is_open());
    }

    #[test]
    fn select_keeps_active_key_selected() {
        let state = DisclosureState::single(Some("overview".to_string()));
        let next = state.apply(&DisclosureAction::Select("overview".to_string()));
        assert_eq!(next, state);
        let next = state.apply(&DisclosureAction::Select("files".to_string()));
        assert!(next.value().contains("files"));
    }

    #[test]
    fn shrinking_item_count_reclamps_index() {
        let state = measured(5, false).apply(&DisclosureAction::GoTo(4));
        assert_eq!(state.value().index(), Some(4));

        let state = state.apply(&DisclosureAction::Measure(2));
        assert_eq!(state.value().index(), Some(1));

        let state = state.apply(&DisclosureAction::Measure(0));
        assert_eq!(state.value().index(), Some(0));
    }

    #[test]
    fn unmeasured_index_keeps_default() {
        let state = DisclosureState::indexed(2, false);
        assert_eq!(state.value().index(), Some(2));
        let state = state.apply(&DisclosureAction::Measure(3));
        assert_eq!(state.value().index(), Some(2));
    }

    #[test]
    fn mismatched_actions_are_ignored() {
        let accordion = DisclosureState::multiple(["a"]);
        assert_eq!(accordion.apply(&DisclosureAction::GoTo(3)), accordion);

        let carousel = measured(3, false);
        assert_eq!(carousel.apply(&DisclosureAction::Flip), carousel);
    }

    #[test]
    fn step_buttons_follow_bounds() {
        let bounds = IndexBounds::measured(3, false);
        assert!(!bounds.can_step_back(0));
        assert!(bounds.can_step_forward(0));
        assert!(!bounds.can_step_forward(2));

        let looping = IndexBounds::measured(3, true);
        assert!(looping.can_step_back(0));
        assert!(looping.can_step_forward(2));
    }

    #[test]
    fn empty_carousel_disables_both_steps() {
        for looping in [false, true] {
            let empty = IndexBounds::measured(0, looping);
            assert!(!empty.can_step_back(0));
            assert!(!empty.can_step_forward(0));
        }
    }

    #[test]
    fn from_keys_keeps_first_for_single_select() {
        let value = DisclosureValue::from_keys(false, ["b", "a"]);
        assert_eq!(value, DisclosureValue::Selected(Some("b".to_string())));
        let value = DisclosureValue::from_keys(true, ["b", "a"]);
        assert_eq!(value.keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn controlled_dispatch_reports_without_mutating() {
        let mut machine = Disclosure::new(
            DisclosureState::boolean(false),
            Some(DisclosureValue::Open(false)),
        );
        let reported = machine.dispatch(&DisclosureAction::Flip);
        assert_eq!(reported, Some(DisclosureValue::Open(true)));
        assert!(!machine.state().value().is_open());

        machine.sync(reported);
        assert!(machine.state().value().is_open());
    }

    #[test]
    fn uncontrolled_dispatch_is_visible_to_next_action() {
        let mut machine = Disclosure::new(DisclosureState::single(None), None);
        assert!(machine.dispatch(&DisclosureAction::Toggle("a".into())).is_some());
        assert!(machine.dispatch(&DisclosureAction::Toggle("a".into())).is_some());
        assert!(machine.state().value().keys().is_empty());
        assert_eq!(
            machine.dispatch(&DisclosureAction::Select("b".into())),
            Some(DisclosureValue::Selected(Some("b".into())))
        );
        assert_eq!(machine.dispatch(&DisclosureAction::Select("b".into())), None);
    }

    #[test]
    fn set_open_collapses_sidebar_once() {
        let mut sidebar = Disclosure::new(DisclosureState::boolean(false), None);
        assert_eq!(
            sidebar.dispatch(&DisclosureAction::SetOpen(true)),
            Some(DisclosureValue::Open(true))
        );
        assert!(sidebar.state().value().is_open());
        assert_eq!(sidebar.dispatch(&DisclosureAction::SetOpen(true)), None);
        assert_eq!(
            sidebar.dispatch(&DisclosureAction::SetOpen(false)),
            Some(DisclosureValue::Open(false))
        );
    }

    #[test]
    fn controlled_value_of_wrong_mode_falls_back_to_local() {
        let machine = Disclosure::new(
            DisclosureState::indexed(1, false),
            Some(DisclosureValue::Open(true)),
        );
        assert!(!machine.is_controlled());
        assert_eq!(machine.state().value().index(), Some(1));
    }

    #[test]
    fn controlled_index_is_clamped_on_read() {
        let mut machine = Disclosure::new(DisclosureState::indexed(0, false), None);
        machine.dispatch(&DisclosureAction::Measure(3));
        machine.sync(Some(DisclosureValue::Index(9)));
        assert_eq!(machine.state().value().index(), Some(2));
    }

    proptest! {
        #[test]
        fn multi_select_is_symmetric_difference(keys in prop::collection::vec("[a-e]", 0..32)) {
            let mut state = DisclosureState::multiple(Vec::<String>::new());
            let mut counts = BTreeMap::<String, usize>::new();
            for key in &keys {
                state = toggle(&state, key);
                *counts.entry(key.clone()).or_default() += 1;
            }
            let expected: Vec<String> = counts
                .into_iter()
                .filter(|(_, count)| count % 2 == 1)
                .map(|(key, _)| key)
                .collect();
            prop_assert_eq!(state.value().keys(), expected);
        }

        #[test]
        fn clamped_go_to_stays_in_range(count in 1_usize..32, target in -100_isize..100) {
            let state = measured(count, false).apply(&DisclosureAction::GoTo(target));
            let index = state.value().index().unwrap_or(usize::MAX);
            prop_assert!(index < count);
        }

        #[test]
        fn looping_go_to_wraps_both_ends(count in 1_usize..32, target in -100_isize..100) {
            let state = measured(count, true);
            let go = |target: isize| state.apply(&DisclosureAction::GoTo(target)).value().index();
            let span = isize::try_from(count).unwrap_or(isize::MAX);
            prop_assert_eq!(go(span), go(0));
            prop_assert_eq!(go(-1), go(span - 1));
            prop_assert_eq!(go(target), usize::try_from(target.rem_euclid(span)).ok());
        }

        #[test]
        fn single_toggle_twice_restores(selected in any::<bool>(), key in "[a-c]") {
            let state = DisclosureState::single(selected.then(|| key.clone()));
            prop_assert_eq!(toggle(&toggle(&state, &key), &key), state);
        }
    }
}
