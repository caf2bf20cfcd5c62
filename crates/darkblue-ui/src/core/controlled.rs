//! Controlled/uncontrolled value adapter.
//!
//! # Design
//! - A component either mirrors a caller-owned value or owns a local copy.
//! - The source of truth is picked once per update, never mixed.
//! - Every mutation goes through [`Controllable::update`].

/// Optional external value layered over a locally owned cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controllable<T> {
    external: Option<T>,
    local: T,
}

impl<T: Clone + PartialEq> Controllable<T> {
    /// Build the adapter from the caller's value (if any) and the default
    /// used when the component owns its state.
    #[must_use]
    pub const fn new(external: Option<T>, default: T) -> Self {
        Self {
            external,
            local: default,
        }
    }

    /// Replace the external value with the one supplied on the latest render.
    pub fn sync(&mut self, external: Option<T>) {
        self.external = external;
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// Value to render with.
    #[must_use]
    pub fn current(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.local)
    }

    /// Request a new value.
    ///
    /// The local cell is written only when uncontrolled. Returns the value to
    /// report through the change callback, or `None` when nothing changed.
    pub fn update(&mut self, next: T) -> Option<T> {
        if *self.current() == next {
            return None;
        }
        if !self.is_controlled() {
            self.local = next.clone();
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::Controllable;

    #[test]
    fn uncontrolled_update_writes_local_and_notifies() {
        let mut value = Controllable::new(None, false);
        assert_eq!(value.update(true), Some(true));
        assert!(*value.current());
        assert!(!value.is_controlled());
    }

    #[test]
    fn controlled_update_leaves_local_untouched() {
        let mut value = Controllable::new(Some(false), false);
        assert_eq!(value.update(true), Some(true));
        assert!(!*value.current());

        value.sync(None);
        assert!(!*value.current(), "local copy must not absorb the request");
    }

    #[test]
    fn unchanged_value_is_not_reported() {
        let mut value = Controllable::new(None, 3_usize);
        assert_eq!(value.update(3), None);
    }

    #[test]
    fn sync_reflects_caller_value_on_next_render() {
        let mut value = Controllable::new(Some(1_usize), 0);
        let requested = value.update(2);
        assert_eq!(requested, Some(2));
        value.sync(requested);
        assert_eq!(*value.current(), 2);
    }
}
