//! Notification model: variants, placement, queue and auto-dismiss timer.
//!
//! # Design
//! - The queue hands out monotonic ids so dismissals never hit a newer toast.
//! - The auto-dismiss timer fires at most once per toast and never after a
//!   manual dismissal or removal.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before a toast closes itself unless told otherwise.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastVariant {
    /// Neutral surface.
    #[default]
    Default,
    /// Positive outcome.
    Success,
    /// Failure.
    Error,
    /// Needs attention.
    Warning,
}

impl ToastVariant {
    /// Tone-specific classes layered over the toast base class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "border bg-background text-foreground",
            Self::Success => {
                "border-green-500 bg-green-50 text-green-900 dark:bg-green-950 dark:text-green-100"
            }
            Self::Error => "border-destructive bg-destructive text-destructive-foreground",
            Self::Warning => {
                "border-yellow-500 bg-yellow-50 text-yellow-900 dark:bg-yellow-950 dark:text-yellow-100"
            }
        }
    }
}

/// Screen corner/edge the toast stack is pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    /// Top right corner.
    TopRight,
    /// Top left corner.
    TopLeft,
    /// Bottom right corner.
    #[default]
    BottomRight,
    /// Bottom left corner.
    BottomLeft,
    /// Centered along the top edge.
    TopCenter,
    /// Centered along the bottom edge.
    BottomCenter,
}

impl ToastPosition {
    /// Positioning classes for the container.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::TopRight => "top-0 right-0",
            Self::TopLeft => "top-0 left-0",
            Self::BottomRight => "bottom-0 right-0",
            Self::BottomLeft => "bottom-0 left-0",
            Self::TopCenter => "top-0 left-1/2 -translate-x-1/2",
            Self::BottomCenter => "bottom-0 left-1/2 -translate-x-1/2",
        }
    }
}

/// Content for a toast that has not been queued yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastDraft {
    /// Visual tone.
    pub variant: ToastVariant,
    /// Optional heading.
    pub title: Option<String>,
    /// Optional body text.
    pub description: Option<String>,
    /// Auto-dismiss delay; `None` keeps the toast until dismissed.
    pub duration_ms: Option<u32>,
}

impl ToastDraft {
    /// Draft with a tone and a heading, using the default delay.
    #[must_use]
    pub fn new(variant: ToastVariant, title: impl Into<String>) -> Self {
        Self {
            variant,
            title: Some(title.into()),
            description: None,
            duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
        }
    }

    /// Attach body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastItem {
    /// Monotonic identifier.
    pub id: u64,
    /// Queued content.
    pub draft: ToastDraft,
}

/// Ordered list of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<ToastItem>,
}

impl ToastQueue {
    /// Empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
        }
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, draft: ToastDraft) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!(id, variant = ?draft.variant, "toast queued");
        self.items.push(ToastItem { id, draft });
        id
    }

    /// Remove a toast. Returns `false` when the id is unknown.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!(id, "toast dismissed");
        }
        removed
    }

    /// Toasts in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ToastItem] {
        &self.items
    }

    /// Number of visible toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no toast is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lifecycle of a toast's auto-dismiss timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissPhase {
    /// Still on screen.
    Pending,
    /// Dismiss callback has fired.
    Dismissed,
    /// Removed before the timer elapsed.
    Cancelled,
}

/// Once-only auto-dismiss bookkeeping for a single toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoDismiss {
    delay: Option<Duration>,
    elapsed: Duration,
    phase: DismissPhase,
}

impl AutoDismiss {
    /// Timer for `duration_ms`; `None` never fires on its own.
    #[must_use]
    pub fn new(duration_ms: Option<u32>) -> Self {
        Self {
            delay: duration_ms.map(|ms| Duration::from_millis(u64::from(ms))),
            elapsed: Duration::ZERO,
            phase: DismissPhase::Pending,
        }
    }

    /// Timer for a rendered toast. Only an open toast with a close handler
    /// counts down; anything else waits indefinitely.
    #[must_use]
    pub fn for_toast(duration_ms: Option<u32>, open: bool, closable: bool) -> Self {
        Self::new(duration_ms.filter(|_| open && closable))
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> DismissPhase {
        self.phase
    }

    /// Account for elapsed time. Returns `true` exactly once, when the delay
    /// is first reached.
    pub fn advance(&mut self, by: Duration) -> bool {
        let Some(delay) = self.delay else {
            return false;
        };
        if self.phase != DismissPhase::Pending {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(by);
        if self.elapsed >= delay {
            self.phase = DismissPhase::Dismissed;
            return true;
        }
        false
    }

    /// Manual dismissal. Returns `true` when the callback should fire.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == DismissPhase::Pending {
            self.phase = DismissPhase::Dismissed;
            return true;
        }
        false
    }

    /// The toast went away without being dismissed; the timer must not fire.
    pub fn cancel(&mut self) {
        if self.phase == DismissPhase::Pending {
            self.phase = DismissPhase::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_exactly_once_after_delay() {
        let mut timer = AutoDismiss::new(Some(5_000));
        assert!(!timer.advance(Duration::from_millis(4_999)));
        assert!(timer.advance(Duration::from_millis(1)));
        assert!(!timer.advance(Duration::from_millis(5_000)));
        assert_eq!(timer.phase(), DismissPhase::Dismissed);
    }

    #[test]
    fn manual_dismissal_suppresses_timer() {
        let mut timer = AutoDismiss::new(Some(5_000));
        assert!(timer.dismiss());
        assert!(!timer.dismiss());
        assert!(!timer.advance(Duration::from_millis(5_000)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = AutoDismiss::new(Some(100));
        timer.cancel();
        assert!(!timer.advance(Duration::from_millis(100)));
        assert_eq!(timer.phase(), DismissPhase::Cancelled);
    }

    #[test]
    fn sticky_toast_has_no_timer() {
        let mut timer = AutoDismiss::new(None);
        assert_eq!(timer.delay(), None);
        assert!(!timer.advance(Duration::from_secs(3_600)));
        assert!(timer.dismiss());
    }

    #[test]
    fn toast_without_close_handler_never_arms() {
        assert_eq!(AutoDismiss::for_toast(Some(5_000), true, false).delay(), None);
        assert_eq!(AutoDismiss::for_toast(Some(5_000), false, true).delay(), None);

        let mut timer = AutoDismiss::for_toast(Some(5_000), true, true);
        assert_eq!(timer.delay(), Some(Duration::from_millis(5_000)));
        assert!(timer.advance(Duration::from_millis(5_000)));
    }

    #[test]
    fn queue_ids_are_monotonic_and_dismissable() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastDraft::new(ToastVariant::Success, "Saved"));
        let second = queue.push(
            ToastDraft::new(ToastVariant::Error, "Upload failed").with_description("retry later"),
        );
        assert!(second > first);
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.items()[0].id, second);

        let third = queue.push(ToastDraft::default());
        assert!(third > second);
    }

    #[test]
    fn drafts_default_to_five_second_delay() {
        let draft = ToastDraft::new(ToastVariant::Warning, "Disk almost full");
        assert_eq!(draft.duration_ms, Some(DEFAULT_TOAST_DURATION_MS));
    }

    #[test]
    fn variants_serialize_kebab_case() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&ToastVariant::Warning)?, "\"warning\"");
        let position: ToastPosition = serde_json::from_str("\"top-center\"")?;
        assert_eq!(position, ToastPosition::TopCenter);
        Ok(())
    }
}
