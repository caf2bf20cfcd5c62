//! Provider lookup guard for composite sub-components.

use crate::core::error::ContextError;

/// Names of the consumer and the root it depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextSite {
    /// Consumer component name.
    pub component: &'static str,
    /// Provider component name.
    pub provider: &'static str,
}

impl ContextSite {
    /// Describe a consumer/provider pair.
    #[must_use]
    pub const fn new(component: &'static str, provider: &'static str) -> Self {
        Self {
            component,
            provider,
        }
    }

    /// Turn an optional context lookup into a result.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MissingProvider`] when `found` is `None`.
    pub fn require<T>(self, found: Option<T>) -> Result<T, ContextError> {
        found.ok_or(ContextError::MissingProvider {
            component: self.component,
            provider: self.provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ContextSite;
    use crate::core::error::ContextError;

    #[test]
    fn present_context_passes_through() {
        let site = ContextSite::new("CarouselNext", "Carousel");
        assert_eq!(site.require(Some(3)), Ok(3));
    }

    #[test]
    fn absent_context_is_an_error() {
        let site = ContextSite::new("ModalClose", "Modal");
        assert_eq!(
            site.require::<()>(None),
            Err(ContextError::MissingProvider {
                component: "ModalClose",
                provider: "Modal",
            })
        );
    }
}
