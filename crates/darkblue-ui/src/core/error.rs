//! Error types surfaced by the component library.

use thiserror::Error;

/// Raised when a child element renders without its composite root in scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The enclosing provider was not found above the component.
    #[error("{component} must be used within {provider}")]
    MissingProvider {
        /// Component that attempted to read the context.
        component: &'static str,
        /// Root component expected to provide it.
        provider: &'static str,
    },
}

/// Persisted theme value did not match a known mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode `{value}`")]
pub struct ThemeParseError {
    /// Raw value read from storage.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_provider_names_both_sides() {
        let err = ContextError::MissingProvider {
            component: "AccordionTrigger",
            provider: "AccordionItem",
        };
        assert_eq!(
            err.to_string(),
            "AccordionTrigger must be used within AccordionItem"
        );
    }

    #[test]
    fn theme_parse_error_quotes_value() {
        let err = ThemeParseError {
            value: "sepia".to_string(),
        };
        assert_eq!(err.to_string(), "unknown theme mode `sepia`");
    }
}
