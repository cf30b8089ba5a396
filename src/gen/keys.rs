//! API credential resolution
//!
//! The credential is resolved on every generation call, never cached, so a
//! key selected or rotated mid-session takes effect on the next call
//! without a restart. Hosts that manage keys themselves (a key-selection
//! dialog, a secrets store) plug in their own [`KeySource`]; the default
//! reads the environment.

/// Environment variable holding the image API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Source of the image API credential
pub trait KeySource: Send + Sync {
    /// The currently selected key, if any
    fn current_key(&self) -> Option<String>;

    /// Ask the host to (re-)select a key
    ///
    /// Hosts without a selection flow keep this no-op and rely on ambient
    /// configuration.
    fn request_selection(&self) {}
}

/// Reads [`API_KEY_VAR`] from the environment on every call
#[derive(Debug, Default)]
pub struct EnvKeySource;

impl KeySource for EnvKeySource {
    fn current_key(&self) -> Option<String> {
        std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty())
    }
}

/// Fixed key, for tests and hosts with their own key management
#[derive(Debug, Clone)]
pub struct StaticKeySource(pub String);

impl KeySource for StaticKeySource {
    fn current_key(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_its_key() {
        assert_eq!(
            StaticKeySource("k-123".into()).current_key(),
            Some("k-123".into())
        );
    }

    #[test]
    fn empty_static_key_counts_as_unselected() {
        assert_eq!(StaticKeySource(String::new()).current_key(), None);
    }
}
