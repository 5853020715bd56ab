//! Class-prefix configuration shared by the composer and the resolver.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{compose_with_prefix, resolve_with_prefix, ClassInput, Resolved};

/// Errors raised while building a [`ClassConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The prefix was empty or contained whitespace.
    #[error("invalid class prefix {prefix:?}: expected a non-empty value without whitespace")]
    InvalidPrefix {
        /// Rejected prefix text.
        prefix: String,
    },
    /// The TOML document could not be parsed.
    #[error("failed to parse class config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A prefix must be a non-empty run of non-whitespace characters to stay inside one token.
pub(crate) fn is_usable_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && !prefix.chars().any(char::is_whitespace)
}

/// Prefix prepended to every generated class token (for example `bulma-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassPrefix(String);

impl ClassPrefix {
    /// Validates and wraps a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrefix`] for empty input or input containing whitespace.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if !is_usable_prefix(&prefix) {
            return Err(ConfigError::InvalidPrefix { prefix });
        }
        Ok(Self(prefix))
    }

    /// Like [`ClassPrefix::new`], but treats empty input as "no prefix".
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrefix`] when the input contains whitespace.
    pub fn parse_optional(prefix: &str) -> Result<Option<Self>, ConfigError> {
        if prefix.is_empty() {
            Ok(None)
        } else {
            Self::new(prefix).map(Some)
        }
    }

    /// Prefix text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClassConfig {
    #[serde(default)]
    class_prefix: Option<String>,
}

/// Immutable class configuration threaded to every composition and resolution.
///
/// The default configuration has no prefix, which leaves tokens untouched.
///
/// ```
/// use bulma_classes::ClassConfig;
///
/// let config = ClassConfig::from_toml_str("class_prefix = \"bulma-\"").unwrap();
/// assert_eq!(config.compose(["button", "is-primary"]), "bulma-button bulma-is-primary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawClassConfig")]
pub struct ClassConfig {
    prefix: Option<ClassPrefix>,
}

impl TryFrom<RawClassConfig> for ClassConfig {
    type Error = ConfigError;

    fn try_from(raw: RawClassConfig) -> Result<Self, Self::Error> {
        let prefix = match raw.class_prefix.as_deref() {
            Some(prefix) => ClassPrefix::parse_optional(prefix)?,
            None => None,
        };
        Ok(Self { prefix })
    }
}

impl ClassConfig {
    /// Unprefixed configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a validated prefix.
    ///
    /// # Errors
    ///
    /// See [`ClassPrefix::new`].
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            prefix: Some(ClassPrefix::new(prefix)?),
        })
    }

    /// Parses a TOML document with an optional `class_prefix` key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::InvalidPrefix`] for a prefix containing whitespace.
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        let raw: RawClassConfig = toml::from_str(body)?;
        Self::try_from(raw)
    }

    /// Active prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_ref().map(ClassPrefix::as_str)
    }

    /// [`compose_with_prefix`] using this configuration's prefix.
    pub fn compose<'a, I>(&self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassInput<'a>>,
    {
        compose_with_prefix(self.prefix(), inputs)
    }

    /// [`resolve_with_prefix`] using this configuration's prefix.
    pub fn resolve(&self, props: &Map<String, Value>) -> Resolved {
        resolve_with_prefix(self.prefix(), props)
    }
}

impl From<ClassPrefix> for ClassConfig {
    fn from(prefix: ClassPrefix) -> Self {
        Self {
            prefix: Some(prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prefix_rejects_whitespace_and_empty() {
        assert!(matches!(
            ClassPrefix::new("bul ma-"),
            Err(ConfigError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            ClassPrefix::new(""),
            Err(ConfigError::InvalidPrefix { .. })
        ));
        assert_eq!(ClassPrefix::parse_optional("").expect("empty"), None);
        assert_eq!(
            ClassPrefix::parse_optional("x-")
                .expect("valid")
                .as_ref()
                .map(ClassPrefix::as_str),
            Some("x-")
        );
    }

    #[test]
    fn toml_prefix_is_optional() {
        assert_eq!(ClassConfig::from_toml_str("").expect("empty doc"), ClassConfig::new());
        assert_eq!(
            ClassConfig::from_toml_str("class_prefix = \"\"")
                .expect("empty prefix")
                .prefix(),
            None
        );
        assert_eq!(
            ClassConfig::from_toml_str("class_prefix = \"bulma-\"")
                .expect("prefix")
                .prefix(),
            Some("bulma-")
        );
    }

    #[test]
    fn toml_errors_are_categorized() {
        assert!(matches!(
            ClassConfig::from_toml_str("class_prefix = \"a b\""),
            Err(ConfigError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            ClassConfig::from_toml_str("prefix = \"a\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn nested_config_deserializes_through_validation() {
        #[derive(Debug, Deserialize)]
        struct AppConfig {
            classes: ClassConfig,
        }

        let app: AppConfig =
            toml::from_str("[classes]\nclass_prefix = \"ui-\"").expect("app config");
        assert_eq!(app.classes.prefix(), Some("ui-"));
        assert!(toml::from_str::<AppConfig>("[classes]\nclass_prefix = \"u i\"").is_err());
    }

    #[test]
    fn error_messages_name_the_prefix() {
        let err = ClassPrefix::new("a b").expect_err("whitespace");
        assert_eq!(
            err.to_string(),
            "invalid class prefix \"a b\": expected a non-empty value without whitespace"
        );
    }
}
