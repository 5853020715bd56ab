//! Bulma class-name composition and style-intent resolution.
//!
//! The crate owns the two pure building blocks every Bulma element wrapper is made of:
//!
//! - [`compose`] and [`compose_with_prefix`] flatten heterogeneous [`ClassInput`] values into a
//!   deduplicated, first-occurrence-ordered class string.
//! - [`resolve`] validates a bag of style-intent properties (color, spacing, typography,
//!   display/visibility, flexbox, helpers) against Bulma's closed vocabularies, expands the valid
//!   ones into class tokens, and hands back the properties it did not recognize so callers can
//!   forward them as plain attributes.
//!
//! Invalid style values never fail a call. They are dropped and produce no token.
//!
//! The optional class prefix travels in an immutable [`ClassConfig`] passed explicitly by the
//! caller; nothing in this crate reads global state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod compose;
mod config;
mod intent;
mod resolve;
pub mod vocabulary;

pub use compose::{compose, compose_with_prefix, ClassInput, ClassSet};
pub use config::{ClassConfig, ClassPrefix, ConfigError};
pub use intent::StyleIntent;
pub use resolve::{resolve, resolve_with_prefix, Resolved, StyleProps};

/// Composes heterogeneous class inputs into a class string.
///
/// Every argument is converted with [`ClassInput::from`], so strings, numbers, options, vectors,
/// `(key, enabled)` arrays and JSON values can be mixed freely.
///
/// ```
/// use bulma_classes::classes;
///
/// let active = true;
/// assert_eq!(
///     classes!["button", vec!["is-primary", "is-small"], [("is-active", active)]],
///     "button is-primary is-small is-active"
/// );
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::compose([$($crate::ClassInput::from($input)),+])
    };
}

/// Like [`classes!`], with a leading `Option<&str>` prefix applied to every token.
///
/// ```
/// use bulma_classes::prefixed_classes;
///
/// assert_eq!(
///     prefixed_classes!(Some("bulma-"); "button", [("is-primary", true)]),
///     "bulma-button bulma-is-primary"
/// );
/// ```
#[macro_export]
macro_rules! prefixed_classes {
    ($prefix:expr $(;)?) => {
        ::std::string::String::new()
    };
    ($prefix:expr; $($input:expr),+ $(,)?) => {
        $crate::compose_with_prefix($prefix, [$($crate::ClassInput::from($input)),+])
    };
}

/// Convenience imports for crates building Bulma elements.
pub mod prelude {
    pub use crate::vocabulary::*;
    pub use crate::{
        classes, compose, compose_with_prefix, prefixed_classes, resolve, resolve_with_prefix,
        ClassConfig, ClassInput, ClassPrefix, ClassSet, Resolved, StyleIntent, StyleProps,
    };
}
