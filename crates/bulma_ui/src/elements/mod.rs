//! Bulma element components and their class builders.

use bulma_classes::{compose, ClassConfig, ClassInput, ClassSet, StyleIntent};
use leptos::ev::MouseEvent;
use leptos::*;

use crate::context::use_class_config;

mod feedback;
mod form;
mod layout;
mod typography;

pub use feedback::{Notification, Tag};
pub use form::{Button, Delete};
pub use layout::{Block, Styled, StyledTag};
pub use typography::{Subtitle, Title};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color modifiers shared by buttons, tags, and notifications.
pub enum ElementColor {
    /// Brand color.
    Primary,
    /// Link color.
    Link,
    /// Informational color.
    Info,
    /// Success color.
    Success,
    /// Warning color.
    Warning,
    /// Danger color.
    Danger,
    /// White.
    White,
    /// Light.
    Light,
    /// Dark.
    Dark,
    /// Black.
    Black,
    /// Text-colored.
    Text,
    /// Transparent button variant.
    Ghost,
}

impl ElementColor {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Link => "link",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::White => "white",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Black => "black",
            Self::Text => "text",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Size modifiers shared by buttons, tags, and the delete control.
pub enum ElementSize {
    /// Small.
    Small,
    /// Normal.
    Normal,
    /// Medium.
    Medium,
    /// Large.
    Large,
}

impl ElementSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Builds an element's final class attribute.
///
/// `base` and the intent helpers are prefixed through `config`; `user_class` is appended as-is.
pub(crate) fn element_class(
    config: &ClassConfig,
    base: ClassInput<'_>,
    intent: Option<&StyleIntent>,
    user_class: Option<&str>,
) -> String {
    let mut framework = ClassSet::with_prefix(config.prefix());
    framework.add(base);
    if let Some(intent) = intent {
        framework.add(intent.tokens());
    }
    compose([
        ClassInput::from(framework.into_class_string()),
        ClassInput::from(user_class),
    ])
}

fn color_class(color: Option<ElementColor>) -> Option<String> {
    color.map(|color| format!("is-{}", color.token()))
}

fn size_class(size: Option<ElementSize>) -> Option<String> {
    size.map(|size| format!("is-{}", size.token()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use bulma_classes::vocabulary::{Spacing, SpacingSide};

    #[test]
    fn user_class_is_not_prefixed() {
        let config = ClassConfig::with_prefix("b-").expect("prefix");
        let intent = StyleIntent::default().with_spacing(SpacingSide::Mb, Spacing::S3);
        assert_eq!(
            element_class(&config, "block".into(), Some(&intent), Some("my-block")),
            "b-block b-mb-3 my-block"
        );
    }

    #[test]
    fn duplicate_user_class_collapses() {
        assert_eq!(
            element_class(&ClassConfig::new(), "tag".into(), None, Some("tag custom")),
            "tag custom"
        );
    }
}
