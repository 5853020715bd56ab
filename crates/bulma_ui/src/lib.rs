//! Leptos components for Bulma elements.
//!
//! Every component is a thin call site of [`bulma_classes`]: typed props become Bulma tokens,
//! optional [`StyleIntent`] helpers are appended, the ambient class prefix from
//! [`ClassConfigProvider`] is applied, and the caller's own class is merged last without a
//! prefix. [`Styled`] covers the loose-map path and forwards unrecognized properties as plain
//! attributes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod attributes;
mod context;
mod elements;

pub use attributes::{forwarded_attrs, split_user_class, ForwardedAttr};
pub use bulma_classes::{ClassConfig, ClassPrefix, StyleIntent, StyleProps};
pub use context::{provider_config, use_class_config, ClassConfigProvider};
pub use elements::{
    Block, Button, Delete, ElementColor, ElementSize, Notification, Styled, StyledTag, Subtitle,
    Tag, Title,
};

/// Convenience imports for applications rendering Bulma elements.
pub mod prelude {
    pub use crate::{
        Block, Button, ClassConfig, ClassConfigProvider, Delete, ElementColor, ElementSize,
        Notification, StyleIntent, StyleProps, Styled, StyledTag, Subtitle, Tag, Title,
    };
    pub use bulma_classes::vocabulary::*;
}
