//! Ambient class configuration for a component subtree.

use bulma_classes::{ClassConfig, ClassPrefix};
use leptos::*;

/// Picks the configuration a [`ClassConfigProvider`] exposes.
///
/// An explicit `config` wins. Otherwise `prefix` is validated; an invalid prefix is logged and
/// replaced by the unprefixed default so rendering keeps going.
pub fn provider_config(config: Option<ClassConfig>, prefix: Option<&str>) -> ClassConfig {
    if let Some(config) = config {
        return config;
    }
    match prefix.map(ClassPrefix::parse_optional) {
        Some(Ok(Some(prefix))) => ClassConfig::from(prefix),
        Some(Ok(None)) | None => ClassConfig::new(),
        Some(Err(err)) => {
            leptos::logging::warn!("ignoring class prefix: {err}");
            ClassConfig::new()
        }
    }
}

#[component]
/// Provides a [`ClassConfig`] to every Bulma component below it.
pub fn ClassConfigProvider(
    /// Full configuration, for example loaded with [`ClassConfig::from_toml_str`].
    #[prop(optional)]
    config: Option<ClassConfig>,
    /// Prefix shorthand used when `config` is not given.
    #[prop(optional, into)]
    prefix: Option<String>,
    children: Children,
) -> impl IntoView {
    provide_context(provider_config(config, prefix.as_deref()));
    children()
}

/// Reads the nearest provided [`ClassConfig`], or the unprefixed default.
pub fn use_class_config() -> ClassConfig {
    use_context::<ClassConfig>().unwrap_or_default()
}
