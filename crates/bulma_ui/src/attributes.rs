//! Residual property forwarding onto rendered elements.

use bulma_classes::{compose, ClassInput, StyleProps};
use serde_json::Value;

/// Attribute value derived from a residual property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardedAttr {
    /// Attribute with a text value.
    Text(String),
    /// Boolean attribute present without a value (`disabled`, `hidden`).
    Flag,
}

impl ForwardedAttr {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Some(Self::Flag),
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => Some(Self::Text(number.to_string())),
            Value::Array(_) | Value::Object(_) => Some(Self::Text(value.to_string())),
        }
    }
}

/// Converts residual properties into attributes, preserving order.
///
/// `null` and `false` drop the attribute, `true` becomes a boolean attribute, and nested
/// arrays or objects are written as compact JSON.
pub fn forwarded_attrs(residual: &StyleProps) -> Vec<(String, ForwardedAttr)> {
    residual
        .iter()
        .filter_map(|(name, value)| {
            ForwardedAttr::from_value(value).map(|attr| (name.clone(), attr))
        })
        .collect()
}

/// Pulls `class` then `className` out of the residual and merges them after `class`.
///
/// The returned class is unprefixed; callers own these names.
pub fn split_user_class(
    mut residual: StyleProps,
    class: Option<&str>,
) -> (Option<String>, StyleProps) {
    let from_props: Vec<Value> = ["class", "className"]
        .into_iter()
        .filter_map(|key| residual.shift_remove(key))
        .collect();
    let merged = compose([
        ClassInput::from(class),
        ClassInput::list(from_props.iter()),
    ]);
    let merged = (!merged.is_empty()).then_some(merged);
    (merged, residual)
}
