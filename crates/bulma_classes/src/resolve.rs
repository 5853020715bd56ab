//! Style-intent resolution over loose property maps.

use serde_json::{Map, Value};

use crate::{compose_with_prefix, StyleIntent};

/// Loose, insertion-ordered property bag accepted by [`resolve`].
pub type StyleProps = Map<String, Value>;

/// Output of [`resolve`]: the composed class string plus every unrecognized property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
    /// Space-separated, deduplicated Bulma helper classes.
    pub class_string: String,
    /// Properties the resolver did not recognize, untouched and in input order.
    pub residual: StyleProps,
}

/// Resolves style-intent properties without a class prefix.
///
/// ```
/// use bulma_classes::resolve;
/// use serde_json::json;
///
/// let props = json!({"color": "primary", "m": "2", "data-testid": "x"});
/// let resolved = resolve(props.as_object().unwrap());
/// assert_eq!(resolved.class_string, "has-text-primary m-2");
/// assert_eq!(resolved.residual["data-testid"], "x");
/// ```
pub fn resolve(props: &StyleProps) -> Resolved {
    resolve_with_prefix(None, props)
}

/// Resolves style-intent properties and prefixes every emitted token.
///
/// Never fails: values outside their vocabulary are dropped without a token.
pub fn resolve_with_prefix(prefix: Option<&str>, props: &StyleProps) -> Resolved {
    let (intent, residual) = StyleIntent::from_props(props);
    Resolved {
        class_string: compose_with_prefix(prefix, intent.tokens()),
        residual,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn class_string(value: Value) -> String {
        resolve(value.as_object().expect("object props")).class_string
    }

    #[test]
    fn color_and_shade() {
        assert_eq!(
            class_string(json!({"color": "primary", "colorShade": "50"})),
            "has-text-primary-50"
        );
        assert_eq!(class_string(json!({"color": "invalid"})), "");
        assert_eq!(
            class_string(json!({"color": "primary", "colorShade": "invalid"})),
            "has-text-primary"
        );
        assert_eq!(
            class_string(json!({"backgroundColor": "warning", "colorShade": "invert"})),
            "has-background-warning-invert"
        );
    }

    #[test]
    fn viewport_specific_display_wins() {
        assert_eq!(
            class_string(json!({
                "display": "block",
                "viewport": "mobile",
                "displayMobile": "flex",
            })),
            "is-flex-mobile"
        );
        assert_eq!(
            class_string(json!({
                "display": "block",
                "viewport": "tablet",
                "displayMobile": "flex",
            })),
            "is-flex-mobile is-block-tablet"
        );
    }

    #[test]
    fn none_maps_to_hidden() {
        assert_eq!(
            class_string(json!({"displayWidescreen": "none", "display": "none"})),
            "is-hidden-widescreen is-hidden"
        );
    }

    #[test]
    fn flexbox_requires_flex_display() {
        assert_eq!(
            class_string(json!({"display": "block", "flexDirection": "row"})),
            "is-block"
        );
        assert_eq!(
            class_string(json!({"display": "flex", "flexDirection": "row"})),
            "is-flex is-flex-direction-row"
        );
        assert_eq!(class_string(json!({"flexDirection": "row", "flexGrow": "1"})), "");
    }

    #[test]
    fn flex_values_are_validated() {
        assert_eq!(
            class_string(json!({
                "display": "inline-flex",
                "justifyContent": "space-between",
                "alignItems": "middle",
                "flexGrow": "6",
                "flexShrink": 5,
            })),
            "is-inline-flex is-justify-content-space-between is-flex-shrink-5"
        );
    }

    #[test]
    fn residual_passes_through_unchanged() {
        let props = json!({
            "color": "primary",
            "data-testid": "x",
            "onClick": {"handler": 3},
            "aria-hidden": true,
        });
        let resolved = resolve(props.as_object().expect("object props"));
        assert_eq!(resolved.class_string, "has-text-primary");
        assert_eq!(
            Value::Object(resolved.residual),
            json!({"data-testid": "x", "onClick": {"handler": 3}, "aria-hidden": true})
        );
    }

    #[test]
    fn end_to_end_scenario() {
        assert_eq!(
            class_string(json!({
                "color": "primary",
                "m": "2",
                "display": "flex",
                "viewport": "tablet",
            })),
            "has-text-primary m-2 is-flex-tablet"
        );
    }

    #[test]
    fn prefix_covers_every_token() {
        let props = json!({"textAlign": "centered", "p": "auto", "title": "kept"});
        let resolved = resolve_with_prefix(Some("b-"), props.as_object().expect("object props"));
        assert_eq!(resolved.class_string, "b-p-auto b-has-text-centered");
        assert_eq!(resolved.residual["title"], "kept");
    }

    #[test]
    fn resolution_is_deterministic() {
        let props = json!({
            "skeleton": true,
            "color": "link",
            "displayDesktop": "flex",
            "alignSelf": "center",
            "mt": "3",
        });
        let props = props.as_object().expect("object props");
        assert_eq!(resolve(props), resolve(props));
        assert_eq!(
            resolve(props).class_string,
            "has-text-link mt-3 is-flex-desktop is-align-self-center is-skeleton"
        );
    }
}
