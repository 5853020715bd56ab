//! Typed style intent and its expansion into Bulma helper tokens.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::vocabulary::{
    AlignContent, AlignItems, AlignSelf, Color, ColorShade, Display, FlexDirection, FlexFactor,
    FlexWrap, Float, FontFamily, Interaction, JustifyContent, Overflow, Radius, Responsive, Shadow,
    Spacing, SpacingSide, TextAlign, TextSize, TextTransform, TextWeight, Viewport, Visibility,
};
use crate::ClassConfig;

/// Validated style-intent properties.
///
/// Every field holds a value that already passed its vocabulary check, so building tokens can
/// never fail. Build one directly, or extract it from a loose property map with
/// [`StyleIntent::from_props`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleIntent {
    /// Text color (`has-text-*`).
    pub color: Option<Color>,
    /// Background color (`has-background-*`).
    pub background_color: Option<Color>,
    /// Shade applied to both text and background colors.
    pub color_shade: Option<ColorShade>,
    /// Margin and padding shorthands, emitted in [`SpacingSide`] order.
    pub spacing: BTreeMap<SpacingSide, Spacing>,
    /// `is-size-*`.
    pub text_size: Option<TextSize>,
    /// `has-text-{centered,justified,left,right}`.
    pub text_align: Option<TextAlign>,
    /// `is-{capitalized,lowercase,...}`.
    pub text_transform: Option<TextTransform>,
    /// `has-text-weight-*`.
    pub text_weight: Option<TextWeight>,
    /// `is-family-*`.
    pub font_family: Option<FontFamily>,
    /// Legacy display, scoped by [`StyleIntent::viewport`] when set.
    pub display: Option<Display>,
    /// Breakpoint for the legacy display and for visibility.
    pub viewport: Option<Viewport>,
    /// Viewport-specific display values; these win over the legacy pair for their viewport.
    pub viewport_display: BTreeMap<Viewport, Display>,
    /// `is-hidden` / `is-sr-only`.
    pub visibility: Option<Visibility>,
    /// `is-flex-direction-*`. Flexbox fields only emit when an emitted display is flex-like.
    pub flex_direction: Option<FlexDirection>,
    /// `is-justify-content-*`.
    pub justify_content: Option<JustifyContent>,
    /// `is-align-items-*`.
    pub align_items: Option<AlignItems>,
    /// `is-align-content-*`.
    pub align_content: Option<AlignContent>,
    /// `is-align-self-*`.
    pub align_self: Option<AlignSelf>,
    /// `is-flex-wrap-*`.
    pub flex_wrap: Option<FlexWrap>,
    /// `is-flex-grow-*`.
    pub flex_grow: Option<FlexFactor>,
    /// `is-flex-shrink-*`.
    pub flex_shrink: Option<FlexFactor>,
    /// `is-pulled-*`.
    pub float: Option<Float>,
    /// `is-clipped`.
    pub overflow: Option<Overflow>,
    /// `is-overlay`.
    pub overlay: bool,
    /// `is-clickable` / `is-unselectable`.
    pub interaction: Option<Interaction>,
    /// `is-radiusless`.
    pub radius: Option<Radius>,
    /// `is-shadowless`.
    pub shadow: Option<Shadow>,
    /// `is-mobile` / `is-narrow`.
    pub responsive: Option<Responsive>,
    /// `is-skeleton`.
    pub skeleton: bool,
}

/// Reads a property value as a vocabulary word. Integer numbers count as their decimal text.
fn word(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) if number.is_u64() || number.is_i64() => {
            Some(Cow::Owned(number.to_string()))
        }
        _ => None,
    }
}

fn parse_with<T>(value: &Value, parse: fn(&str) -> Option<T>) -> Option<T> {
    word(value).and_then(|word| parse(&word))
}

fn flag(value: &Value) -> bool {
    value.as_bool().unwrap_or(false)
}

impl StyleIntent {
    /// Splits a property map into validated intent and the residual properties.
    ///
    /// Recognized keys are consumed even when their value is invalid; such values are dropped.
    /// Every other entry is cloned into the residual map, in its original order.
    pub fn from_props(props: &Map<String, Value>) -> (Self, Map<String, Value>) {
        let mut intent = Self::default();
        let mut residual = Map::new();

        for (key, value) in props {
            match key.as_str() {
                "color" => intent.color = parse_with(value, Color::parse),
                "backgroundColor" => intent.background_color = parse_with(value, Color::parse),
                "colorShade" => intent.color_shade = parse_with(value, ColorShade::parse),
                "textSize" => intent.text_size = parse_with(value, TextSize::parse),
                "textAlign" => intent.text_align = parse_with(value, TextAlign::parse),
                "textTransform" => intent.text_transform = parse_with(value, TextTransform::parse),
                "textWeight" => intent.text_weight = parse_with(value, TextWeight::parse),
                "fontFamily" => intent.font_family = parse_with(value, FontFamily::parse),
                "display" => intent.display = parse_with(value, Display::parse),
                "viewport" => intent.viewport = parse_with(value, Viewport::parse),
                "visibility" => intent.visibility = parse_with(value, Visibility::parse),
                "flexDirection" => intent.flex_direction = parse_with(value, FlexDirection::parse),
                "justifyContent" => {
                    intent.justify_content = parse_with(value, JustifyContent::parse)
                }
                "alignItems" => intent.align_items = parse_with(value, AlignItems::parse),
                "alignContent" => intent.align_content = parse_with(value, AlignContent::parse),
                "alignSelf" => intent.align_self = parse_with(value, AlignSelf::parse),
                "flexWrap" => intent.flex_wrap = parse_with(value, FlexWrap::parse),
                "flexGrow" => intent.flex_grow = parse_with(value, FlexFactor::parse),
                "flexShrink" => intent.flex_shrink = parse_with(value, FlexFactor::parse),
                "float" => intent.float = parse_with(value, Float::parse),
                "overflow" => intent.overflow = parse_with(value, Overflow::parse),
                "overlay" => intent.overlay = flag(value),
                "interaction" => intent.interaction = parse_with(value, Interaction::parse),
                "radius" => intent.radius = parse_with(value, Radius::parse),
                "shadow" => intent.shadow = parse_with(value, Shadow::parse),
                "responsive" => intent.responsive = parse_with(value, Responsive::parse),
                "skeleton" => intent.skeleton = flag(value),
                other => {
                    if let Some(side) = SpacingSide::parse(other) {
                        if let Some(step) = parse_with(value, Spacing::parse) {
                            intent.spacing.insert(side, step);
                        }
                    } else if let Some(viewport) = Viewport::from_display_key(other) {
                        if let Some(display) = parse_with(value, Display::parse) {
                            intent.viewport_display.insert(viewport, display);
                        }
                    } else {
                        residual.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        (intent, residual)
    }

    /// Sets one spacing shorthand.
    pub fn with_spacing(mut self, side: SpacingSide, step: Spacing) -> Self {
        self.spacing.insert(side, step);
        self
    }

    /// Sets the display for a single viewport.
    pub fn with_viewport_display(mut self, viewport: Viewport, display: Display) -> Self {
        self.viewport_display.insert(viewport, display);
        self
    }

    /// Expands the intent into unprefixed Bulma tokens.
    ///
    /// Order: colors, spacing, typography, display and visibility, gated flexbox, helpers.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        self.push_colors(&mut tokens);
        for (side, step) in &self.spacing {
            tokens.push(format!("{}-{}", side.token(), step.token()));
        }
        self.push_typography(&mut tokens);
        let flex_active = self.push_display(&mut tokens);
        if flex_active {
            self.push_flexbox(&mut tokens);
        }
        self.push_helpers(&mut tokens);
        tokens
    }

    /// Composes [`StyleIntent::tokens`] with the prefix from `config`.
    pub fn class_string(&self, config: &ClassConfig) -> String {
        config.compose(self.tokens())
    }

    fn push_colors(&self, tokens: &mut Vec<String>) {
        let colored = [
            ("has-text", self.color),
            ("has-background", self.background_color),
        ];
        for (stem, color) in colored {
            let Some(color) = color else {
                continue;
            };
            // An unusable shade keeps the base color token.
            match self.color_shade {
                Some(shade) => tokens.push(format!("{stem}-{}-{}", color.token(), shade.token())),
                None => tokens.push(format!("{stem}-{}", color.token())),
            }
        }
    }

    fn push_typography(&self, tokens: &mut Vec<String>) {
        if let Some(size) = self.text_size {
            tokens.push(format!("is-size-{}", size.token()));
        }
        if let Some(align) = self.text_align {
            tokens.push(format!("has-text-{}", align.token()));
        }
        if let Some(transform) = self.text_transform {
            tokens.push(format!("is-{}", transform.token()));
        }
        if let Some(weight) = self.text_weight {
            tokens.push(format!("has-text-weight-{}", weight.token()));
        }
        if let Some(family) = self.font_family {
            tokens.push(format!("is-family-{}", family.token()));
        }
    }

    /// Pushes display and visibility tokens; returns whether an emitted display is flex-like.
    fn push_display(&self, tokens: &mut Vec<String>) -> bool {
        let mut flex_active = false;

        for (viewport, display) in &self.viewport_display {
            tokens.push(format!("is-{}-{}", display.class_word(), viewport.token()));
            flex_active |= display.is_flex_like();
        }

        if let Some(display) = self.display {
            match self.viewport {
                Some(viewport) if self.viewport_display.contains_key(&viewport) => {}
                Some(viewport) => {
                    tokens.push(format!("is-{}-{}", display.class_word(), viewport.token()));
                    flex_active |= display.is_flex_like();
                }
                None => {
                    tokens.push(format!("is-{}", display.class_word()));
                    flex_active |= display.is_flex_like();
                }
            }
        }

        match (self.visibility, self.viewport) {
            (Some(Visibility::SrOnly), _) => tokens.push("is-sr-only".to_string()),
            (Some(visibility), Some(viewport)) => {
                tokens.push(format!("is-{}-{}", visibility.token(), viewport.token()))
            }
            (Some(visibility), None) => tokens.push(format!("is-{}", visibility.token())),
            (None, _) => {}
        }

        flex_active
    }

    fn push_flexbox(&self, tokens: &mut Vec<String>) {
        if let Some(direction) = self.flex_direction {
            tokens.push(format!("is-flex-direction-{}", direction.token()));
        }
        if let Some(justify) = self.justify_content {
            tokens.push(format!("is-justify-content-{}", justify.token()));
        }
        if let Some(align) = self.align_items {
            tokens.push(format!("is-align-items-{}", align.token()));
        }
        if let Some(align) = self.align_content {
            tokens.push(format!("is-align-content-{}", align.token()));
        }
        if let Some(align) = self.align_self {
            tokens.push(format!("is-align-self-{}", align.token()));
        }
        if let Some(wrap) = self.flex_wrap {
            tokens.push(format!("is-flex-wrap-{}", wrap.token()));
        }
        if let Some(grow) = self.flex_grow {
            tokens.push(format!("is-flex-grow-{}", grow.token()));
        }
        if let Some(shrink) = self.flex_shrink {
            tokens.push(format!("is-flex-shrink-{}", shrink.token()));
        }
    }

    fn push_helpers(&self, tokens: &mut Vec<String>) {
        if let Some(float) = self.float {
            tokens.push(format!("is-pulled-{}", float.token()));
        }
        if let Some(overflow) = self.overflow {
            tokens.push(format!("is-{}", overflow.token()));
        }
        if self.overlay {
            tokens.push("is-overlay".to_string());
        }
        if let Some(interaction) = self.interaction {
            tokens.push(format!("is-{}", interaction.token()));
        }
        if let Some(radius) = self.radius {
            tokens.push(format!("is-{}", radius.token()));
        }
        if let Some(shadow) = self.shadow {
            tokens.push(format!("is-{}", shadow.token()));
        }
        if let Some(responsive) = self.responsive {
            tokens.push(format!("is-{}", responsive.token()));
        }
        if self.skeleton {
            tokens.push("is-skeleton".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn props(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn recognized_keys_are_consumed_even_when_invalid() {
        let (intent, residual) = StyleIntent::from_props(&props(json!({
            "color": "chartreuse",
            "m": "9",
            "displayTablet": "grid",
            "viewport": "phone",
            "id": "main",
        })));
        assert_eq!(intent, StyleIntent::default());
        assert_eq!(residual, props(json!({"id": "main"})));
    }

    #[test]
    fn integer_values_parse_as_words() {
        let (intent, _) = StyleIntent::from_props(&props(json!({
            "m": 2,
            "textSize": 3,
            "flexGrow": 1,
            "colorShade": 50,
        })));
        assert_eq!(intent.spacing.get(&SpacingSide::M), Some(&Spacing::S2));
        assert_eq!(intent.text_size, Some(TextSize::S3));
        assert_eq!(intent.flex_grow, Some(FlexFactor::F1));
        assert_eq!(intent.color_shade, Some(ColorShade::S50));
    }

    #[test]
    fn spacing_follows_declaration_order() {
        let intent = StyleIntent::default()
            .with_spacing(SpacingSide::Py, Spacing::S1)
            .with_spacing(SpacingSide::M, Spacing::Auto)
            .with_spacing(SpacingSide::Mx, Spacing::S0);
        assert_eq!(intent.tokens(), vec!["m-auto", "mx-0", "py-1"]);
    }

    #[test]
    fn background_shares_the_shade() {
        let intent = StyleIntent {
            color: Some(Color::Info),
            background_color: Some(Color::Dark),
            color_shade: Some(ColorShade::Soft),
            ..StyleIntent::default()
        };
        assert_eq!(
            intent.tokens(),
            vec!["has-text-info-soft", "has-background-dark-soft"]
        );
    }

    #[test]
    fn viewport_displays_emit_smallest_first_then_legacy() {
        let intent = StyleIntent {
            display: Some(Display::Block),
            viewport: Some(Viewport::Desktop),
            ..StyleIntent::default()
        }
        .with_viewport_display(Viewport::Fullhd, Display::Hidden)
        .with_viewport_display(Viewport::Mobile, Display::InlineFlex);
        assert_eq!(
            intent.tokens(),
            vec!["is-inline-flex-mobile", "is-hidden-fullhd", "is-block-desktop"]
        );
    }

    #[test]
    fn flexbox_unlocks_from_viewport_specific_display() {
        let intent = StyleIntent {
            flex_direction: Some(FlexDirection::Column),
            flex_shrink: Some(FlexFactor::F0),
            ..StyleIntent::default()
        }
        .with_viewport_display(Viewport::Tablet, Display::Flex);
        assert_eq!(
            intent.tokens(),
            vec![
                "is-flex-tablet",
                "is-flex-direction-column",
                "is-flex-shrink-0"
            ]
        );
    }

    #[test]
    fn superseded_legacy_flex_does_not_unlock_flexbox() {
        let intent = StyleIntent {
            display: Some(Display::Flex),
            viewport: Some(Viewport::Mobile),
            flex_wrap: Some(FlexWrap::Wrap),
            ..StyleIntent::default()
        }
        .with_viewport_display(Viewport::Mobile, Display::Block);
        assert_eq!(intent.tokens(), vec!["is-block-mobile"]);
    }

    #[test]
    fn visibility_takes_viewport_except_sr_only() {
        let hidden = StyleIntent {
            visibility: Some(Visibility::Hidden),
            viewport: Some(Viewport::Tablet),
            ..StyleIntent::default()
        };
        assert_eq!(hidden.tokens(), vec!["is-hidden-tablet"]);

        let sr_only = StyleIntent {
            visibility: Some(Visibility::SrOnly),
            viewport: Some(Viewport::Tablet),
            ..StyleIntent::default()
        };
        assert_eq!(sr_only.tokens(), vec!["is-sr-only"]);
    }

    #[test]
    fn helpers_follow_fixed_order() {
        let (intent, residual) = StyleIntent::from_props(&props(json!({
            "skeleton": true,
            "responsive": "narrow",
            "shadow": "shadowless",
            "radius": "radiusless",
            "interaction": "clickable",
            "overlay": true,
            "overflow": "clipped",
            "float": "right",
        })));
        assert!(residual.is_empty());
        assert_eq!(
            intent.tokens(),
            vec![
                "is-pulled-right",
                "is-clipped",
                "is-overlay",
                "is-clickable",
                "is-radiusless",
                "is-shadowless",
                "is-narrow",
                "is-skeleton",
            ]
        );
    }

    #[test]
    fn non_boolean_flags_are_ignored() {
        let (intent, _) = StyleIntent::from_props(&props(json!({
            "overlay": "true",
            "skeleton": 1,
        })));
        assert!(!intent.overlay);
        assert!(!intent.skeleton);
    }

    #[test]
    fn class_string_uses_config_prefix() {
        let intent = StyleIntent {
            text_weight: Some(TextWeight::Bold),
            ..StyleIntent::default()
        };
        let config = ClassConfig::with_prefix("bulma-").expect("valid prefix");
        assert_eq!(intent.class_string(&config), "bulma-has-text-weight-bold");
    }
}
