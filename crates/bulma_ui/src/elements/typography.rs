use super::*;

fn heading_level(level: u8) -> u8 {
    level.clamp(1, 6)
}

pub(crate) fn title_classes(
    config: &ClassConfig,
    stem: &'static str,
    size: u8,
    is_spaced: bool,
    intent: Option<&StyleIntent>,
    user_class: Option<&str>,
) -> String {
    let base = ClassInput::list([
        ClassInput::from(stem),
        format!("is-{}", heading_level(size)).into(),
        [("is-spaced", is_spaced)].into(),
    ]);
    element_class(config, base, intent, user_class)
}

#[component]
/// Bulma `title`, rendered as `h1`..`h6` according to `level`.
pub fn Title(
    /// Heading level, clamped to 1..=6.
    #[prop(default = 1)]
    level: u8,
    /// Visual size; defaults to the heading level.
    #[prop(optional)]
    size: Option<u8>,
    #[prop(optional)] is_spaced: bool,
    #[prop(optional)] intent: Option<StyleIntent>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = use_class_config();
    let level = heading_level(level);
    let class = title_classes(
        &config,
        "title",
        size.unwrap_or(level),
        is_spaced,
        intent.as_ref(),
        class.as_deref(),
    );
    match level {
        1 => view! { <h1 class=class>{children()}</h1> }.into_view(),
        2 => view! { <h2 class=class>{children()}</h2> }.into_view(),
        3 => view! { <h3 class=class>{children()}</h3> }.into_view(),
        4 => view! { <h4 class=class>{children()}</h4> }.into_view(),
        5 => view! { <h5 class=class>{children()}</h5> }.into_view(),
        _ => view! { <h6 class=class>{children()}</h6> }.into_view(),
    }
}

#[component]
/// Bulma `subtitle`, rendered as a paragraph.
pub fn Subtitle(
    #[prop(default = 5)] size: u8,
    #[prop(optional)] intent: Option<StyleIntent>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = use_class_config();
    let class = title_classes(
        &config,
        "subtitle",
        size,
        false,
        intent.as_ref(),
        class.as_deref(),
    );
    view! { <p class=class>{children()}</p> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn title_sizes_are_clamped() {
        let config = ClassConfig::new();
        assert_eq!(
            title_classes(&config, "title", 0, false, None, None),
            "title is-1"
        );
        assert_eq!(
            title_classes(&config, "title", 9, true, None, None),
            "title is-6 is-spaced"
        );
    }

    #[test]
    fn subtitle_takes_intent_helpers() {
        let intent = StyleIntent {
            text_align: Some(bulma_classes::vocabulary::TextAlign::Centered),
            ..StyleIntent::default()
        };
        assert_eq!(
            title_classes(&ClassConfig::new(), "subtitle", 4, false, Some(&intent), None),
            "subtitle is-4 has-text-centered"
        );
    }
}
