use super::*;

pub(crate) fn tag_classes(
    config: &ClassConfig,
    color: Option<ElementColor>,
    size: Option<ElementSize>,
    is_light: bool,
    is_rounded: bool,
    intent: Option<&StyleIntent>,
    user_class: Option<&str>,
) -> String {
    let base = ClassInput::list([
        ClassInput::from("tag"),
        color_class(color).into(),
        size_class(size).into(),
        [("is-light", is_light), ("is-rounded", is_rounded)].into(),
    ]);
    element_class(config, base, intent, user_class)
}

pub(crate) fn notification_classes(
    config: &ClassConfig,
    color: Option<ElementColor>,
    is_light: bool,
    intent: Option<&StyleIntent>,
    user_class: Option<&str>,
) -> String {
    let base = ClassInput::list([
        ClassInput::from("notification"),
        color_class(color).into(),
        [("is-light", is_light)].into(),
    ]);
    element_class(config, base, intent, user_class)
}

#[component]
/// Bulma `tag` label.
pub fn Tag(
    #[prop(optional)] color: Option<ElementColor>,
    #[prop(optional)] size: Option<ElementSize>,
    #[prop(optional)] is_light: bool,
    #[prop(optional)] is_rounded: bool,
    #[prop(optional)] intent: Option<StyleIntent>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = use_class_config();
    let class = tag_classes(
        &config,
        color,
        size,
        is_light,
        is_rounded,
        intent.as_ref(),
        class.as_deref(),
    );
    view! { <span class=class>{children()}</span> }
}

#[component]
/// Bulma `notification` block with an optional dismiss control.
pub fn Notification(
    #[prop(optional)] color: Option<ElementColor>,
    #[prop(optional)] is_light: bool,
    /// When set, a [`Delete`] control is rendered and wired to this callback.
    #[prop(optional)]
    on_dismiss: Option<Callback<MouseEvent>>,
    #[prop(optional)] intent: Option<StyleIntent>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = use_class_config();
    let class = notification_classes(&config, color, is_light, intent.as_ref(), class.as_deref());
    view! {
        <div class=class>
            {on_dismiss.map(|on_dismiss| view! { <Delete on_click=on_dismiss/> })}
            {children()}
        </div>
    }
}
