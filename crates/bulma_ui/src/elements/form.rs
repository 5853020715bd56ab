use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ButtonModifiers {
    pub light: bool,
    pub outlined: bool,
    pub inverted: bool,
    pub rounded: bool,
    pub fullwidth: bool,
    pub loading: bool,
    pub selected: bool,
}

pub(crate) fn button_classes(
    config: &ClassConfig,
    color: Option<ElementColor>,
    size: Option<ElementSize>,
    modifiers: ButtonModifiers,
    intent: Option<&StyleIntent>,
    user_class: Option<&str>,
) -> String {
    let base = ClassInput::list([
        ClassInput::from("button"),
        color_class(color).into(),
        size_class(size).into(),
        [
            ("is-light", modifiers.light),
            ("is-outlined", modifiers.outlined),
            ("is-inverted", modifiers.inverted),
            ("is-rounded", modifiers.rounded),
            ("is-fullwidth", modifiers.fullwidth),
            ("is-loading", modifiers.loading),
            ("is-selected", modifiers.selected),
        ]
        .into(),
    ]);
    element_class(config, base, intent, user_class)
}

pub(crate) fn delete_classes(
    config: &ClassConfig,
    size: Option<ElementSize>,
    user_class: Option<&str>,
) -> String {
    let base = ClassInput::list([ClassInput::from("delete"), size_class(size).into()]);
    element_class(config, base, None, user_class)
}

#[component]
/// Bulma `button` with color, size, and state modifiers.
pub fn Button(
    #[prop(optional)] color: Option<ElementColor>,
    #[prop(optional)] size: Option<ElementSize>,
    #[prop(optional)] is_light: bool,
    #[prop(optional)] is_outlined: bool,
    #[prop(optional)] is_inverted: bool,
    #[prop(optional)] is_rounded: bool,
    #[prop(optional)] is_fullwidth: bool,
    #[prop(optional, into)] is_loading: MaybeSignal<bool>,
    #[prop(optional, into)] is_selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] intent: Option<StyleIntent>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let config = use_class_config();
    let class = move || {
        let modifiers = ButtonModifiers {
            light: is_light,
            outlined: is_outlined,
            inverted: is_inverted,
            rounded: is_rounded,
            fullwidth: is_fullwidth,
            loading: is_loading.get(),
            selected: is_selected.get(),
        };
        button_classes(
            &config,
            color,
            size,
            modifiers,
            intent.as_ref(),
            class.as_deref(),
        )
    };
    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Bulma `delete` control, used to dismiss notifications, tags, and modals.
pub fn Delete(
    #[prop(optional)] size: Option<ElementSize>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let config = use_class_config();
    view! {
        <button
            type="button"
            class=delete_classes(&config, size, class.as_deref())
            aria-label="close"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        ></button>
    }
}
