use bulma_classes::{Resolved, StyleProps};
use leptos::html::ElementDescriptor;

use super::*;
use crate::attributes::{forwarded_attrs, split_user_class, ForwardedAttr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element rendered by [`Styled`].
pub enum StyledTag {
    /// `<div>`.
    Div,
    /// `<span>`.
    Span,
    /// `<section>`.
    Section,
    /// `<p>`.
    Paragraph,
    /// `<article>`.
    Article,
}

impl Default for StyledTag {
    fn default() -> Self {
        Self::Div
    }
}

pub(crate) fn block_classes(
    config: &ClassConfig,
    intent: Option<&StyleIntent>,
    user_class: Option<&str>,
) -> String {
    element_class(config, "block".into(), intent, user_class)
}

/// Resolves loose props into the final class attribute and the attributes left to forward.
pub(crate) fn styled_parts(
    config: &ClassConfig,
    props: &StyleProps,
    class: Option<&str>,
) -> (String, Vec<(String, ForwardedAttr)>) {
    let Resolved {
        class_string,
        residual,
    } = config.resolve(props);
    let (user_class, residual) = split_user_class(residual, class);
    let class = compose([
        ClassInput::from(class_string),
        ClassInput::from(user_class),
    ]);
    (class, forwarded_attrs(&residual))
}

fn render_styled<El>(
    element: HtmlElement<El>,
    class: String,
    attrs: Vec<(String, ForwardedAttr)>,
    children: Option<Children>,
) -> View
where
    El: ElementDescriptor + 'static,
{
    let element = attrs
        .into_iter()
        .fold(element, |element, (name, attr)| match attr {
            ForwardedAttr::Text(value) => element.attr(name, value),
            ForwardedAttr::Flag => element.attr(name, true),
        });
    let element = if class.is_empty() {
        element
    } else {
        element.attr("class", class)
    };
    element
        .child(children.map(|children| children()))
        .into_view()
}

#[component]
/// Element styled from a loose property map.
///
/// Style-intent keys become Bulma helper classes, `class` / `className` entries join the user
/// class, and every other entry is forwarded as an attribute.
pub fn Styled(
    #[prop(optional)] tag: StyledTag,
    #[prop(optional)] props: StyleProps,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let config = use_class_config();
    let (class, attrs) = styled_parts(&config, &props, class.as_deref());
    match tag {
        StyledTag::Div => render_styled(html::div(), class, attrs, children),
        StyledTag::Span => render_styled(html::span(), class, attrs, children),
        StyledTag::Section => render_styled(html::section(), class, attrs, children),
        StyledTag::Paragraph => render_styled(html::p(), class, attrs, children),
        StyledTag::Article => render_styled(html::article(), class, attrs, children),
    }
}

#[component]
/// Bulma `block` spacer.
pub fn Block(
    #[prop(optional)] intent: Option<StyleIntent>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = use_class_config();
    view! {
        <div class=block_classes(&config, intent.as_ref(), class.as_deref())>{children()}</div>
    }
}
