use bulma_ui::prelude::*;
use leptos::*;

fn class_config() -> ClassConfig {
    match ClassConfig::from_toml_str(include_str!("../bulma.toml")) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("bulma.toml: {err}");
            ClassConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (clicks, set_clicks) = create_signal(0);
    let centered = StyleIntent {
        text_align: Some(TextAlign::Centered),
        ..StyleIntent::default()
    }
    .with_spacing(SpacingSide::Mt, Spacing::S6);

    view! {
        <ClassConfigProvider config=class_config()>
            <section class="section">
                <Title intent=centered.clone()>"{{project_name}}"</Title>
                <Subtitle intent=centered>"Leptos and Bulma, ready to go."</Subtitle>
                <Block>
                    <Button
                        color=ElementColor::Primary
                        on_click=Callback::new(move |_| set_clicks.update(|n| *n += 1))
                    >
                        "Clicked " {clicks} " times"
                    </Button>
                </Block>
            </section>
        </ClassConfigProvider>
    }
}
