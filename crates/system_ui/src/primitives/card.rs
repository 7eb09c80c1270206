use leptos::ev::MouseEvent;

use super::*;

const CARD_IMAGE_FALLBACK_ALT: &str = "Card image";

/// Props of a [`Card`] gathered into one record.
#[derive(Clone, Default)]
pub struct CardConfig {
    /// Heading text and image description.
    pub title: Option<String>,
    /// Body text.
    pub content: Option<String>,
    /// Source of the optional image block.
    pub image_url: Option<String>,
    /// Visual style.
    pub variant: CardVariant,
    /// Shadow tier.
    pub elevation: CardElevation,
    /// Click handler; its presence also marks the card clickable.
    pub on_click: Option<Callback<MouseEvent>>,
}

/// Image block of a rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Image source URL.
    pub src: String,
    /// Accessible description.
    pub alt: String,
}

/// Node plan for one card render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMarkup {
    /// Root container class list.
    pub class: String,
    /// Image block, emitted before the content container.
    pub image: Option<CardImage>,
    /// Heading text.
    pub title: Option<String>,
    /// Body text block.
    pub text: Option<String>,
}

impl CardConfig {
    /// Whether a click handler is attached.
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    /// Root class list: base, variant, elevation, then the clickable marker.
    pub fn class_name(&self) -> String {
        compose_classes([
            (true, "storybook-card".to_string()),
            (true, format!("storybook-card--{}", self.variant.token())),
            (true, format!("storybook-card--{}", self.elevation.token())),
            (self.is_clickable(), "storybook-card--clickable".to_string()),
        ])
    }

    /// Computes the node plan rendered by [`Card`].
    pub fn markup(&self) -> CardMarkup {
        let image = self.image_url.as_ref().map(|src| CardImage {
            src: src.clone(),
            alt: self
                .title
                .clone()
                .unwrap_or_else(|| CARD_IMAGE_FALLBACK_ALT.to_string()),
        });

        CardMarkup {
            class: self.class_name(),
            image,
            title: self.title.clone(),
            text: self.content.clone(),
        }
    }
}

fn render_card(config: CardConfig, attrs: Vec<(&'static str, Attribute)>) -> impl IntoView {
    let CardMarkup {
        class,
        image,
        title,
        text,
    } = config.markup();
    let on_click = config.on_click;

    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind="card"
            on:click=move |ev| notify(on_click.as_ref(), ev)
            {..attrs}
        >
            {image.map(|image| view! {
                <div class="storybook-card__image">
                    <img src=image.src alt=image.alt />
                </div>
            })}
            <div class="storybook-card__content">
                {title.map(|title| view! { <h3 class="storybook-card__title">{title}</h3> })}
                {text.map(|text| view! { <p class="storybook-card__text">{text}</p> })}
            </div>
        </div>
    }
}

impl IntoView for CardConfig {
    fn into_view(self) -> View {
        render_card(self, Vec::new()).into_view()
    }
}

#[component]
/// Content card with an optional image, heading, and body text.
///
/// Attributes not named here are spread onto the root node unchanged.
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] content: Option<String>,
    #[prop(optional, into)] image_url: Option<String>,
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = CardElevation::Medium)] elevation: CardElevation,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let config = CardConfig {
        title,
        content,
        image_url,
        variant,
        elevation,
        on_click,
    };
    render_card(config, attrs)
}
