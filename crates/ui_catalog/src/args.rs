//! Typed resolution of story args into component configs.

use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::Callback;
use serde_json::Value;
use system_ui::{
    CardConfig, CardElevation, CardVariant, InputConfig, InputSize, InputType, InputVariant,
    UnknownToken,
};

use crate::manifest::{ArgMap, ComponentKind};
use crate::CatalogError;

const CARD_ARGS: &[&str] = &["title", "content", "image_url", "variant", "elevation"];
const INPUT_ARGS: &[&str] = &[
    "input_type",
    "placeholder",
    "label",
    "value",
    "size",
    "variant",
    "disabled",
    "error",
    "helper_text",
];

/// Layers arg maps left to right; later maps win per key.
pub fn merge_args<'a, I>(layers: I) -> ArgMap
where
    I: IntoIterator<Item = &'a ArgMap>,
{
    let mut merged = ArgMap::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => format!("string `{text}`"),
        other => other.to_string(),
    }
}

struct ArgReader<'a> {
    args: &'a ArgMap,
}

impl<'a> ArgReader<'a> {
    fn new(
        component: ComponentKind,
        args: &'a ArgMap,
        known: &[&str],
    ) -> Result<Self, CatalogError> {
        if let Some(arg) = args.keys().find(|arg| !known.contains(&arg.as_str())) {
            return Err(CatalogError::UnknownArg {
                component,
                arg: arg.clone(),
            });
        }
        Ok(Self { args })
    }

    /// Missing and `null` both read as absent.
    fn text(&self, arg: &str) -> Result<Option<String>, CatalogError> {
        match self.args.get(arg) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Err(CatalogError::ArgType {
                arg: arg.to_string(),
                expected: "a string",
                found: describe(other),
            }),
        }
    }

    fn flag(&self, arg: &str) -> Result<bool, CatalogError> {
        match self.args.get(arg) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(CatalogError::ArgType {
                arg: arg.to_string(),
                expected: "a boolean",
                found: describe(other),
            }),
        }
    }

    fn token<T>(&self, arg: &str) -> Result<T, CatalogError>
    where
        T: FromStr<Err = UnknownToken> + Default,
    {
        match self.text(arg)? {
            None => Ok(T::default()),
            Some(raw) => raw.parse().map_err(|source| CatalogError::InvalidToken {
                arg: arg.to_string(),
                source,
            }),
        }
    }
}

/// Card story args without the click handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardArgs {
    /// Heading text.
    pub title: Option<String>,
    /// Body text.
    pub content: Option<String>,
    /// Image source.
    pub image_url: Option<String>,
    /// Visual style.
    pub variant: CardVariant,
    /// Shadow tier.
    pub elevation: CardElevation,
}

impl CardArgs {
    /// Reads card args, rejecting unknown names, wrong types, and unknown tokens.
    pub fn from_args(args: &ArgMap) -> Result<Self, CatalogError> {
        let reader = ArgReader::new(ComponentKind::Card, args, CARD_ARGS)?;
        Ok(Self {
            title: reader.text("title")?,
            content: reader.text("content")?,
            image_url: reader.text("image_url")?,
            variant: reader.token("variant")?,
            elevation: reader.token("elevation")?,
        })
    }

    /// Builds the component config with an optional click handler.
    pub fn into_config(self, on_click: Option<Callback<MouseEvent>>) -> CardConfig {
        CardConfig {
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            variant: self.variant,
            elevation: self.elevation,
            on_click,
        }
    }
}

/// Input story args without the change handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    /// Native input type.
    pub input_type: InputType,
    /// Placeholder text.
    pub placeholder: String,
    /// Label text.
    pub label: Option<String>,
    /// Displayed value.
    pub value: String,
    /// Sizing token.
    pub size: InputSize,
    /// Visual style.
    pub variant: InputVariant,
    /// Disabled state.
    pub disabled: bool,
    /// Error state.
    pub error: bool,
    /// Helper copy.
    pub helper_text: Option<String>,
}

impl InputArgs {
    /// Reads input args, rejecting unknown names, wrong types, and unknown tokens.
    pub fn from_args(args: &ArgMap) -> Result<Self, CatalogError> {
        let reader = ArgReader::new(ComponentKind::Input, args, INPUT_ARGS)?;
        Ok(Self {
            input_type: reader.token("input_type")?,
            placeholder: reader.text("placeholder")?.unwrap_or_default(),
            label: reader.text("label")?,
            value: reader.text("value")?.unwrap_or_default(),
            size: reader.token("size")?,
            variant: reader.token("variant")?,
            disabled: reader.flag("disabled")?,
            error: reader.flag("error")?,
            helper_text: reader.text("helper_text")?,
        })
    }

    /// Builds the component config with an optional change handler.
    pub fn into_config(self, on_change: Option<Callback<String>>) -> InputConfig {
        InputConfig {
            input_type: self.input_type,
            placeholder: self.placeholder,
            label: self.label,
            value: self.value.into(),
            size: self.size,
            variant: self.variant,
            disabled: self.disabled.into(),
            error: self.error,
            helper_text: self.helper_text,
            on_change,
        }
    }
}

/// Typed args of one story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryArgs {
    /// Args for a card story.
    Card(CardArgs),
    /// Args for an input story.
    Input(InputArgs),
}

impl StoryArgs {
    /// Resolves merged args for `component`.
    pub fn resolve(component: ComponentKind, args: &ArgMap) -> Result<Self, CatalogError> {
        match component {
            ComponentKind::Card => CardArgs::from_args(args).map(Self::Card),
            ComponentKind::Input => InputArgs::from_args(args).map(Self::Input),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::manifest::load_catalog;

    fn args(value: Value) -> ArgMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn later_layers_win() {
        let defaults = args(json!({ "title": "Default", "variant": "default" }));
        let story = args(json!({ "title": "Story" }));
        let overrides = args(json!({ "variant": "filled" }));

        let merged = merge_args([&defaults, &story, &overrides]);
        assert_eq!(
            merged,
            args(json!({ "title": "Story", "variant": "filled" }))
        );
    }

    #[test]
    fn card_args_resolve_into_config() {
        let resolved = CardArgs::from_args(&args(json!({
            "title": "Outlined Card",
            "content": "Body",
            "variant": "outlined",
            "elevation": "high",
        })))
        .expect("valid card args");

        assert_eq!(
            resolved,
            CardArgs {
                title: Some("Outlined Card".to_string()),
                content: Some("Body".to_string()),
                image_url: None,
                variant: CardVariant::Outlined,
                elevation: CardElevation::High,
            }
        );
        assert_eq!(
            resolved.into_config(None).class_name(),
            "storybook-card storybook-card--outlined storybook-card--high"
        );
    }

    #[test]
    fn null_reads_as_absent() {
        let resolved = CardArgs::from_args(&args(json!({ "image_url": null })))
            .expect("null image is absent");
        assert_eq!(resolved.image_url, None);
    }

    #[test]
    fn unknown_tokens_are_rejected_with_arg_name() {
        let err = CardArgs::from_args(&args(json!({ "elevation": "extreme" })))
            .expect_err("extreme is not an elevation");
        assert_eq!(
            err.to_string(),
            "arg `elevation`: unknown card elevation `extreme`; expected one of: none, low, medium, high"
        );
    }

    #[test]
    fn unknown_arg_names_are_rejected() {
        let err = InputArgs::from_args(&args(json!({ "colour": "red" })))
            .expect_err("colour is not an input arg");
        assert!(matches!(
            err,
            CatalogError::UnknownArg { component: ComponentKind::Input, ref arg } if arg == "colour"
        ));
    }

    #[test]
    fn wrong_value_types_are_rejected() {
        let err = InputArgs::from_args(&args(json!({ "disabled": "yes" })))
            .expect_err("disabled must be boolean");
        assert_eq!(
            err.to_string(),
            "arg `disabled` expects a boolean, found string `yes`"
        );

        let err = CardArgs::from_args(&args(json!({ "title": 3 })))
            .expect_err("title must be text");
        assert_eq!(err.to_string(), "arg `title` expects a string, found 3");
    }

    #[test]
    fn input_defaults_fill_missing_args() {
        let resolved = InputArgs::from_args(&ArgMap::new()).expect("empty args");
        assert_eq!(resolved, InputArgs::default());
        assert_eq!(
            resolved.into_config(None).class_name(),
            "storybook-input storybook-input--medium storybook-input--outlined"
        );
    }

    #[test]
    fn error_story_marks_control_and_helper() {
        let catalog = load_catalog().expect("catalog loads");
        let story = catalog.find("example-input--error").expect("error story");
        let StoryArgs::Input(input) = story.resolve(&ArgMap::new()).expect("resolves") else {
            panic!("error story should be an input story");
        };

        let markup = input.into_config(None).markup();
        assert_eq!(markup.value, "invalid-email");
        assert!(markup.class.contains("storybook-input--error"));
        assert_eq!(
            markup.helper.map(|helper| helper.class).as_deref(),
            Some("storybook-input__helper storybook-input__helper--error")
        );
    }

    #[test]
    fn with_image_story_resolves_image_block() {
        let catalog = load_catalog().expect("catalog loads");
        let story = catalog.find("example-card--with-image").expect("image story");
        let StoryArgs::Card(card) = story.resolve(&ArgMap::new()).expect("resolves") else {
            panic!("image story should be a card story");
        };

        let image = card.into_config(None).markup().image.expect("image block");
        assert_eq!(image.alt, "Beautiful Landscape");
        assert!(image.src.starts_with("https://images.unsplash.com/"));
    }

    #[test]
    fn every_catalog_story_resolves() {
        let catalog = load_catalog().expect("catalog loads");
        for entry in catalog.entries() {
            entry
                .resolve(&ArgMap::new())
                .unwrap_or_else(|err| panic!("{} failed to resolve: {err}", entry.id()));
        }
    }

    #[test]
    fn overrides_flow_into_resolved_args() {
        let catalog = load_catalog().expect("catalog loads");
        let story = catalog.find("example-input--default").expect("default story");
        let mut overrides = ArgMap::new();
        story
            .component
            .apply_control(&mut overrides, "size", "large")
            .expect("large is offered");

        let StoryArgs::Input(input) = story.resolve(&overrides).expect("resolves") else {
            panic!("default input story should be an input story");
        };
        assert_eq!(input.size, InputSize::Large);
        assert_eq!(input.placeholder, "Enter text here...");
    }
}
