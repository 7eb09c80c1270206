//! Story manifests embedded at build time and the ids derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::args::{merge_args, StoryArgs};
use crate::CatalogError;

include!(concat!(env!("OUT_DIR"), "/story_catalog_generated.rs"));

/// Manifest schema understood by this build.
pub const STORY_SCHEMA_VERSION: u32 = 1;

/// Named story args, keyed by arg name.
pub type ArgMap = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Component a manifest describes.
pub enum ComponentKind {
    /// `system_ui::Card`.
    Card,
    /// `system_ui::Input`.
    Input,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Card => "Card",
            Self::Input => "Input",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Canvas placement for a component's stories.
pub enum StoryLayout {
    /// Centered in the canvas.
    #[default]
    Centered,
    /// Padded from the canvas edges.
    Padded,
    /// Filling the canvas.
    Fullscreen,
}

impl StoryLayout {
    /// Token written to the canvas `data-ui-layout` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::Padded => "padded",
            Self::Fullscreen => "fullscreen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Editor used for a controlled arg.
pub enum ControlKind {
    /// Single choice from a fixed option list.
    Select,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A controllable arg and its permitted choices.
pub struct ArgControl {
    /// Arg name.
    pub arg: String,
    /// Editor kind.
    pub kind: ControlKind,
    /// Permitted values in display order.
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One named example configuration.
pub struct StoryEntry {
    /// Export name, e.g. `WithImage`.
    pub export: String,
    /// Args layered over the component defaults.
    #[serde(default)]
    pub args: ArgMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Catalog registration for one component.
pub struct ComponentStories {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Navigation title, e.g. `Example/Card`.
    pub title: String,
    /// Rendered component.
    pub component: ComponentKind,
    /// Canvas placement.
    #[serde(default)]
    pub layout: StoryLayout,
    /// Free-form tags, listed under the navigation group title.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Callback args replaced by an action spy.
    #[serde(default)]
    pub actions: Vec<String>,
    /// Controllable args.
    #[serde(default)]
    pub controls: Vec<ArgControl>,
    /// Default args shared by every story.
    #[serde(default)]
    pub args: ArgMap,
    /// Stories in declaration order.
    pub stories: Vec<StoryEntry>,
}

impl ComponentStories {
    /// Control registered for `arg`.
    pub fn control(&self, arg: &str) -> Option<&ArgControl> {
        self.controls.iter().find(|control| control.arg == arg)
    }

    /// Whether `action` is spied on for this component's stories.
    pub fn spies(&self, action: &str) -> bool {
        self.actions.iter().any(|candidate| candidate == action)
    }

    /// Records a control choice in `overrides` after checking it is offered.
    pub fn apply_control(
        &self,
        overrides: &mut ArgMap,
        arg: &str,
        option: &str,
    ) -> Result<(), CatalogError> {
        let control = self.control(arg).ok_or_else(|| CatalogError::UnknownControl {
            component: self.component,
            arg: arg.to_string(),
        })?;
        if !control.options.iter().any(|candidate| candidate == option) {
            return Err(CatalogError::OptionNotOffered {
                arg: arg.to_string(),
                option: option.to_string(),
            });
        }
        overrides.insert(arg.to_string(), Value::String(option.to_string()));
        Ok(())
    }
}

/// A story located in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct StoryRef<'a> {
    /// Owning component registration.
    pub component: &'a ComponentStories,
    /// The story itself.
    pub story: &'a StoryEntry,
}

impl<'a> StoryRef<'a> {
    /// Catalog id, e.g. `example-card--with-image`.
    pub fn id(&self) -> String {
        story_id(&self.component.title, &self.story.export)
    }

    /// Human-readable story name, e.g. `With Image`.
    pub fn name(&self) -> String {
        story_display_name(&self.story.export)
    }

    /// Component defaults, then story args, then `overrides`.
    pub fn args(&self, overrides: &ArgMap) -> ArgMap {
        merge_args([&self.component.args, &self.story.args, overrides])
    }

    /// Resolves the merged args into typed component args.
    pub fn resolve(&self, overrides: &ArgMap) -> Result<StoryArgs, CatalogError> {
        StoryArgs::resolve(self.component.component, &self.args(overrides))
    }
}

/// Every component registration known to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryCatalog {
    /// Registrations sorted by title.
    pub components: Vec<ComponentStories>,
}

impl StoryCatalog {
    /// Parses a catalog from the JSON shape emitted by the build script.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let components: Vec<ComponentStories> = serde_json::from_str(raw)?;
        if let Some(component) = components
            .iter()
            .find(|component| component.schema_version != STORY_SCHEMA_VERSION)
        {
            return Err(CatalogError::Schema {
                title: component.title.clone(),
                found: component.schema_version,
                expected: STORY_SCHEMA_VERSION,
            });
        }
        Ok(Self { components })
    }

    /// Stories in navigation order.
    pub fn entries(&self) -> impl Iterator<Item = StoryRef<'_>> {
        self.components.iter().flat_map(|component| {
            component
                .stories
                .iter()
                .map(move |story| StoryRef { component, story })
        })
    }

    /// Looks up a story by catalog id.
    pub fn find(&self, id: &str) -> Result<StoryRef<'_>, CatalogError> {
        self.entries()
            .find(|entry| entry.id() == id)
            .ok_or_else(|| CatalogError::UnknownStory(id.to_string()))
    }

    /// Id of the first story, used as the initial selection.
    pub fn first_id(&self) -> Option<String> {
        self.entries().next().map(|entry| entry.id())
    }
}

/// Loads the catalog generated from `stories/*.stories.toml`.
pub fn load_catalog() -> Result<StoryCatalog, CatalogError> {
    StoryCatalog::from_json(STORY_CATALOG_JSON)
}

/// Splits an export name into words: `HighElevation` -> `High Elevation`.
pub fn story_display_name(export: &str) -> String {
    let chars: Vec<char> = export.chars().collect();
    let mut name = String::with_capacity(export.len() + 4);
    for (index, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' {
            if !name.is_empty() && !name.ends_with(' ') {
                name.push(' ');
            }
            continue;
        }
        if index > 0 && !name.is_empty() && !name.ends_with(' ') {
            let prev = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|next| next.is_lowercase());
            let boundary = (ch.is_uppercase() && (prev.is_lowercase() || prev.is_ascii_digit()))
                || (ch.is_uppercase() && prev.is_uppercase() && next_is_lower)
                || (ch.is_ascii_digit() && prev.is_alphabetic());
            if boundary {
                name.push(' ');
            }
        }
        name.push(ch);
    }
    name.trim_end().to_string()
}

fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            out.push(ch);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

/// Builds the catalog id for a story: `Example/Card` + `WithImage` ->
/// `example-card--with-image`.
pub fn story_id(title: &str, export: &str) -> String {
    format!(
        "{}--{}",
        sanitize(title),
        sanitize(&story_display_name(export))
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_names_split_camel_case() {
        assert_eq!(story_display_name("Default"), "Default");
        assert_eq!(story_display_name("WithImage"), "With Image");
        assert_eq!(story_display_name("WithHelperText"), "With Helper Text");
        assert_eq!(story_display_name("HTMLInput"), "HTML Input");
        assert_eq!(story_display_name("with_label"), "with label");
    }

    #[test]
    fn story_ids_follow_title_and_export() {
        assert_eq!(story_id("Example/Card", "WithImage"), "example-card--with-image");
        assert_eq!(story_id("Example/Input", "Default"), "example-input--default");
        assert_eq!(
            story_id("Example/Card", "HighElevation"),
            "example-card--high-elevation"
        );
    }

    #[test]
    fn embedded_catalog_registers_both_components() {
        let catalog = load_catalog().expect("catalog loads");
        let titles: Vec<&str> = catalog
            .components
            .iter()
            .map(|component| component.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Example/Card", "Example/Input"]);
        assert_eq!(catalog.components[0].component, ComponentKind::Card);
        assert_eq!(catalog.components[1].component, ComponentKind::Input);
    }

    #[test]
    fn component_tags_are_embedded_for_navigation() {
        let catalog = load_catalog().expect("catalog loads");
        for component in &catalog.components {
            assert_eq!(component.tags, vec!["autodocs".to_string()], "{}", component.title);
        }
    }

    #[test]
    fn embedded_catalog_keeps_story_order() {
        let catalog = load_catalog().expect("catalog loads");
        let card_exports: Vec<&str> = catalog.components[0]
            .stories
            .iter()
            .map(|story| story.export.as_str())
            .collect();
        assert_eq!(
            card_exports,
            vec![
                "Default",
                "WithImage",
                "Outlined",
                "Filled",
                "HighElevation",
                "Clickable",
                "NoElevation",
            ]
        );
        assert_eq!(catalog.components[1].stories.len(), 11);
        assert_eq!(catalog.first_id().as_deref(), Some("example-card--default"));
    }

    #[test]
    fn controls_mirror_component_enums() {
        let catalog = load_catalog().expect("catalog loads");
        let card = &catalog.components[0];
        let variant = card.control("variant").expect("variant control");
        assert_eq!(variant.kind, ControlKind::Select);
        assert_eq!(variant.options, vec!["default", "outlined", "filled"]);
        assert_eq!(
            card.control("elevation").expect("elevation control").options,
            vec!["none", "low", "medium", "high"]
        );

        let input = &catalog.components[1];
        assert_eq!(
            input.control("input_type").expect("type control").options,
            vec!["text", "email", "password", "number", "tel", "url"]
        );
        assert!(input.spies("on_change"));
        assert!(!input.spies("on_click"));
    }

    #[test]
    fn find_reports_unknown_story() {
        let catalog = load_catalog().expect("catalog loads");
        assert!(catalog.find("example-card--with-image").is_ok());
        assert!(matches!(
            catalog.find("example-card--missing"),
            Err(CatalogError::UnknownStory(id)) if id == "example-card--missing"
        ));
    }

    #[test]
    fn apply_control_accepts_only_offered_options() {
        let catalog = load_catalog().expect("catalog loads");
        let card = &catalog.components[0];
        let mut overrides = ArgMap::new();

        card.apply_control(&mut overrides, "variant", "filled")
            .expect("filled is offered");
        assert_eq!(overrides.get("variant"), Some(&Value::from("filled")));

        assert!(matches!(
            card.apply_control(&mut overrides, "variant", "glossy"),
            Err(CatalogError::OptionNotOffered { .. })
        ));
        assert!(matches!(
            card.apply_control(&mut overrides, "title", "Other"),
            Err(CatalogError::UnknownControl { .. })
        ));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn schema_mismatch_is_rejected() {
        let raw = r#"[{"schema_version":2,"title":"Example/Card","component":"Card","stories":[]}]"#;
        assert!(matches!(
            StoryCatalog::from_json(raw),
            Err(CatalogError::Schema { found: 2, .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            StoryCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
