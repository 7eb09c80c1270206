use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArgControl {
    arg: String,
    kind: String,
    options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoryEntry {
    export: String,
    #[serde(default)]
    args: toml::Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoryManifest {
    schema_version: u32,
    title: String,
    component: String,
    layout: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    actions: Vec<String>,
    #[serde(default)]
    controls: Vec<ArgControl>,
    #[serde(default)]
    args: toml::Table,
    stories: Vec<StoryEntry>,
}

fn component_actions(component: &str) -> Option<&'static [&'static str]> {
    match component {
        "Card" => Some(&["on_click"]),
        "Input" => Some(&["on_change"]),
        _ => None,
    }
}

fn story_manifest_paths(stories_dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(stories_dir)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", stories_dir.display()));
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".stories.toml"))
        })
        .collect();
    paths.sort();
    paths
}

fn check_control_value(path: &Path, scope: &str, manifest: &StoryManifest, args: &toml::Table) {
    for control in &manifest.controls {
        let Some(value) = args.get(&control.arg) else {
            continue;
        };
        let Some(value) = value.as_str() else {
            panic!(
                "{}: {scope} arg `{}` must be a string option",
                path.display(),
                control.arg
            );
        };
        if !control.options.iter().any(|option| option == value) {
            panic!(
                "{}: {scope} arg `{}` = `{value}` is not one of {:?}",
                path.display(),
                control.arg,
                control.options
            );
        }
    }
}

fn validate(path: &Path, manifest: &StoryManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "story manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    let Some(actions) = component_actions(&manifest.component) else {
        panic!(
            "{}: unknown component `{}`",
            path.display(),
            manifest.component
        );
    };
    if !matches!(manifest.layout.as_str(), "centered" | "padded" | "fullscreen") {
        panic!("{}: unknown layout `{}`", path.display(), manifest.layout);
    }
    for action in &manifest.actions {
        if !actions.contains(&action.as_str()) {
            panic!(
                "{}: `{}` has no callback named `{action}`",
                path.display(),
                manifest.component
            );
        }
    }
    for control in &manifest.controls {
        if control.kind != "select" {
            panic!(
                "{}: control `{}` has unsupported kind `{}`",
                path.display(),
                control.arg,
                control.kind
            );
        }
        if control.options.is_empty() {
            panic!("{}: control `{}` has no options", path.display(), control.arg);
        }
    }

    check_control_value(path, "component", manifest, &manifest.args);

    let mut exports = BTreeSet::new();
    for story in &manifest.stories {
        if story.export.is_empty() {
            panic!("{}: story with empty export name", path.display());
        }
        if !exports.insert(story.export.as_str()) {
            panic!("{}: duplicate story export `{}`", path.display(), story.export);
        }
        check_control_value(path, &story.export, manifest, &story.args);
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let stories_dir = crate_root.join("stories");
    println!("cargo:rerun-if-changed={}", stories_dir.display());

    let mut manifests = Vec::<StoryManifest>::new();
    for path in story_manifest_paths(&stories_dir) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: StoryManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, &manifest);
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| a.title.cmp(&b.title));
    let json = serde_json::to_string_pretty(&manifests).expect("serialize story catalog");
    let generated = format!(
        "/// Build-time generated story catalog JSON.\n\
pub const STORY_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("story_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
