//! Visual catalog for the `system_ui` component set.
//!
//! Each component registers a TOML story manifest under `stories/`: a
//! default arg set, selectable controls mirroring the component's token
//! enums, callback args replaced by action spies, and a list of named example
//! configurations. `build.rs` validates the manifests and embeds them as
//! JSON; [`load_catalog`] reads them back and [`CatalogApp`] renders them for
//! visual review.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
mod args;
mod error;
mod manifest;

pub use app::{push_action, ActionRecord, CatalogApp, ACTION_LOG_LIMIT};
pub use args::{merge_args, CardArgs, InputArgs, StoryArgs};
pub use error::CatalogError;
pub use manifest::{
    load_catalog, story_display_name, story_id, ArgControl, ArgMap, ComponentKind,
    ComponentStories, ControlKind, StoryCatalog, StoryEntry, StoryLayout, StoryRef,
    STORY_CATALOG_JSON, STORY_SCHEMA_VERSION,
};
