//! Presentational UI primitives for the storybook component set.
//!
//! The crate owns the `Card` and `Input` Leptos components, the closed token
//! enums that drive their variants, and the stable `storybook-*` class
//! contract consumed by the external stylesheet. Every component is a pure
//! function of its props: the class list and node structure are computed by
//! plain markup plans ([`CardMarkup`], [`InputMarkup`]) that can be checked
//! without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_names;
mod primitives;

pub use class_names::compose_classes;
pub use primitives::{
    Card, CardConfig, CardElevation, CardImage, CardMarkup, CardVariant, Input, InputConfig,
    InputHelper, InputMarkup, InputSize, InputType, InputVariant, UnknownToken,
};

/// Convenience imports for crates consuming the component set.
pub mod prelude {
    pub use crate::{
        compose_classes, Card, CardConfig, CardElevation, CardVariant, Input, InputConfig,
        InputSize, InputType, InputVariant, UnknownToken,
    };
}
