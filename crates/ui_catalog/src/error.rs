use system_ui::UnknownToken;
use thiserror::Error;

use crate::manifest::ComponentKind;

/// Failures raised while loading the catalog or resolving story args.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded catalog JSON could not be parsed.
    #[error("failed to parse story catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// A component entry declares a schema this build does not read.
    #[error("story catalog `{title}` uses schema {found}; expected {expected}")]
    Schema {
        /// Component title.
        title: String,
        /// Declared schema version.
        found: u32,
        /// Supported schema version.
        expected: u32,
    },
    /// No story has the requested id.
    #[error("unknown story `{0}`")]
    UnknownStory(String),
    /// An arg name the component does not accept.
    #[error("{component} has no arg named `{arg}`")]
    UnknownArg {
        /// Component receiving the arg.
        component: ComponentKind,
        /// Rejected arg name.
        arg: String,
    },
    /// An arg value of the wrong JSON type.
    #[error("arg `{arg}` expects {expected}, found {found}")]
    ArgType {
        /// Arg name.
        arg: String,
        /// Expected value kind.
        expected: &'static str,
        /// Offending value.
        found: String,
    },
    /// An enum arg holding a string outside its token set.
    #[error("arg `{arg}`: {source}")]
    InvalidToken {
        /// Arg name.
        arg: String,
        /// Token parse failure.
        #[source]
        source: UnknownToken,
    },
    /// No control is registered for the arg.
    #[error("{component} has no control for `{arg}`")]
    UnknownControl {
        /// Component owning the controls.
        component: ComponentKind,
        /// Requested arg.
        arg: String,
    },
    /// A control override outside the control's option list.
    #[error("control `{arg}` does not offer `{option}`")]
    OptionNotOffered {
        /// Controlled arg.
        arg: String,
        /// Rejected option.
        option: String,
    },
}
