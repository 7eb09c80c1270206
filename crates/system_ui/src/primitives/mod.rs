//! Card and input primitives plus the token enums that drive their variants.

use std::fmt;
use std::str::FromStr;

use leptos::*;
use thiserror::Error;

use crate::compose_classes;

mod card;
mod input;

pub use card::{Card, CardConfig, CardImage, CardMarkup};
pub use input::{Input, InputConfig, InputHelper, InputMarkup};

/// A string that does not name any member of a token enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`; expected one of: {expected}")]
pub struct UnknownToken {
    /// Enum the value was parsed for, e.g. `card variant`.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
    /// Comma-separated list of accepted tokens.
    pub expected: String,
}

fn parse_token<T: Copy>(
    kind: &'static str,
    raw: &str,
    all: &[T],
    token: fn(T) -> &'static str,
) -> Result<T, UnknownToken> {
    all.iter()
        .copied()
        .find(|candidate| token(*candidate) == raw)
        .ok_or_else(|| UnknownToken {
            kind,
            value: raw.to_string(),
            expected: all
                .iter()
                .map(|candidate| token(*candidate))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual style of a card container.
pub enum CardVariant {
    /// Plain card surface.
    Default,
    /// Bordered card.
    Outlined,
    /// Card with a background fill.
    Filled,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl CardVariant {
    /// Every card variant in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Outlined, Self::Filled];

    /// Stable token used in class names and catalog args.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outlined => "outlined",
            Self::Filled => "filled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Shadow depth tier of a card.
pub enum CardElevation {
    /// No shadow.
    None,
    /// Subtle shadow.
    Low,
    /// Default shadow.
    Medium,
    /// Emphasized shadow.
    High,
}

impl Default for CardElevation {
    fn default() -> Self {
        Self::Medium
    }
}

impl CardElevation {
    /// Every elevation tier from flat to highest.
    pub const ALL: [Self; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    /// Stable token used in class names and catalog args.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Native `type` attribute of an input control.
pub enum InputType {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric entry.
    Number,
    /// Telephone number.
    Tel,
    /// URL entry.
    Url,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    /// Every supported input type.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
    ];

    /// Value forwarded to the `type` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Input sizing tokens.
pub enum InputSize {
    /// Dense control.
    Small,
    /// Default control.
    Medium,
    /// Large control.
    Large,
}

impl Default for InputSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl InputSize {
    /// Every input size from smallest to largest.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Stable token used in class names and catalog args.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual style of an input control.
pub enum InputVariant {
    /// Bordered control.
    Outlined,
    /// Control with a background fill.
    Filled,
    /// Underline-only control.
    Standard,
}

impl Default for InputVariant {
    fn default() -> Self {
        Self::Outlined
    }
}

impl InputVariant {
    /// Every input variant in declaration order.
    pub const ALL: [Self; 3] = [Self::Outlined, Self::Filled, Self::Standard];

    /// Stable token used in class names and catalog args.
    pub fn token(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Standard => "standard",
        }
    }
}

macro_rules! token_traits {
    ($($ty:ident => $kind:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.token())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownToken;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    parse_token($kind, raw, &Self::ALL, Self::token)
                }
            }
        )*
    };
}

token_traits! {
    CardVariant => "card variant",
    CardElevation => "card elevation",
    InputType => "input type",
    InputSize => "input size",
    InputVariant => "input variant",
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn notify<E: 'static>(handler: Option<&Callback<E>>, event: E) {
    if let Some(handler) = handler {
        handler.call(event);
    }
}
