//! Response-type shortcuts.
//!
//! A shortcut appends a fixed instruction to the chat prompt so the coach
//! answers in a particular shape. `Default` appends nothing.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Shortcut {
    #[default]
    Default,
    Connect,
    Grow,
    Explore,
    Resolve,
    Support,
}

impl Shortcut {
    /// Bare tag as stored on disk, e.g. `RESOLVE`.
    pub fn tag(&self) -> String {
        self.to_string()
    }

    /// One-line help text shown next to the shortcut.
    pub fn description(&self) -> &'static str {
        match self {
            Shortcut::Default => "No formatting",
            Shortcut::Connect => {
                "Help you explain complex ideas to your child with three clear examples."
            }
            Shortcut::Grow => "Strategies to improve your parenting skills.",
            Shortcut::Explore => "Start a Q&A session with age-appropriate explanations.",
            Shortcut::Resolve => "Step-by-step advice to tackle your parenting challenge.",
            Shortcut::Support => "Empathetic guidance and 2-3 practical tips.",
        }
    }

    /// Instruction appended to the coach prompt. Empty for `Default`.
    pub fn instruction(&self) -> &'static str {
        match self {
            Shortcut::Default => "",
            Shortcut::Connect => {
                " Help the parent explain complex ideas to the child. Give three examples."
            }
            Shortcut::Grow => " Offer three advanced strategies for parenting skill improvement.",
            Shortcut::Explore => " Facilitate a Q&A session with age-appropriate explanations.",
            Shortcut::Resolve => " Provide step-by-step resolution advice.",
            Shortcut::Support => " Offer empathetic support and 2-3 pieces of advice.",
        }
    }

    /// Parses a tag, tolerating decorated labels such as `"🛠 RESOLVE"`.
    ///
    /// Anything unrecognised maps to `Default`.
    pub fn from_label(label: &str) -> Self {
        label
            .split_whitespace()
            .last()
            .and_then(|word| word.parse().ok())
            .unwrap_or_default()
    }
}
