//! Formatting option records and the shallow merge between them

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, OptionScope};

/// Where trailing commas go in multi-line constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    None,
    /// Only where ES5 syntax allows them (objects, arrays)
    Es5,
    All,
}

impl fmt::Display for TrailingComma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Es5 => write!(f, "es5"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Effective options for one file. Every key always has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    /// Spaces inside `{ }` of object literals
    pub bracket_spacing: bool,
    /// Preferred maximum line length
    pub print_width: u32,
    /// Terminate statements with semicolons
    #[serde(rename = "semi", alias = "semicolons")]
    pub semicolons: bool,
    /// Spaces per indentation level
    pub tab_width: u32,
    /// Where trailing commas go in multi-line constructs
    pub trailing_comma: TrailingComma,
    /// Indent with tabs instead of spaces
    pub use_tabs: bool,
    /// Formatter plugins the host should load for this file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            bracket_spacing: true,
            print_width: 80,
            semicolons: true,
            tab_width: 2,
            trailing_comma: TrailingComma::All,
            use_tabs: false,
            plugins: Vec::new(),
        }
    }
}

/// A partial set of options, as declared at the top level of a config file
/// or inside an override rule.
///
/// Keys that are not recognized are kept in `unknown` so that validation can
/// name them instead of silently dropping them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_spacing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_width: Option<u32>,
    #[serde(
        rename = "semi",
        alias = "semicolons",
        skip_serializing_if = "Option::is_none"
    )]
    pub semicolons: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_comma: Option<TrailingComma>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    /// JSON schema reference for editors; not a formatting option
    #[serde(rename = "$schema", default, skip_serializing)]
    pub schema: Option<String>,

    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl PartialOptions {
    /// Shallow-merge these options over `base`. Keys set here win, the rest
    /// are inherited.
    pub fn merge_over(&self, base: &FormattingOptions) -> FormattingOptions {
        FormattingOptions {
            bracket_spacing: self.bracket_spacing.unwrap_or(base.bracket_spacing),
            print_width: self.print_width.unwrap_or(base.print_width),
            semicolons: self.semicolons.unwrap_or(base.semicolons),
            tab_width: self.tab_width.unwrap_or(base.tab_width),
            trailing_comma: self.trailing_comma.unwrap_or(base.trailing_comma),
            use_tabs: self.use_tabs.unwrap_or(base.use_tabs),
            plugins: self
                .plugins
                .clone()
                .unwrap_or_else(|| base.plugins.clone()),
        }
    }

    /// Reject the first key outside the recognized set.
    pub fn check_known(&self, scope: OptionScope) -> Result<(), ConfigError> {
        match self.unknown.keys().next() {
            Some(key) => Err(ConfigError::UnknownOption {
                key: key.clone(),
                scope,
            }),
            None => Ok(()),
        }
    }

    /// Recognized keys that are set, with their serialized values.
    pub fn set_values(&self) -> BTreeMap<String, serde_json::Value> {
        let mut values = match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        };
        values.retain(|key, _| !self.unknown.contains_key(key));
        values
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
