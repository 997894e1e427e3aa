//! Schema of `.prettierrc` files (TOML or JSON)

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::options::PartialOptions;
use crate::resolve::{Configuration, OverrideRule};

/// Root structure of a `.prettierrc` file
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RcFile {
    /// Per-pattern option overrides, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideSection>,

    /// Base options (top-level keys)
    #[serde(flatten)]
    pub options: PartialOptions,
}

/// One entry of the `overrides` array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OverrideSection {
    pub files: FilePatterns,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_files: Option<FilePatterns>,

    #[serde(default)]
    pub options: PartialOptions,
}

/// `files = "*.mo"` or `files = ["*.js", "*.ts"]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilePatterns {
    One(String),
    Many(Vec<String>),
}

impl FilePatterns {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(pattern) => std::slice::from_ref(pattern),
            Self::Many(patterns) => patterns,
        }
    }
}

impl RcFile {
    /// Validate keys and compile every pattern.
    pub fn into_configuration(self) -> Result<Configuration, ConfigError> {
        let overrides = self
            .overrides
            .into_iter()
            .map(|section| {
                let excludes = section
                    .exclude_files
                    .as_ref()
                    .map(FilePatterns::as_slice)
                    .unwrap_or_default();
                OverrideRule::new(section.files.as_slice(), excludes, section.options)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Configuration::new(self.options, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TrailingComma;

    #[test]
    fn test_parse_toml_with_override() {
        let rc: RcFile = toml::from_str(
            r#"
tabWidth = 2
trailingComma = "es5"

[[overrides]]
files = "*.mo"

[overrides.options]
tabWidth = 4
plugins = ["prettier-plugin-motoko"]
"#,
        )
        .unwrap();

        assert_eq!(rc.options.tab_width, Some(2));
        assert_eq!(rc.options.trailing_comma, Some(TrailingComma::Es5));
        assert!(rc.options.unknown.is_empty());
        assert_eq!(rc.overrides.len(), 1);
        assert_eq!(rc.overrides[0].files, FilePatterns::One("*.mo".to_string()));
        assert_eq!(rc.overrides[0].options.tab_width, Some(4));
    }

    #[test]
    fn test_parse_json_with_pattern_list_and_excludes() {
        let rc: RcFile = serde_json::from_str(
            r#"{
  "semi": false,
  "overrides": [
    {
      "files": ["*.js", "*.ts"],
      "excludeFiles": "legacy/**",
      "options": { "semi": true }
    }
  ]
}"#,
        )
        .unwrap();

        let section = &rc.overrides[0];
        assert_eq!(section.files.as_slice(), ["*.js", "*.ts"]);
        assert_eq!(
            section.exclude_files.as_ref().map(FilePatterns::as_slice),
            Some(&["legacy/**".to_string()][..])
        );
        assert_eq!(section.options.semicolons, Some(true));
    }

    #[test]
    fn test_unknown_top_level_key_is_captured() {
        let rc: RcFile = toml::from_str("tabWidth = 2\nsingleQuotes = true\n").unwrap();
        let err = rc.into_configuration().unwrap_err();
        assert!(err.is_unknown_option());
        assert!(err.to_string().contains("singleQuotes"));
    }

    #[test]
    fn test_schema_reference_is_accepted() {
        let rc: RcFile = serde_json::from_str(
            r#"{ "$schema": "https://json.schemastore.org/prettierrc", "printWidth": 100 }"#,
        )
        .unwrap();

        let cfg = rc.into_configuration().unwrap();
        assert_eq!(cfg.resolve("app.ts").print_width, 100);
    }

    #[test]
    fn test_unknown_override_entry_key_is_parse_error() {
        let result: Result<RcFile, _> = toml::from_str(
            r#"
[[overrides]]
files = "*.mo"
option = { tabWidth = 4 }
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_into_configuration_reports_invalid_pattern() {
        let rc: RcFile = toml::from_str(
            r#"
[[overrides]]
files = "*.[mo"
options = { tabWidth = 4 }
"#,
        )
        .unwrap();

        assert!(rc.into_configuration().unwrap_err().is_invalid_pattern());
    }

    #[test]
    fn test_brace_pattern_matches_each_alternative() {
        let rc: RcFile = toml::from_str(
            r#"
[[overrides]]
files = "*.{js,ts}"
options = { tabWidth = 4 }
"#,
        )
        .unwrap();
        let cfg = rc.into_configuration().unwrap();

        assert_eq!(cfg.resolve("src/app.ts").tab_width, 4);
        assert_eq!(cfg.resolve("index.js").tab_width, 4);
        assert_eq!(cfg.resolve("style.css").tab_width, 2);
    }

    #[test]
    fn test_unclosed_brace_pattern_is_rejected() {
        let rc: RcFile = toml::from_str(
            r#"
[[overrides]]
files = "*.{js,ts"
options = { tabWidth = 4 }
"#,
        )
        .unwrap();

        assert!(rc.into_configuration().unwrap_err().is_invalid_pattern());
    }

    #[test]
    fn test_empty_file_is_default() {
        let rc: RcFile = toml::from_str("").unwrap();
        assert!(rc.options.is_empty());
        assert!(rc.overrides.is_empty());
    }
}
