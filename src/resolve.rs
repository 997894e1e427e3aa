//! Resolution of the effective options for a file
//!
//! Precedence, lowest first:
//! - built-in defaults
//! - `.editorconfig` sections matching the file (when enabled)
//! - base options
//! - override rules matching the file, in declaration order

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::EditorConfig;
use crate::error::{ConfigError, OptionScope};
use crate::options::{FormattingOptions, PartialOptions};
use crate::pattern::{relative_path, FilePattern};

/// Options scoped to the files matching a set of patterns
#[derive(Debug, Clone)]
pub struct OverrideRule {
    files: Vec<FilePattern>,
    exclude_files: Vec<FilePattern>,
    options: PartialOptions,
}

impl OverrideRule {
    /// Compile the patterns of a rule. Fails on the first malformed pattern.
    pub fn new<S: AsRef<str>>(
        files: &[S],
        exclude_files: &[S],
        options: PartialOptions,
    ) -> Result<Self, ConfigError> {
        let compile = |patterns: &[S]| {
            patterns
                .iter()
                .map(|p| FilePattern::new(p.as_ref()))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            files: compile(files)?,
            exclude_files: compile(exclude_files)?,
            options,
        })
    }

    pub fn options(&self) -> &PartialOptions {
        &self.options
    }

    /// Whether the rule applies to a '/'-separated path
    pub fn matches(&self, path: &str) -> bool {
        self.files.iter().any(|p| p.matches(path))
            && !self.exclude_files.iter().any(|p| p.matches(path))
    }

    /// Patterns as written, `files` then `!excludeFiles`
    fn pattern_key(&self) -> Vec<String> {
        let mut files: Vec<String> = self.files.iter().map(|p| p.as_str().to_string()).collect();
        files.sort();
        let mut excludes: Vec<String> = self
            .exclude_files
            .iter()
            .map(|p| format!("!{}", p.as_str()))
            .collect();
        excludes.sort();
        files.extend(excludes);
        files
    }
}

/// Base options plus ordered override rules. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Directory that patterns with `/` are relative to
    root: Option<PathBuf>,
    base: PartialOptions,
    overrides: Vec<OverrideRule>,
    editorconfig: Option<EditorConfig>,
}

impl Configuration {
    /// Build a configuration, rejecting keys outside the recognized set.
    pub fn new(base: PartialOptions, overrides: Vec<OverrideRule>) -> Result<Self, ConfigError> {
        base.check_known(OptionScope::Base)?;
        for (index, rule) in overrides.iter().enumerate() {
            rule.options.check_known(OptionScope::Override(index))?;
        }

        Ok(Self {
            root: None,
            base,
            overrides,
            editorconfig: None,
        })
    }

    /// Match absolute paths relative to `root`, normally the directory of
    /// the config file.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Layer `.editorconfig` settings under the base options.
    pub fn with_editorconfig(mut self, editorconfig: EditorConfig) -> Self {
        self.editorconfig = Some(editorconfig);
        self
    }

    pub fn base(&self) -> &PartialOptions {
        &self.base
    }

    pub fn overrides(&self) -> &[OverrideRule] {
        &self.overrides
    }

    /// Effective options for `path`.
    ///
    /// Relative paths are taken as relative to the root; absolute paths
    /// under it are made relative before matching.
    pub fn resolve(&self, path: impl AsRef<Path>) -> FormattingOptions {
        let path = path.as_ref();
        let relative = relative_path(path, self.root.as_deref());
        let mut options = self.resolve_base(path);

        for (index, rule) in self.overrides.iter().enumerate() {
            if rule.matches(&relative) {
                debug!("{}: override #{} matched", relative, index);
                options = rule.options.merge_over(&options);
            }
        }

        options
    }

    /// Options for `path` before any override rule is applied.
    pub fn resolve_base(&self, path: impl AsRef<Path>) -> FormattingOptions {
        let mut options = FormattingOptions::default();
        if let Some(editorconfig) = &self.editorconfig {
            options = editorconfig.options_for(path.as_ref()).merge_over(&options);
        }
        self.base.merge_over(&options)
    }

    /// Fail when two rules with identical patterns set a key to different
    /// values.
    pub fn check_conflicts(&self) -> Result<(), ConfigError> {
        for (i, earlier) in self.overrides.iter().enumerate() {
            let key = earlier.pattern_key();
            let earlier_values = earlier.options.set_values();

            for later in &self.overrides[i + 1..] {
                if later.pattern_key() != key {
                    continue;
                }
                for (option, value) in later.options.set_values() {
                    if earlier_values.get(&option).is_some_and(|v| *v != value) {
                        return Err(ConfigError::ConflictingOverride {
                            pattern: key.join(", "),
                            key: option,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Effective options for `file_path` under `configuration`.
pub fn resolve(file_path: impl AsRef<Path>, configuration: &Configuration) -> FormattingOptions {
    configuration.resolve(file_path)
}
