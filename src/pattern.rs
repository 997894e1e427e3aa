//! Shell-style file patterns used by override rules and .editorconfig sections

use std::path::{Component, Path};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::ConfigError;

/// A compiled glob pattern.
///
/// Patterns without a `/` match against the file name only, so `*.mo`
/// matches `Main.mo` in any directory. Patterns with a `/` match the whole
/// relative path. `*` and `?` never match `/`, `{a,b}` lists alternatives
/// and dotfiles are not special.
#[derive(Debug, Clone)]
pub struct FilePattern {
    source: String,
    matcher: GlobMatcher,
    match_base: bool,
}

impl FilePattern {
    pub fn new(source: &str) -> Result<Self, ConfigError> {
        let trimmed = source.strip_prefix("./").unwrap_or(source);
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidPattern {
                pattern: source.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }

        let glob = GlobBuilder::new(trimmed)
            .literal_separator(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.kind().to_string(),
            })?;

        Ok(Self {
            source: source.to_string(),
            matcher: glob.compile_matcher(),
            match_base: !trimmed.contains('/'),
        })
    }

    /// The pattern as written in the configuration
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a '/'-separated path (see [`normalize_path`]).
    pub fn matches(&self, path: &str) -> bool {
        let candidate = if self.match_base {
            path.rsplit('/').next().unwrap_or(path)
        } else {
            path
        };
        self.matcher.is_match(candidate)
    }
}

/// Render a path with `/` separators and without `.` components.
pub fn normalize_path(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Normalized form of `path` as seen from `root`.
///
/// Absolute paths under `root` lose that prefix. Relative paths are taken
/// to be relative to `root` already.
pub fn relative_path(path: &Path, root: Option<&Path>) -> String {
    match root.and_then(|root| path.strip_prefix(root).ok()) {
        Some(stripped) => normalize_path(stripped),
        None => normalize_path(path),
    }
}
