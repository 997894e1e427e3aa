//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name written by `--init`
pub const INIT_FILE_NAME: &str = ".prettierrc.toml";

/// Template .prettierrc.toml with documentation
pub const PRETTIERRC_TEMPLATE: &str = r#"# .prettierrc.toml - formatter options resolved by fmtrc
#
# Top-level keys are the base options for every file. Each [[overrides]]
# entry applies its options on top of the base for files matching `files`
# (a glob or list of globs). When several entries match, later ones win.

# Spaces inside { } of object literals
bracketSpacing = true
# Preferred maximum line length
printWidth = 80
# Terminate statements with semicolons
semi = true
# Spaces per indentation level
tabWidth = 2
# "none", "es5" (only where ES5 allows) or "all"
trailingComma = "es5"
# Indent with spaces, not tabs
useTabs = false

[[overrides]]
files = "*.mo"
# excludeFiles = "vendor/**"

[overrides.options]
bracketSpacing = true
tabWidth = 4
plugins = ["prettier-plugin-motoko"]
printWidth = 80
"#;

/// Generate .prettierrc.toml in the specified directory (or current directory if None).
///
/// Returns an error if the file already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(INIT_FILE_NAME), |d| d.join(INIT_FILE_NAME));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{INIT_FILE_NAME} already exists"),
        ));
    }

    fs::write(&path, PRETTIERRC_TEMPLATE)?;
    Ok(path)
}

/// Generate .prettierrc.toml in the current directory.
///
/// Returns an error if the file already exists.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
