//! Config file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::rc_schema::RcFile;
use crate::error::ConfigError;
use crate::resolve::Configuration;

/// Config file names, in lookup order within one directory
pub const CONFIG_FILE_NAMES: [&str; 3] = [".prettierrc", ".prettierrc.json", ".prettierrc.toml"];

/// Search upward from `start_dir` for the first of `filenames` present.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory is found.
/// Returns `None` if no file is found.
pub fn find_file_upward(
    start_dir: &Path,
    filenames: &[&str],
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(file_path) = filenames
            .iter()
            .map(|name| current.join(name))
            .find(|path| path.is_file())
        {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find a `.prettierrc` by searching upward from the given directory.
///
/// Stops at the first config file found, or at the git repository root
/// (directory containing `.git`), whichever comes first.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, &CONFIG_FILE_NAMES, true)
}

/// Load and parse a config file. `.toml` files are read as TOML, anything
/// else as JSON.
pub fn load_config(path: &Path) -> Result<RcFile, ConfigError> {
    let content = fs::read_to_string(path)?;
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");

    let rc = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    debug!("Parsed {}", path.display());
    Ok(rc)
}

/// Load a config file and build the validated [`Configuration`].
pub fn load_configuration(path: &Path) -> Result<Configuration, ConfigError> {
    load_config(path)?.into_configuration()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".prettierrc.toml");
        fs::write(&config_path, "tabWidth = 2\n").unwrap();

        let found = find_config_file(dir.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join(".prettierrc");
        fs::write(&config_path, "{}").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir);
        assert_eq!(found, None);
    }

    #[test]
    fn test_find_config_prefers_closer() {
        let parent = TempDir::new().unwrap();
        fs::write(parent.path().join(".prettierrc.toml"), "tabWidth = 2\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();
        let child_config = child.join(".prettierrc.json");
        fs::write(&child_config, r#"{"tabWidth": 4}"#).unwrap();

        let found = find_config_file(&child);
        assert_eq!(found, Some(child_config));
    }

    #[test]
    fn test_find_config_name_order_within_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".prettierrc.toml"), "").unwrap();
        let json = dir.path().join(".prettierrc.json");
        fs::write(&json, "{}").unwrap();

        assert_eq!(find_config_file(dir.path()), Some(json));
    }

    #[test]
    fn test_directory_named_like_config_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".prettierrc")).unwrap();
        let toml_path = dir.path().join(".prettierrc.toml");
        fs::write(&toml_path, "").unwrap();

        assert_eq!(find_config_file(dir.path()), Some(toml_path));
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".prettierrc.toml");
        fs::write(
            &config_path,
            r#"
printWidth = 100
useTabs = true

[[overrides]]
files = "*.mo"
options = { tabWidth = 4 }
"#,
        )
        .unwrap();

        let rc = load_config(&config_path).unwrap();
        assert_eq!(rc.options.print_width, Some(100));
        assert_eq!(rc.options.use_tabs, Some(true));
        assert_eq!(rc.overrides.len(), 1);
    }

    #[test]
    fn test_load_json_config_without_extension() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".prettierrc");
        fs::write(&config_path, r#"{"semi": false, "tabWidth": 3}"#).unwrap();

        let cfg = load_configuration(&config_path).unwrap();
        let options = cfg.resolve("index.js");
        assert!(!options.semicolons);
        assert_eq!(options.tab_width, 3);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".prettierrc.toml");
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_config_invalid_json() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".prettierrc.json");
        fs::write(&config_path, "{ tabWidth: ").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config(&dir.path().join(".prettierrc"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_configuration_wrong_value_type() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".prettierrc.toml");
        fs::write(&config_path, "tabWidth = \"four\"\n").unwrap();

        assert!(matches!(
            load_configuration(&config_path),
            Err(ConfigError::Toml(_))
        ));
    }
}
