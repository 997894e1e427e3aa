pub mod colors;
pub mod config;
mod error;
pub mod options;
mod output;
pub mod pattern;
mod resolve;

pub use colors::{should_use_colors, Colors, Style};
pub use config::{
    find_config_file, find_editorconfig, generate_init_file, load_config, load_configuration,
    parse_editorconfig, EditorConfig, RcFile, PRETTIERRC_TEMPLATE,
};
pub use error::{ConfigError, OptionScope};
pub use options::{FormattingOptions, PartialOptions, TrailingComma};
pub use output::{
    print_error, print_warning, render_diff, OutputContext, OutputMode, RunResult,
};
pub use resolve::{resolve, Configuration, OverrideRule};

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolve `path` against the current directory. Configuration roots are
/// absolute, so relative CLI paths need the same treatment before matching.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Main entry point: print the effective options of every given path
pub fn run(paths: &[String], config: &Configuration, ctx: &OutputContext) -> io::Result<RunResult> {
    let mut result = RunResult::default();
    let show_header = paths.len() > 1;

    for path in paths.iter().map(Path::new) {
        let target = absolute_path(path);

        let base = config.resolve_base(&target);
        let effective = config.resolve(&target);
        debug!("Resolved {} as {}", path.display(), target.display());

        result.files_resolved += 1;
        if base != effective {
            result.files_overridden += 1;
        }

        output::print_options(path, &base, &effective, show_header, ctx)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_keeps_absolute() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("src/Main.mo");
        assert_eq!(absolute_path(&path), path);
    }

    #[test]
    fn test_absolute_path_joins_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_path(Path::new("src/app.ts")), cwd.join("src/app.ts"));
    }

    #[test]
    fn test_run_counts_overridden_files() {
        let rc: RcFile = toml::from_str(PRETTIERRC_TEMPLATE).unwrap();
        let config = rc.into_configuration().unwrap();
        let ctx = OutputContext::new(OutputMode::Quiet, false);
        let paths = vec!["src/Main.mo".to_string(), "src/app.ts".to_string()];

        let result = run(&paths, &config, &ctx).unwrap();

        assert_eq!(result.files_resolved, 2);
        assert_eq!(result.files_overridden, 1);
    }
}
