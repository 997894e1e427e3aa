//! Configuration file support.
//!
//! This module provides:
//! - The `.prettierrc` schema (TOML or JSON)
//! - Config file discovery (search upward from current directory)
//! - Template generation with `--init`
//! - `.editorconfig` reading as a layer below the base options

mod editorconfig;
mod file;
mod init;
mod rc_schema;

pub use editorconfig::{find_editorconfig, parse_editorconfig, EditorConfig, EditorConfigSettings};
#[cfg(test)]
pub(crate) use editorconfig::parse_editorconfig_str;
pub use file::{
    find_config_file, find_file_upward, load_config, load_configuration, CONFIG_FILE_NAMES,
};
pub use init::{generate_init_file, generate_init_file_in, INIT_FILE_NAME, PRETTIERRC_TEMPLATE};
pub use rc_schema::{FilePatterns, OverrideSection, RcFile};
