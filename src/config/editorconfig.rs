//! .editorconfig parsing, used as a layer below the base options

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::file::find_file_upward;
use crate::options::PartialOptions;
use crate::pattern::{relative_path, FilePattern};

/// Settings of one .editorconfig section that map onto formatting options
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EditorConfigSettings {
    pub indent_style: Option<String>,
    /// A number, or `tab` to defer to `tab_width`
    pub indent_size: Option<String>,
    pub tab_width: Option<u32>,
    /// A number, or `off`
    pub max_line_length: Option<String>,
}

impl EditorConfigSettings {
    pub fn to_options(&self) -> PartialOptions {
        let use_tabs = match self.indent_style.as_deref() {
            Some("tab") => Some(true),
            Some("space") => Some(false),
            _ => None,
        };

        let tab_width = self
            .indent_size
            .as_deref()
            .and_then(|size| size.parse().ok())
            .or(self.tab_width);

        let print_width = self
            .max_line_length
            .as_deref()
            .and_then(|len| len.parse().ok());

        PartialOptions {
            use_tabs,
            tab_width,
            print_width,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
struct Section {
    pattern: FilePattern,
    settings: EditorConfigSettings,
}

/// Parsed .editorconfig: sections in file order
#[derive(Debug, Clone, Default)]
pub struct EditorConfig {
    /// Directory holding the file; section patterns are relative to it
    root: Option<PathBuf>,
    sections: Vec<Section>,
}

impl EditorConfig {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Options from every section matching `path`; later sections win.
    ///
    /// Absolute paths are matched relative to the directory of the
    /// .editorconfig file.
    pub fn options_for(&self, path: &Path) -> PartialOptions {
        let path = relative_path(path, self.root.as_deref());
        self.sections
            .iter()
            .filter(|section| section.pattern.matches(&path))
            .map(|section| section.settings.to_options())
            .fold(PartialOptions::default(), |acc, next| PartialOptions {
                use_tabs: next.use_tabs.or(acc.use_tabs),
                tab_width: next.tab_width.or(acc.tab_width),
                print_width: next.print_width.or(acc.print_width),
                ..acc
            })
    }
}

/// Find .editorconfig by searching upward from the given directory.
pub fn find_editorconfig(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, &[".editorconfig"], false)
}

/// Parse .editorconfig file.
///
/// Sections whose pattern cannot be compiled are skipped with a warning.
pub fn parse_editorconfig(path: &Path) -> io::Result<EditorConfig> {
    let content = fs::read_to_string(path)?;
    Ok(parse_editorconfig_str(&content, path.parent()))
}

pub(crate) fn parse_editorconfig_str(content: &str, root: Option<&Path>) -> EditorConfig {
    let mut config = EditorConfig {
        root: root.map(Path::to_path_buf),
        sections: Vec::new(),
    };
    let mut current: Option<Section> = None;

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        // Section header
        if line.starts_with('[') && line.ends_with(']') {
            config.sections.extend(current.take());

            let header = &line[1..line.len() - 1];
            match FilePattern::new(header.strip_prefix('/').unwrap_or(header)) {
                Ok(pattern) => {
                    current = Some(Section {
                        pattern,
                        settings: EditorConfigSettings::default(),
                    })
                }
                Err(e) => warn!("Skipping .editorconfig section: {e}"),
            }
            continue;
        }

        // Preamble (root = true) and skipped sections
        let Some(section) = current.as_mut() else {
            continue;
        };

        // Parse key = value
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_lowercase();
            let value = value.trim().to_lowercase();
            let settings = &mut section.settings;

            match key.as_str() {
                "indent_style" => settings.indent_style = Some(value),
                "indent_size" => settings.indent_size = Some(value),
                "tab_width" => settings.tab_width = value.parse().ok(),
                "max_line_length" => settings.max_line_length = Some(value),
                _ => {}
            }
        }
    }

    config.sections.extend(current);
    config
}
