use crate::colors::{Colors, Style};
use crate::options::FormattingOptions;
use similar::{ChangeTag, TextDiff};
use std::fmt::Write as _;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    /// Pretty JSON per file
    Normal,
    /// Compact JSON, one line per file
    Quiet,
    /// Diff between base and effective options
    Diff,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files_resolved: usize,
    /// Files at least one override rule changed
    pub files_overridden: usize,
}

fn to_json(options: &FormattingOptions, pretty: bool) -> io::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(options)
    } else {
        serde_json::to_string(options)
    };
    json.map_err(io::Error::other)
}

pub fn print_options(
    path: &Path,
    base: &FormattingOptions,
    effective: &FormattingOptions,
    show_header: bool,
    ctx: &OutputContext,
) -> io::Result<()> {
    match ctx.mode {
        OutputMode::Quiet => println!("{}", to_json(effective, false)?),
        OutputMode::Normal => {
            if show_header {
                let header = path.display().to_string();
                println!("{}", ctx.colors.paint(Style::Header, &header));
            }
            println!("{}", to_json(effective, true)?);
        }
        OutputMode::Diff => {
            let label = path.display().to_string();
            let diff = render_diff(
                &label,
                &to_json(base, true)?,
                &to_json(effective, true)?,
                &ctx.colors,
            );
            print!("{diff}");
        }
    }
    Ok(())
}

/// Unified diff of two texts. Empty when they are equal.
pub fn render_diff(label: &str, original: &str, content: &str, colors: &Colors) -> String {
    let mut out = String::new();
    if original == content {
        return out;
    }

    let diff = TextDiff::from_lines(original, content);

    let _ = writeln!(out, "--- {label} (base)");
    let _ = writeln!(out, "+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                let text = change.value().trim_end_matches('\n');
                let _ = writeln!(out, "{}", colors.diff_line(sign, text));
            }
        }
    }
    out
}

pub fn print_error(message: &str, colors: &Colors) {
    eprintln!("{} {message}", colors.paint(Style::Error, "Error:"));
}

pub fn print_warning(message: &str, colors: &Colors) {
    eprintln!("{} {message}", colors.paint(Style::Warning, "Warning:"));
}
