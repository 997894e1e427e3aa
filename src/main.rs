use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fmtrc::{
    find_config_file, find_editorconfig, generate_init_file, load_configuration,
    parse_editorconfig, print_error, print_warning, run, should_use_colors, Colors, ConfigError,
    Configuration, OutputContext, OutputMode,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fmtrc")]
#[command(version, about = "Resolve effective formatter options for files")]
struct Cli {
    /// Files to resolve options for (need not exist)
    #[arg(required_unless_present_any = ["init", "find_config_path"])]
    paths: Vec<String>,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the config file that would be used and exit
    #[arg(long)]
    find_config_path: bool,

    /// Layer .editorconfig settings below the config file
    #[arg(long)]
    editorconfig: bool,

    /// Fail when override rules with identical patterns disagree
    #[arg(long)]
    strict: bool,

    /// Show what override rules change, as a diff against the base options
    #[arg(short, long)]
    diff: bool,

    /// Compact output, errors only on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Log config discovery and matched rules
    #[arg(short, long)]
    verbose: bool,

    /// Generate a template .prettierrc.toml configuration file
    #[arg(long)]
    init: bool,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let use_colors = should_use_colors(cli.color, cli.no_color);
    let colors = Colors::new(use_colors);

    // Handle --init command
    if cli.init {
        return handle_init(&colors);
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            print_error(&e.to_string(), &colors);
            return ExitCode::from(1);
        }
    };

    let config_path = cli.config.clone().or_else(|| find_config_file(&cwd));

    if cli.find_config_path {
        return match config_path {
            Some(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            None => {
                print_error("no configuration file found", &colors);
                ExitCode::from(1)
            }
        };
    }

    let config = match build_configuration(config_path.as_deref(), &cli, &cwd, &colors) {
        Ok(config) => config,
        Err(e) => {
            let label = config_path
                .as_deref()
                .map(|p| format!("{}: ", p.display()))
                .unwrap_or_default();
            print_error(&format!("{label}{e}"), &colors);
            return ExitCode::from(1);
        }
    };

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.diff {
        OutputMode::Diff
    } else {
        OutputMode::Normal
    };
    let ctx = OutputContext::new(output_mode, use_colors);

    match run(&cli.paths, &config, &ctx) {
        Ok(result) => {
            debug!(
                "{} files resolved, {} changed by overrides",
                result.files_resolved, result.files_overridden
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e.to_string(), &colors);
            ExitCode::from(1)
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn handle_init(colors: &Colors) -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e.to_string(), colors);
            ExitCode::from(1)
        }
    }
}

fn build_configuration(
    config_path: Option<&Path>,
    cli: &Cli,
    cwd: &Path,
    colors: &Colors,
) -> Result<Configuration, ConfigError> {
    let config_dir = config_path.and_then(Path::parent).map(|dir| cwd.join(dir));

    let mut config = match (config_path, &config_dir) {
        (Some(path), Some(dir)) => {
            info!("Using config: {}", path.display());
            load_configuration(path)?.with_root(dir)
        }
        _ => {
            info!("No config file found, using defaults");
            Configuration::default().with_root(cwd)
        }
    };

    if cli.strict {
        config.check_conflicts()?;
    }

    if cli.editorconfig {
        let start = config_dir.unwrap_or_else(|| cwd.to_path_buf());

        match find_editorconfig(&start) {
            Some(path) => {
                let editorconfig = parse_editorconfig(&path)?;
                info!(
                    "Using {} ({} sections)",
                    path.display(),
                    editorconfig.section_count()
                );
                config = config.with_editorconfig(editorconfig);
            }
            None if !cli.quiet => {
                print_warning("--editorconfig given but no .editorconfig found", colors)
            }
            None => {}
        }
    }

    Ok(config)
}
