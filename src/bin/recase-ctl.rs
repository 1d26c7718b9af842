// Recase Control
// Admin commands: list transformations, validate or print settings

use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use clap::{ArgGroup, Parser};

#[cfg(feature = "cli")]
use recase_core::{default_settings_content, Settings};

/// Inspect recase transformations and settings
#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "recase-ctl")]
#[command(author = "recase contributors")]
#[command(version)]
#[command(about = "Inspect recase transformations and settings", long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["list", "check_config", "default_config"])
))]
struct Args {
    /// TOML settings file (default: $RECASE_CONFIG, then ~/.config/recase/settings.toml)
    #[arg(short, long, value_name = "SETTINGS")]
    config: Option<PathBuf>,

    /// Enable debug logging (stderr)
    #[arg(short, long)]
    verbose: bool,

    /// List registered transformation names and labels
    #[arg(long)]
    list: bool,

    /// Validate settings and print what was loaded
    #[arg(long)]
    check_config: bool,

    /// Print a settings file with the built-in defaults
    #[arg(long)]
    default_config: bool,
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(feature = "cli")]
fn load_settings(config: Option<&Path>) -> Result<Settings, Box<dyn std::error::Error>> {
    let settings = match config {
        Some(path) => Settings::load(Some(path))?,
        None => Settings::load_from_env()?,
    };
    Ok(settings)
}

/// Print `name<TAB>label` for every registered transformation
#[cfg(feature = "cli")]
fn write_transformations<W: Write>(
    settings: &Settings,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = settings.dispatcher()?;
    for transformation in dispatcher.registry().iter() {
        writeln!(out, "{}\t{}", transformation.name(), transformation.label())?;
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn write_config_report<W: Write>(
    settings: &Settings,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = settings.dispatcher()?;
    match settings.source_path() {
        Some(path) => writeln!(out, "Configuration is valid: {}", path.display())?,
        None => writeln!(out, "Configuration is valid (defaults)")?,
    }
    writeln!(out, "Small words: {}", settings.small_words().len())?;
    writeln!(out, "Icon: {}", dispatcher.icon_path())?;
    Ok(())
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout().lock();

    if args.default_config {
        write!(stdout, "{}", default_settings_content())?;
        return Ok(());
    }

    let settings = load_settings(args.config.as_deref())?;
    if args.list {
        write_transformations(&settings, &mut stdout)?;
    } else {
        write_config_report(&settings, &mut stdout)?;
    }
    Ok(())
}

// Stub for when cli feature is not enabled
#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("Error: recase-ctl binary requires the 'cli' feature to be enabled.");
    eprintln!("Please build with: cargo build --release --features cli --bin recase-ctl");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "cli")]
    fn test_args_parsing() {
        let args = Args::parse_from(["recase-ctl", "--list"]);
        assert!(args.list);
        assert!(!args.check_config);
        assert!(!args.default_config);
        assert!(args.config.is_none());
        assert!(!args.verbose);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_args_with_config() {
        let args = Args::parse_from([
            "recase-ctl",
            "-v",
            "--config",
            "/tmp/recase.toml",
            "--check-config",
        ]);
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/recase.toml")));
        assert!(args.check_config);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_one_action_required() {
        assert!(Args::try_parse_from(["recase-ctl"]).is_err());
        assert!(Args::try_parse_from(["recase-ctl", "--list", "--check-config"]).is_err());
        assert!(Args::try_parse_from(["recase-ctl", "hello world"]).is_err());
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_write_transformations() {
        let mut buf = Vec::new();
        write_transformations(&Settings::new(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "to_upper\tUpper Case");
        assert_eq!(lines[7], "add_line_breaks_to_list\tAdd Line Breaks to List");
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_check_config_report() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/settings.toml");
        let settings = load_settings(Some(path.as_path())).unwrap();
        assert_eq!(settings.source_path(), Some(path.as_path()));

        let mut buf = Vec::new();
        write_config_report(&settings, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(&format!("Configuration is valid: {}\n", path.display())));
        assert!(text.contains(&format!("Small words: {}\n", settings.small_words().len())));
        assert!(text.ends_with(&format!("Icon: {}\n", settings.icon_path())));
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_report_for_defaults() {
        let mut buf = Vec::new();
        write_config_report(&Settings::new(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Configuration is valid (defaults)\nSmall words: 21\nIcon: icon.png\n"
        );
    }
}
