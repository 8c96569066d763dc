use anyhow::{Context, Result};
use chlogcheck::utils::config::{REPO_PATH_ENV, resolve_repo_path};
use chlogcheck::utils::preflight;
use chlogcheck::{ChlogcheckConfig, Error, GitOps, ValidatedBump, validate_changelog_file};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chlogcheck")]
#[command(version, about = "validate changelog version bumps to prevent release errors", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the git repository (defaults to current directory; REPO_PATH overrides it)
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    /// configuration file (defaults to chlogcheck.toml in the repository root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// run preflight checks and validate the repository changelog (default)
    Validate {
        /// changelog file (defaults to the configured file in the repository root)
        #[arg(long)]
        changelog: Option<PathBuf>,

        /// validate even if the preflight checks fail
        #[arg(long)]
        skip_preflight: bool,
    },

    /// validate a changelog file without inspecting git
    Check {
        /// changelog file to validate
        file: PathBuf,
    },

    /// only run the preflight checks
    Preflight,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "chlogcheck=debug"
    } else {
        "chlogcheck=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli, repo_root: &Path) -> Result<ChlogcheckConfig> {
    match &cli.config {
        Some(path) => ChlogcheckConfig::load_from_file(path)
            .with_context(|| format!("failed to load configuration '{}'", path.display())),
        None => Ok(ChlogcheckConfig::load_or_default(repo_root)),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);
    cli.path = resolve_repo_path(&cli.path, std::env::var_os(REPO_PATH_ENV));

    match &cli.command {
        None => handle_validate(&cli, None, false),
        Some(Commands::Validate {
            changelog,
            skip_preflight,
        }) => handle_validate(&cli, changelog.as_deref(), *skip_preflight),
        Some(Commands::Check { file }) => handle_check(&cli.format, file),
        Some(Commands::Preflight) => handle_preflight(&cli),
    }
}

fn handle_validate(cli: &Cli, changelog: Option<&Path>, skip_preflight: bool) -> Result<()> {
    let repo = GitOps::get_repository_info(&cli.path).with_context(|| {
        format!("failed to open git repository '{}'", cli.path.display())
    })?;
    let config = load_config(cli, &repo.root_path)?;

    if config.preflight.enabled && !skip_preflight {
        let report = preflight::check(&repo.root_path, &config.preflight)?;
        if !report.passed {
            tracing::info!("preflight check failed; not running validation");
            if matches!(cli.format, OutputFormat::Json) {
                let output = serde_json::json!({
                    "skipped": true,
                    "preflight": report,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            return Ok(());
        }
    }

    let changelog_path = match changelog {
        Some(path) => path.to_path_buf(),
        None => config.changelog.changelog_path(&repo.root_path),
    };

    handle_check(&cli.format, &changelog_path)
}

fn handle_check(format: &OutputFormat, changelog_path: &Path) -> Result<()> {
    tracing::info!("validating changelog '{}'", changelog_path.display());

    match validate_changelog_file(changelog_path) {
        Ok(bump) => {
            print_valid(format, changelog_path, &bump)?;
            tracing::info!("changelog is valid");
            Ok(())
        }
        Err(Error::Validation(err)) => {
            match format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "changelog": changelog_path,
                        "valid": false,
                        "error": err.to_string(),
                        "details": err,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    println!("changelog: {}", changelog_path.display());
                    println!("validation failed: {}", err);
                }
            }

            // return error to cause non-zero exit code
            anyhow::bail!("validation failed: {}", err);
        }
        Err(err) => Err(err)
            .with_context(|| format!("failed to open changelog '{}'", changelog_path.display())),
    }
}

fn print_valid(format: &OutputFormat, changelog_path: &Path, bump: &ValidatedBump) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "changelog": changelog_path,
                "valid": true,
                "released": bump.from.to_string(),
                "released_on": bump.released.release_date(),
                "unreleased": bump.to.to_string(),
                "bump": bump.bump,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("changelog: {}", changelog_path.display());
            println!(
                "  released:   {} (line {})",
                bump.released.heading, bump.released.line_number
            );
            println!(
                "  unreleased: {} (line {})",
                bump.unreleased.heading, bump.unreleased.line_number
            );
            println!(
                "changelog is valid: {} -> {} ({} bump)",
                bump.from, bump.to, bump.bump
            );
        }
    }

    Ok(())
}

fn handle_preflight(cli: &Cli) -> Result<()> {
    let repo = GitOps::get_repository_info(&cli.path).with_context(|| {
        format!("failed to open git repository '{}'", cli.path.display())
    })?;
    let config = load_config(cli, &repo.root_path)?;

    let report = preflight::check(&repo.root_path, &config.preflight)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => match report.failed_condition {
            Some(condition) => println!("preflight condition '{}' failed", condition),
            None => println!("preflight checks passed"),
        },
    }

    Ok(())
}
