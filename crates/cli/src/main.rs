use std::path::PathBuf;

use {
    anyhow::Context,
    clap::Parser,
    skillforge_catalog::{
        generate::{DEFAULT_SKILLS_DIR, GenerateOptions, generate},
        types::Overrides,
        writer::{DEFAULT_OUTPUT, check_manifest, render_manifest, write_manifest},
    },
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "skillforge",
    version,
    about = "Generate a Claude Code plugin marketplace manifest from a skills directory"
)]
struct Cli {
    /// Marketplace name (defaults to the sanitized package.json name).
    #[arg(long, env = "SKILLFORGE_NAME")]
    name: Option<String>,

    /// Owner name (defaults to the package.json author).
    #[arg(long, env = "SKILLFORGE_OWNER")]
    owner: Option<String>,

    /// Owner email.
    #[arg(long, env = "SKILLFORGE_EMAIL")]
    email: Option<String>,

    /// Marketplace description (defaults to the package.json description).
    #[arg(long, env = "SKILLFORGE_DESCRIPTION")]
    description: Option<String>,

    /// Output path, relative to the root.
    #[arg(long, env = "SKILLFORGE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory containing one subdirectory per skill.
    #[arg(long, env = "SKILLFORGE_SKILLS_DIR", default_value = DEFAULT_SKILLS_DIR)]
    skills_dir: PathBuf,

    /// Project root (defaults to the current directory).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Print the manifest to stdout instead of writing it.
    #[arg(long, conflicts_with = "check")]
    stdout: bool,

    /// Fail if the manifest at the output path is missing or out of date.
    #[arg(long)]
    check: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            name: self.name.clone(),
            owner: self.owner.clone(),
            email: self.email.clone(),
            description: self.description.clone(),
        }
    }
}

/// Logs go to stderr so stdout only carries the summary, or the manifest
/// itself with `--stdout`.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "skillforge starting");

    let root = match cli.root.clone() {
        Some(root) => root,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let opts = GenerateOptions {
        root,
        skills_dir: cli.skills_dir.clone(),
        overrides: cli.overrides(),
    };

    let manifest = generate(&opts)?;

    if cli.stdout {
        print!("{}", render_manifest(&manifest)?);
    } else if cli.check {
        let path = check_manifest(&opts.root, &cli.output, &manifest)?;
        println!(
            "{} is up to date ({} plugins)",
            path.display(),
            manifest.plugins.len()
        );
    } else {
        let path = write_manifest(&opts.root, &cli.output, &manifest)?;
        println!("Generated {}", path.display());
        println!("  {} plugins", manifest.plugins.len());
    }

    Ok(())
}
