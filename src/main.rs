use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use build_version::config::{self, Backend};
use build_version::{ui, VersionResolver};

mod logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Semantic version with build metadata
    Semver,
    /// Raw `git describe` output
    Describe,
    /// Every parsed field as key=value lines
    Fields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendArg {
    Command,
    Git2,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Command => Backend::Command,
            BackendArg::Git2 => Backend::Git2,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "build-version",
    about = "Derive a build version from git describe output"
)]
struct Args {
    #[arg(short, long, help = "Repository directory to describe")]
    path: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "semver", help = "What to print")]
    format: Format,

    #[arg(long, value_enum, help = "How to run git describe")]
    backend: Option<BackendArg>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short, long, help = "Only log errors")]
    quiet: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.verbose, args.quiet) {
        eprintln!("{}", e);
    }

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("build-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(backend) = args.backend {
        config.backend = backend.into();
    }

    let resolver = VersionResolver::new(args.path.as_deref(), config);

    match args.format {
        Format::Semver => println!("{}", resolver.semver()?),
        Format::Describe => println!("{}", resolver.git_describe()),
        Format::Fields => {
            let result = resolver.describe_result()?;
            let semver = resolver.semver()?;
            println!(
                "{}",
                ui::format_fields(resolver.git_describe(), &result, &semver)?
            );
        }
    }

    Ok(())
}
