//! # cenv CLI Entry Point
//!
//! Running `cenv` with no arguments builds the package descriptor graph and
//! generates build files with the configured defaults, then exits. The
//! subcommands expose the same pipeline piecewise: `generate`, `tree`,
//! `dump`, `info`, `completion`.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;
use std::rc::Rc;

use cenv::config::{self, EnvConfig};
use cenv::descriptor::{self, Package, ProjectKind};
use cenv::generate::GenerateFormat;
use cenv::packages::{Scheme, env};
use cenv::tree;

#[derive(Parser)]
#[command(name = "cenv")]
#[command(about = "Package descriptor builder for the cenv/xenv libraries", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate build files from the package descriptor
    Generate {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Output directory [default: build]
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Naming scheme
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,
    },
    /// Visualize the package dependency tree
    Tree {
        /// Naming scheme
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,
    },
    /// Print the JSON package manifest to stdout
    Dump {
        /// Naming scheme
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,
    },
    /// Show a summary of the package descriptor
    Info {
        /// Naming scheme
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Cmake,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Cenv,
    Xenv,
}

impl From<FormatArg> for GenerateFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Cmake => GenerateFormat::Cmake,
            FormatArg::Json => GenerateFormat::Json,
        }
    }
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Cenv => Scheme::Cenv,
            SchemeArg::Xenv => Scheme::Xenv,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;

    match &cli.command {
        None => run_generate(&config, None, None, None),

        Some(Commands::Generate {
            format,
            out,
            scheme,
        }) => run_generate(&config, *format, out.clone(), *scheme),

        Some(Commands::Tree { scheme }) => {
            let pkg = resolve_package(&config, *scheme)?;
            tree::print_tree(&pkg);
            Ok(())
        }

        Some(Commands::Dump { scheme }) => {
            let pkg = resolve_package(&config, *scheme)?;
            println!("{}", cenv::generate::render_manifest(&pkg)?);
            Ok(())
        }

        Some(Commands::Info { scheme }) => print_info(&config, *scheme),

        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Build the root descriptor; a CLI scheme flag wins over `cenv.toml`.
fn resolve_package(config: &EnvConfig, cli_scheme: Option<SchemeArg>) -> Result<Rc<Package>> {
    let scheme: Scheme = match cli_scheme {
        Some(s) => s.into(),
        None => config
            .package
            .scheme
            .parse()
            .with_context(|| format!("Invalid scheme in {}", config::CONFIG_FILE))?,
    };
    Ok(env::get_package_for(scheme, &config.package.scope))
}

fn run_generate(
    config: &EnvConfig,
    format: Option<FormatArg>,
    out: Option<PathBuf>,
    scheme: Option<SchemeArg>,
) -> Result<()> {
    let pkg = resolve_package(config, scheme)?;

    let format = match format {
        Some(f) => f.into(),
        None => match config.generate.as_ref().and_then(|g| g.format.as_deref()) {
            None | Some("cmake") => GenerateFormat::Cmake,
            Some("json") => GenerateFormat::Json,
            Some(other) => bail!(
                "Unknown generate format '{other}' in {} (expected 'cmake' or 'json')",
                config::CONFIG_FILE
            ),
        },
    };

    let out_dir = out
        .or_else(|| {
            config
                .generate
                .as_ref()
                .and_then(|g| g.output.as_ref())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("build"));

    cenv::generate::generate(&pkg, format, &out_dir)
}

fn print_info(config: &EnvConfig, scheme: Option<SchemeArg>) -> Result<()> {
    let pkg = resolve_package(config, scheme)?;

    println!("{} v{}", "cenv".bold().cyan(), env!("CARGO_PKG_VERSION"));
    println!("Package descriptor builder for the cenv/xenv libraries");
    println!("------------------------------------");
    println!("{}: {}", "Root package".bold(), pkg.name.cyan());
    println!(
        "{}: {}",
        "Sub-packages".bold(),
        pkg.packages
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let targets = descriptor::projects_in_dependency_order(&pkg);
    println!("\n{} ({}):", "Targets".bold(), targets.len());
    for target in &targets {
        let kind = match target.kind {
            ProjectKind::Library => "lib".green(),
            ProjectKind::Test => "test".yellow(),
        };
        println!("  {} {} ({})", kind, target.name.bold(), target.path.dimmed());
    }
    Ok(())
}
