//! cloneable-apps - list installed apps eligible for cloning
//!
//! Reads a package inventory dump and prints the apps a user profile may
//! clone.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cloneable_apps::adapters::presenters::{CloneablePresenter, OutputFormat};
use cloneable_apps::infrastructure::{CompositionConfig, CompositionRoot};
use cloneable_apps::log;
use cloneable_apps::shared::Config;
use cloneable_apps::UserId;

#[derive(Parser, Debug)]
#[command(name = "cloneable-apps", version, about)]
struct Cli {
    /// Package inventory JSON file
    #[arg(short, long, value_name = "FILE")]
    inventory: Option<PathBuf>,

    /// Configuration file (default: discovered config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// User profile id
    #[arg(short, long)]
    user: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Names)]
    format: OutputFormat,

    /// Extra package to treat as allow-listed (repeatable)
    #[arg(short, long = "allow", value_name = "PKG")]
    allow: Vec<String>,
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = Config::load(cli.config.as_deref())?;
    log!("Config loaded: {:?}", config);

    let root = CompositionRoot::build(
        config,
        CompositionConfig {
            inventory: cli.inventory,
            user: cli.user.map(UserId::from),
            extra_allowed: cli.allow,
        },
    )?;

    let apps = root.service.execute(root.user)?;

    let mut presenter = CloneablePresenter::new(cli.format);
    presenter.present_apps(&apps);
    Ok(presenter.render()?)
}

fn main() -> ExitCode {
    log::init();
    log!("main() starting");

    match run(Cli::parse()) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log!("Failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
