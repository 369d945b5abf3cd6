use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use subvert::artifacts::settings::{SvnSettings, TUNNELS_SECTION};
use subvert::artifacts::url;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "subvert",
    version = "0.1.0",
    about = "A Subversion provider toolbox",
    long_about = "Validates Subversion repository urls the way the provider does before \
    handing them to the svn client, and inspects the tunnel schemes configured in the \
    subversion client configuration.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Override the subversion configuration directory"
    )]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "validate",
        about = "Validate a repository url",
        long_about = "This command classifies a repository url by scheme and reports every \
        validation message, exactly as the provider would before constructing a repository \
        reference."
    )]
    Validate {
        #[arg(index = 1, help = "The repository url to validate")]
        url: String,
    },
    #[command(
        name = "tunnels",
        about = "List the tunnel schemes configured for the svn client"
    )]
    Tunnels,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = SvnSettings::new(cli.config_dir.clone());

    match &cli.command {
        Commands::Validate { url: location } => {
            let outcome = url::parse_url(location, &settings);

            match outcome.repository() {
                Some(repository) => {
                    println!(
                        "{} {} ({})",
                        "valid".green(),
                        repository.url(),
                        repository.scheme()
                    );
                }
                None => {
                    for message in outcome.messages() {
                        eprintln!("{} {}", "invalid".red(), message);
                    }
                    std::process::exit(1);
                }
            }
        }
        Commands::Tunnels => {
            let tunnels = settings.section(TUNNELS_SECTION);

            if tunnels.is_empty() {
                println!("no tunnels configured");
            } else {
                for (name, value) in &tunnels {
                    println!("svn+{} = {}", name, value);
                }
            }
        }
    }

    Ok(())
}
