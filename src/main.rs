use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghorg::{GithubOrgClient, client::DEFAULT_API_BASE};
use serde::Serialize;
use tracing::{Level, info};
use url::Url;

/// CLI entrypoint
#[derive(Parser, Debug)]
#[command(
    about = "ghorg looks up a GitHub organization and lists its public repositories, optionally filtered by license.",
    subcommand_required = true
)]
struct Cli {
    /// Sets the logging level
    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Root of the GitHub REST API
    #[arg(long, value_parser, default_value = DEFAULT_API_BASE)]
    api_base: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints an organization's metadata as JSON
    Org {
        /// Organization login, e.g. `google`
        name: String,
    },

    /// Lists an organization's public repositories
    Repos {
        /// Organization login, e.g. `google`
        name: String,

        /// Only list repositories under this license key, e.g. `apache-2.0`
        #[arg(short, long)]
        license: Option<String>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize, Debug)]
struct Listing<'a> {
    org: &'a str,
    license: Option<&'a str>,
    repos: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut sub = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time();

    if cli.log_level >= Level::TRACE {
        sub = sub.with_file(true).with_line_number(true);
    }

    sub.init();

    if let Err(e) = run(cli).await {
        tracing::error!("{e:#}");

        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Org { name } => {
            let client = GithubOrgClient::new(name)?.with_api_base(cli.api_base);
            let org = client.org().await?;

            println!("{}", serde_json::to_string_pretty(org)?);
        }

        Commands::Repos {
            name,
            license,
            json,
        } => {
            let client = GithubOrgClient::new(name)?.with_api_base(cli.api_base);
            let license = license.as_deref();

            let repos = client
                .public_repos(license)
                .await
                .with_context(|| format!("listing repositories of {}", client.org_name()))?;

            info!("{} repositories found", repos.len());

            if json {
                let listing = Listing {
                    org: client.org_name(),
                    license,
                    repos,
                };

                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for repo in repos {
                    println!("{repo}");
                }
            }
        }
    }

    Ok(())
}
