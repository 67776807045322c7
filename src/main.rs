use anyhow::Result;
use clap::Parser;

use route_planner::api;

#[derive(Parser)]
#[clap(version, author = "Route Planner Contributors")]
enum Cli {
    /// Start the route planner HTTP service
    Serve {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Compute a single shortest route and print it as JSON
    Route {
        #[clap(short, long)]
        from: String,
        #[clap(short, long)]
        to: String,
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Print shortest routes between every pair of nodes
    AllPaths {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Serve { config } => api::start_service(config).await?,
        Cli::Route { from, to, config } => api::execute_route(&config, &from, &to)?,
        Cli::AllPaths { config } => api::execute_all_paths(&config)?,
    }

    Ok(())
}
