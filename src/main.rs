use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use tower_http::services::ServeDir;

use gigboard::config::Config;
use gigboard::{build_router, connect, DatabaseState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
    {
        eprintln!("Could not initialise logging: {}", err);
        return ExitCode::FAILURE;
    }

    info!("Configuration path: {}", args.config);
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let connection = match connect(&config.database_url, config.max_connections).await {
        Ok(connection) => connection,
        Err(err) => {
            error!("Error connecting to database: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("Running database migrations");
    if let Err(err) = Migrator::up(&connection, None).await {
        error!("Error running migrations: {}", err);
        return ExitCode::FAILURE;
    }

    let state = DatabaseState { connection };
    let app = build_router(state).nest_service("/static", ServeDir::new(&config.static_dir));

    let address = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Could not bind {}: {}", address, err);
            return ExitCode::FAILURE;
        }
    };
    info!("Listening on {}", address);
    info!("Welcome to Gigboard!");

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
