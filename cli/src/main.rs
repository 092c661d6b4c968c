//! Tienda CLI - terminal client for the Tienda back office
//!
//! # Usage
//!
//! ```bash
//! # Log in against the default deployment
//! tienda -u http://localhost:3001/api login --email admin@example.com --password secret
//!
//! # List active widgets as JSON
//! tienda --json products list --name Widget --active true
//!
//! # Clock an employee in
//! tienda attendance in u42
//! ```

use clap::Parser;

use tienda_cli::{CliConfig, OutputFormat, OutputFormatter, Result};

mod args;
mod commands;
mod connect;

use args::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let config = CliConfig::load(&cli.config)?;
    let fmt = OutputFormatter::new(resolve_format(&cli, &config));
    let client = connect::create_client(&cli, &config)?;

    match &cli.command {
        Command::Login { email, password } => {
            commands::auth::login(&client, &fmt, email, password).await
        }
        Command::Logout => commands::auth::logout(&client, &fmt).await,
        Command::Whoami => commands::auth::whoami(&client, &fmt).await,
        Command::Register {
            email,
            password,
            name,
            role,
        } => commands::auth::register(&client, &fmt, email, password, name, role.as_deref()).await,
        Command::Products(cmd) => commands::products::handle(&client, &fmt, cmd).await,
        Command::Stock(cmd) => commands::stock::handle(&client, &fmt, cmd).await,
        Command::Orders(cmd) => commands::orders::handle(&client, &fmt, cmd).await,
        Command::Users(cmd) => commands::users::handle(&client, &fmt, cmd).await,
        Command::Attendance(cmd) => commands::attendance::handle(&client, &fmt, cmd).await,
        Command::Reports(cmd) => commands::reports::handle(&client, &fmt, cmd).await,
    }
}

/// Explicit flags beat the config file's `[ui] format`.
fn resolve_format(cli: &Cli, config: &CliConfig) -> OutputFormat {
    if cli.json {
        return OutputFormat::Json;
    }
    if let Some(format) = cli.format {
        return format;
    }
    match config.resolved_ui().format.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    }
}
