use anyhow::Result;
use clap::Parser;
use log::{ error, info };

use expression_builder::BuilderConfig;

mod cli;
use cli::{ Commands, ExpressionCli };
use cli::commands::parse_output_format;

fn main() {
    // Parse the command line arguments
    let cli = ExpressionCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &ExpressionCli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            BuilderConfig::from_file(path)?
        }
        None => BuilderConfig::default(),
    };

    let format = parse_output_format(&cli.output_format)?;

    match &cli.command {
        Commands::List { schema, catalog, locale } => {
            cli::commands::list::execute(
                &config,
                schema,
                catalog.as_deref(),
                locale.as_deref(),
                format
            )?;
        }

        Commands::Show { schema, id, catalog, locale } => {
            cli::commands::show::execute(
                &config,
                schema,
                id,
                catalog.as_deref(),
                locale.as_deref(),
                format
            )?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
