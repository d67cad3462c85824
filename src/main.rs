use dbh::cli::commands::{CliArgs, Commands};
use dbh::cli::handlers::{handle_inspect, handle_register, handle_rewrite, EXIT_CONFIG_ERROR};
use dbh::util::logging::{init_logging, parse_level, LoggingConfig};
use dbh::{DbhConfig, VERSION};

use clap::Parser;
use tracing::{debug, error, Level};

fn main() {
    let args = CliArgs::parse();

    let config = match DbhConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            init_logging(logging_config(&args, &DbhConfig::default()));
            error!("Configuration error: {}", e);
            eprintln!("\nPlease check your DBH_* environment variables.");
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };
    init_logging(logging_config(&args, &config));

    debug!("dbh v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Rewrite(rewrite_args) => handle_rewrite(rewrite_args, &config, args.quiet),
        Commands::Inspect(inspect_args) => handle_inspect(inspect_args, &config, args.quiet),
        Commands::Register(register_args) => handle_register(register_args, args.quiet),
    };

    std::process::exit(exit_code);
}

/// Command-line flags win over `DBH_LOG_LEVEL`.
fn logging_config(args: &CliArgs, config: &DbhConfig) -> LoggingConfig {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    LoggingConfig {
        level,
        ..LoggingConfig::from_config(config)
    }
}
