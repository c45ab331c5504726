use anyhow::Result;
use outputcheck::cli::{Cli, Commands};
use outputcheck::config::{Config, CONFIG_FILE_NAME};
use outputcheck::engine;
use tracing_subscriber::EnvFilter;

use clap::Parser;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Check {
            paths,
            format,
            config,
            check_prefix,
            comment_prefix,
            verbose,
        } => {
            let project_root = std::env::current_dir()?;
            let cfg = Config::load(config.as_deref(), &project_root)?
                .with_overrides(check_prefix, comment_prefix);
            let report = engine::run(&paths, &cfg)?;

            let output_format = format.unwrap_or(cfg.format);
            outputcheck::cli::output::render(&report, &project_root, output_format, verbose);

            if report.has_errors() {
                std::process::exit(1);
            }
        }
        Commands::Init => {
            let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
            if path.exists() {
                eprintln!("{CONFIG_FILE_NAME} already exists");
                std::process::exit(1);
            }
            std::fs::write(&path, Config::default_toml())?;
            println!("Created {CONFIG_FILE_NAME}");
        }
        Commands::Explain { kind, check_prefix } => {
            use outputcheck::cli::explain::{explain, list_kinds};
            let cfg = Config::load(None, &std::env::current_dir()?)?
                .with_overrides(check_prefix, None);
            match kind {
                None => println!("{}", list_kinds(&cfg.check_prefix)),
                Some(kind) => match explain(&kind) {
                    Some(text) => println!("{text}"),
                    None => {
                        eprintln!("Unknown directive kind: {kind}\n");
                        eprintln!("{}", list_kinds(&cfg.check_prefix));
                        std::process::exit(1);
                    }
                },
            }
        }
    }

    Ok(())
}
