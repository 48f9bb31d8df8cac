use anyhow::{bail, Result};
use gameshelf::config::Config;
use gameshelf::logger::Logger;
use gameshelf::ui;
use std::path::PathBuf;

enum Command {
    Run { config_path: Option<PathBuf> },
    GenerateConfig { path: Option<PathBuf> },
}

fn parse_args() -> Result<Command> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                return Ok(Command::GenerateConfig {
                    path: args.next().map(PathBuf::from),
                })
            }
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => bail!("--config needs a file path"),
            },
            other => bail!("Unknown argument: {}\nUsage: gameshelf [--config <path>] [--generate-config [path]]", other),
        }
    }

    Ok(Command::Run { config_path })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match parse_args()? {
        Command::GenerateConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(&path);
        }
        Command::Run { config_path: Some(path) } => Config::load_from_file(&path)?,
        Command::Run { config_path: None } => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter()?)?;
    if logger.has_file_writer() {
        log::info!("Logging to {}", Logger::get_log_file_path()?.display());
    }

    ui::run_app(&config, logger).await
}
