pub mod apply;
pub mod config;

use std::process::ExitCode;

use config::AppConfig;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to parse config: {0}")]
    Config(#[from] config_rs::ConfigError),
    #[error(transparent)]
    Device(#[from] pca9685_core::Error<pca9685_rpi::RpiError>),
    #[error("failed to print device state: {0}")]
    Report(#[from] serde_json::Error),
}

fn run(cfg_name: &str) -> Result<(), AppError> {
    let config = AppConfig::load(cfg_name)?;

    info!("PCA9685 starting up!");
    if let Some(ref name) = config.metadata.name {
        info!("name: {name}")
    }
    if let Some(ref descrip) = config.metadata.description {
        info!("description: {descrip}")
    }

    let mut device = pca9685_rpi::open(config.device.i2c_address, config.device.bus)?;
    apply::apply(&mut device, &config.device)?;
    let snapshot = apply::snapshot(&mut device, &config.device)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pca9685=info,pca9685_core=info,pca9685_rpi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        warn!("only one parameter, the config file, is expected.");
        warn!("got {}", args.join(","));
        return ExitCode::FAILURE;
    }

    match run(&args[1]) {
        Ok(()) => {
            info!("PCA9685 configured!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("PCA9685 exited with an error: {}", err);
            ExitCode::FAILURE
        }
    }
}
