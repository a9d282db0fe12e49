use clap::Parser;
use glossary_translate::{pipeline, AppConfig, CommandLineArgs, ErrorCode};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(level: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("glossary_translate={}", level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match CommandLineArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(ErrorCode::ArgMissing.exit_code() as u8)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config_path = AppConfig::resolve_path();
    let (config, config_error) = match AppConfig::load_or_default(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = init_tracing(&config.logging.level) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    if let Some(e) = config_error {
        tracing::warn!(path = %config_path, error = %e, "Ignoring invalid configuration file");
    }

    match pipeline::run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = %e.code(), "Translation process aborted");
            eprintln!("Error in translation process: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
