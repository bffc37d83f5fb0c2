mod config;
mod error;
mod generator;
mod icons;
mod io;
mod render;

use config::Config;
use generator::Generator;
use icons::IconLayout;
use std::io::Write;
use tracing_subscriber::filter::{EnvFilter, ParseError};

const FALLBACK_LOG_LEVEL: &str = "warn";

/// Parses the configured directive, falling back to warnings only
fn log_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LOG_LEVEL), Some(e)),
    }
}

fn setup_logger(directive: &str) -> color_eyre::Result<()> {
    use tracing_subscriber::{fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry};

    let (filter, parse_error) = log_filter(directive);
    Registry::default()
        .with(filter)
        .with(
            layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    if let Some(e) = parse_error {
        tracing::warn!(error = %e, directive, "invalid log_level, using \"{}\"", FALLBACK_LOG_LEVEL);
    }
    Ok(())
}

/// Runs the generator and reports progress to `out`.
///
/// One `Generated <path>` line follows each written file; the closing line is
/// only written once every size succeeded.
fn generate<W: Write>(generator: &Generator, out: &mut W) -> color_eyre::Result<()> {
    let mut progress: std::io::Result<()> = Ok(());
    generator.run(|path| {
        if progress.is_ok() {
            progress = writeln!(out, "Generated {}", path.display());
        }
    })?;
    progress?;

    writeln!(out, "All icons generated successfully!")?;
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    setup_logger(&config.log_level)?;
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    let generator = Generator::new(IconLayout::project(), config.sizes, config.on_failure);
    let mut stdout = std::io::stdout().lock();
    generate(&generator, &mut stdout)
}
