use clap::Parser;
use log::info;
use std::path::PathBuf;

use taglog::{LevelSpec, Logger, LoggerOptions, Target};

/// Print one sample line at every severity
#[derive(Parser, Debug)]
#[command(name = "taglog", version)]
struct Args {
    /// Minimum level: a rank from 0 to 4 or TRACE/DEBUG/INFO/WARN/ERROR
    #[arg(short, long)]
    level: Option<LevelSpec>,

    /// Locale for timestamps, e.g. ja-JP or en-US
    #[arg(long)]
    locale: Option<String>,

    /// Output styling
    #[arg(short, long, value_enum)]
    target: Option<Target>,

    /// YAML file with logger options; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> taglog::Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();

    let mut options = match &args.config {
        Some(path) => LoggerOptions::load(path)?,
        None => LoggerOptions::default(),
    };
    if let Some(level) = args.level {
        options.level = level;
    }
    if let Some(locale) = args.locale {
        options.locale = locale;
    }
    if let Some(target) = args.target {
        options.target = target;
    }

    let log = Logger::new(options)?;
    info!("Sample run at minimum level {}", log.minimum_level());

    log.trace(&[&"trace log"]);
    log.debug(&[&"debug log"]);
    match log.target() {
        Target::BrowserConsole => log.info(&[&"%c[sample]", &"#f00", &"%cinfo log", &"inherit"]),
        Target::Terminal => log.info(&[&"info log"]),
    }
    log.warn(&[&"warn log"]);
    log.error(&[&"error log"]);

    Ok(())
}
