//! glogcheck self-test: writes one line per level, then runs a series of
//! failing checks through both the method and the macro forms.

use std::path::PathBuf;

use clap::Parser;
use glogcheck::{CheckResult, Level, Logger, LoggerConfig};

#[derive(Parser)]
#[command(name = "glogcheck", version = env!("CARGO_PKG_VERSION"), about = "glog-style checks with a colorized console logger")]
struct Cli {
    /// TOML logger config (level, colors, source_roots)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum level: debug, info, warning, error, critical
    #[arg(short, long)]
    level: Option<Level>,

    /// Disable ANSI colors
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Print the effective config as TOML and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glogcheck=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = cli
        .config
        .as_deref()
        .map(LoggerConfig::load)
        .unwrap_or_default()
        .with_env_overrides();
    if let Some(level) = cli.level {
        config.level = level;
    }
    if cli.no_color {
        config.colors = false;
    }

    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let log = glogcheck::init(config)?;
    let failed = run_demo(log);
    log.info(format!("self-test done: {} checks failed as expected", failed));
    Ok(())
}

fn run_demo(log: &Logger) -> usize {
    log.info("this is log info");
    log.warning("this is log warning");
    log.error("this is log error");
    log.debug("this is log debug");

    let a = 1;
    let b = 2;
    let outcomes: Vec<CheckResult> = vec![
        log.check(a == b),
        log.check_msg(a == b, "this is log check"),
        log.check_eq(a, b),
        log.check_eq_msg(a, b, "this is log check_eq"),
        log.check_ne_msg(a + 1, b, "this is log check_ne"),
        log.check_ge_msg(a, b, "this is log check_ge"),
        log.check_le_msg(a + 2, b, "this is log check_le"),
        log.check_gt_msg(a, b, "this is log check_gt"),
        log.check_lt_msg(a + 1, b, "this is log check_lt"),
        glogcheck::check!(log => a == b, "macro check"),
        glogcheck::check_eq!(log => a, b),
        glogcheck::check_le!(log => a + 2, b, "macro check_le with {}", "args"),
        Err(glogcheck::fatal!(log => "this is log fatal")),
    ];

    outcomes.iter().filter(|r| r.is_err()).count()
}
