use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rexplode::cli::Cli;
use rexplode::config::ConfigLoader;
use rexplode::driver;

fn init_logging() {
    let filter = EnvFilter::try_from_env("REXPLODE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = match ConfigLoader::new(cwd).resolve(cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("rexplode: config error: {e}");
            return ExitCode::from(2);
        }
    };
    let driver = driver::select(cli.command, &settings);

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let mut err = std::io::stderr();
    let exit_code = driver::run(driver.as_ref(), settings.max_repeat, &mut out, &mut err);

    ExitCode::from(exit_code as u8)
}
