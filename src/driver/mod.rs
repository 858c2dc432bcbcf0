//! Command-line modes: each one compiles its pattern and writes results.

mod error;
mod modes;

pub use error::*;
pub use modes::*;

use std::io::Write;

use crate::builder::compile;
use crate::cli::Commands;
use crate::config::Settings;
use crate::sequence::Sequence;

/// One output mode of the command line.
pub trait Driver {
    /// The pattern to compile.
    fn pattern(&self) -> &str;

    /// Write this mode's output for an already compiled sequence.
    fn emit(&self, sequence: &mut Sequence, out: &mut dyn Write) -> Result<(), DriverError>;
}

/// Build the driver for a parsed subcommand. Options shared with the config
/// files come from the resolved `settings`.
pub fn select(command: Commands, settings: &Settings) -> Box<dyn Driver> {
    match command {
        Commands::All(args) => {
            tracing::debug!(limit = ?settings.limit, "mode: all");
            Box::new(AllDriver::new(args.pattern, settings.limit))
        }
        Commands::Count(args) => {
            tracing::debug!("mode: count");
            Box::new(CountDriver::new(args.pattern))
        }
        Commands::Random(args) => {
            tracing::debug!(samples = args.samples, seed = ?settings.seed, "mode: random");
            Box::new(RandomDriver::new(args.pattern, args.samples, settings.seed))
        }
        Commands::Index(args) => {
            tracing::debug!(positions = args.indices.len(), "mode: index");
            Box::new(IndexDriver::new(args.pattern, args.indices))
        }
    }
}

/// Compile the driver's pattern and emit its output.
///
/// Errors are reported on `err` prefixed with the program name. Returns the
/// process exit code: 0 on success, 1 when the language cannot satisfy the
/// request, 2 when the pattern is invalid. A closed output pipe ends the run
/// quietly.
pub fn run(driver: &dyn Driver, max_repeat: u32, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match execute(driver, max_repeat, out) {
        Ok(()) => 0,
        Err(DriverError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            tracing::debug!("output closed early");
            0
        }
        Err(e) => {
            let _ = writeln!(err, "rexplode: {e}");
            e.exit_code()
        }
    }
}

fn execute(driver: &dyn Driver, max_repeat: u32, out: &mut dyn Write) -> Result<(), DriverError> {
    let mut sequence = compile(driver.pattern(), max_repeat)?;
    driver.emit(&mut sequence, out)?;
    out.flush()?;
    Ok(())
}
