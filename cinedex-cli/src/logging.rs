//! Logger setup. All user-facing output goes through the `log` macros.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};

use crate::CliError;

/// Writes to stdout and to a log file, with ANSI escapes removed from the file copy.
struct TeeWriter {
    stdout: io::Stdout,
    file: strip_ansi_escapes::Writer<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        self.file.flush()
    }
}

/// Install the global logger.
///
/// Info lines are printed bare so they read as normal program output;
/// warnings and errors get a prefix. `--verbose` adds debug messages with
/// timestamps, `--quiet` keeps only warnings and errors. `RUST_LOG` overrides both.
pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.format(move |buf, record| {
        if verbose {
            let ts = buf.timestamp();
            write!(buf, "{} ", ts)?;
        }
        match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            Level::Error => writeln!(buf, "error: {}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        }
    });

    match logfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::config(format!("Cannot open log file {}: {}", path.display(), e))
            })?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter {
                stdout: io::stdout(),
                file: strip_ansi_escapes::Writer::new(file),
            })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::config(format!("Logger already initialized: {}", e)))
}
