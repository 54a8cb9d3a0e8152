use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// Install the stderr logger.
    ///
    /// `default` is the level used when no `-v` is given:
    /// 0 = off, 1 = error, 2 = warn, 3 = info, 4 = debug, 5+ = trace.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level(level))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

fn log_level(level: u8) -> stderrlog::LogLevelNum {
    match level {
        0 => stderrlog::LogLevelNum::Off,
        1 => stderrlog::LogLevelNum::Error,
        2 => stderrlog::LogLevelNum::Warn,
        3 => stderrlog::LogLevelNum::Info,
        4 => stderrlog::LogLevelNum::Debug,
        _ => stderrlog::LogLevelNum::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert!(matches!(log_level(0), stderrlog::LogLevelNum::Off));
        assert!(matches!(log_level(2), stderrlog::LogLevelNum::Warn));
        assert!(matches!(log_level(4), stderrlog::LogLevelNum::Debug));
        assert!(matches!(log_level(9), stderrlog::LogLevelNum::Trace));
    }
}
