use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// 🍅 A command-line tomato clock: alternating work and break countdowns
/// with desktop notifications.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Length of one work interval in minutes
    #[arg(short = 't', long = "time", value_name = "MINUTES")]
    pub work: Option<u64>,
    /// Length of one break interval in minutes
    #[arg(short = 'b', long = "break", value_name = "MINUTES")]
    pub rest: Option<u64>,
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Maximum logging level the subscriber should use
    #[arg(long, default_value_t = Level::WARN)]
    pub verbosity: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn arguments_parse() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn arguments_defaults() {
        let args = Arguments::try_parse_from(["tomato"]).unwrap();
        assert_eq!(args.work, None);
        assert_eq!(args.rest, None);
        assert_eq!(args.config, None);
        assert_eq!(args.verbosity, Level::WARN);
    }

    #[test]
    fn arguments_work_and_break_overrides() {
        let args = Arguments::try_parse_from(["tomato", "-t", "10"]).unwrap();
        assert_eq!(args.work, Some(10));
        assert_eq!(args.rest, None);

        let args = Arguments::try_parse_from(["tomato", "-b", "3"]).unwrap();
        assert_eq!(args.work, None);
        assert_eq!(args.rest, Some(3));

        let args = Arguments::try_parse_from(["tomato", "-t", "50", "-b", "10"]).unwrap();
        assert_eq!(args.work, Some(50));
        assert_eq!(args.rest, Some(10));
    }

    #[test]
    fn arguments_reject_non_integer_minutes() {
        assert!(Arguments::try_parse_from(["tomato", "-t", "abc"]).is_err());
        assert!(Arguments::try_parse_from(["tomato", "-b", "-3"]).is_err());
    }

    #[test]
    fn arguments_reject_unrecognized_shapes() {
        assert!(Arguments::try_parse_from(["tomato", "10"]).is_err());
        assert!(Arguments::try_parse_from(["tomato", "--frobnicate"]).is_err());
    }
}
