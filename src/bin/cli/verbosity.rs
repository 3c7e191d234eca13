use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(clap::Args, Debug)]
pub struct Verbosity {
    /// Increase verbosity of the output
    ///
    /// The verbosity only apply to the logging of the crate,
    /// logging from other crates is never shown.
    #[arg(short, long, help_heading = "Verbosity", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reduce verbosity of the output
    #[arg(short, long, help_heading = "Verbosity", action = clap::ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl Verbosity {
    pub(crate) fn configure(&self) -> Result<(), SetLoggerError> {
        #[cfg(debug_assertions)]
        let location_level = LevelFilter::Error;
        #[cfg(not(debug_assertions))]
        let location_level = LevelFilter::Off;

        let config = ConfigBuilder::new()
            .add_filter_allow_str("undolist")
            .set_location_level(location_level)
            .set_time_level(LevelFilter::Off)
            .build();
        TermLogger::init(self.into(), config, TerminalMode::Stderr, ColorChoice::Auto)
    }
}

impl From<&Verbosity> for LevelFilter {
    fn from(val: &Verbosity) -> Self {
        match val.verbose as i16 - val.quiet as i16 {
            ..=-2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            3.. => LevelFilter::Trace,
        }
    }
}
