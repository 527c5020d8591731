use log::{LevelFilter, SetLoggerError};

pub const LOG_TARGET: &str = "upoly";

// Terminal logger that only lets through records from this crate, tagged
// with the emitting module (`upoly::types::poly`).
pub fn init_logger(l: LevelFilter) -> Result<(), SetLoggerError> {
    use simplelog::*;

    let config = ConfigBuilder::new()
        .add_filter_allow_str(LOG_TARGET)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .build();

    TermLogger::init(l, config, TerminalMode::Stderr, ColorChoice::Auto)
}
