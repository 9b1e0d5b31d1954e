pub mod board;
#[cfg(feature = "console")]
pub mod console;
pub mod engine;
pub mod moves;
#[cfg(feature = "server")]
pub mod server;
pub mod session;
pub mod training;

/// index into a variant's move table; the action space shared with the
/// native engine
pub type Action = i64;

/// terminal logging for the binaries
#[cfg(feature = "console")]
pub fn log() {
    use simplelog::ColorChoice;
    use simplelog::Config;
    use simplelog::LevelFilter;
    use simplelog::TermLogger;
    use simplelog::TerminalMode;
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger");
}
