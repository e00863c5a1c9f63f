//! Hold'em hand-history log parsing and player statistics.
//!
//! Raw log lines are classified into [`parse::Event`]s, folded by a
//! [`table::Reducer`] into one [`table::HandRecord`] per (game, player),
//! and summarized per player by [`stats::Summary`] and [`stats::Fit`].
pub mod parse;
pub mod stats;
pub mod table;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Blinds, stacks, wagers and winnings as written in the log.
pub type Amount = f64;
/// Hand identifier from the `Game ID:` header.
pub type GameID = u64;
/// Frequencies on a 0..=100 scale.
pub type Percent = f64;

// ============================================================================
// STATISTICS PARAMETERS
// ============================================================================
/// Minimum number of hands before a player is profiled.
pub const MIN_HANDS: usize = 25;
/// Hand count in the BBW/100 normalizer.
pub const WINRATE_HANDS: Amount = 100.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Library code only emits through `log`; binaries call this once.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}
