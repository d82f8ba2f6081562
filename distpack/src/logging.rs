use clap_verbosity_flag::{InfoLevel, Verbosity};

/// Initialize the global logger at the level selected by `-v`/`-q`.
///
/// Logs go to stderr so tool output stays clean.
pub fn init(verbose: &Verbosity<InfoLevel>) {
  env_logger::Builder::new()
    .filter_level(verbose.log_level_filter())
    .format_timestamp(None)
    .init();
}
