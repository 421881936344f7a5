use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start the terminal spinner shown while the crt.sh request is in flight.
///
/// Purely cosmetic: it ticks on indicatif's own background thread, shares no
/// state with the pipeline, and is simply cleared once results are written.
pub fn start_spinner(domain: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            // indicatif treats the last entry as the finished frame; the
            // spinner is cleared on finish so a blank is fine there.
            .tick_chars(r"-\|/ ")
            .template("{spinner} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(format!("Scanning for domain: {domain}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
