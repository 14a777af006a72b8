//! Progress reporting for daemon transfers.

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for a request whose size is unknown up front
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Byte counter for a streaming transfer with no known total
pub fn byte_counter(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {bytes}")
            .unwrap(),
    );
    bar.set_message(message.to_string());
    bar
}
