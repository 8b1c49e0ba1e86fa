//! Progress reporting for swarm runs

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use swarm_domain::StreamEvent;

/// Renders a live event stream: status lines drive a spinner, everything
/// else is printed above it.
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// `quiet` disables the spinner; results are still printed.
    pub fn new(quiet: bool) -> Self {
        let spinner = (!quiet).then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn on_event(&self, event: &StreamEvent) {
        if let StreamEvent::Status { message } = event {
            match &self.spinner {
                Some(pb) => pb.set_message(message.clone()),
                None => println!("{}", message),
            }
            return;
        }

        if let Some(text) = ConsoleFormatter::format_event(event) {
            self.print(&text);
        }
        if event.is_terminal() {
            self.finish();
        }
    }

    fn print(&self, text: &str) {
        match &self.spinner {
            Some(pb) => pb.suspend(|| println!("{}", text)),
            None => println!("{}", text),
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.spinner {
            pb.finish_and_clear();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
