use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Progress lines on stderr, suffixed with the elapsed time. Silent unless
/// enabled, so stdout only ever carries codec output.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }
}
