use std::io::Write;
use time::macros::format_description;
use time::OffsetDateTime;

/// Current UTC time formatted the way every console message is stamped.
pub fn timestamp() -> String {
    let format = format_description!("[year].[month].[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc().format(&format).unwrap_or_default()
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("[INFO {} UTC] {}", $crate::logging::timestamp(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        println!("[WARNING {} UTC] {}", $crate::logging::timestamp(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("[ERROR {} UTC] {}", $crate::logging::timestamp(), format!($($arg)*))
    };
}

/// Console progress line, rewritten in place with a carriage return.
///
/// `time_unit` is only used for display (e.g. 86400 seconds to print days).
pub struct ConsoleProgress {
    time_step: f64,
    time_unit: f64,
    time_unit_name: &'static str,
}

impl ConsoleProgress {
    pub fn new(time_step: f64, time_unit: f64, time_unit_name: &'static str) -> ConsoleProgress {
        ConsoleProgress { time_step, time_unit, time_unit_name }
    }

    pub fn report(&self, step: usize, last_step: usize) {
        let current_time = step as f64 * self.time_step / self.time_unit;
        print!("Step {}/{} | Time: {:0.3} {}                    \r", step, last_step, current_time, self.time_unit_name);
        if step == last_step {
            println!();
        }
        let _ = std::io::stdout().flush();
    }
}
