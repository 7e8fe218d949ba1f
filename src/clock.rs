use chrono::{DateTime, Local, TimeZone};

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Formats a time as a zero-padded 12-hour clock reading, e.g. `07:05 PM`
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: ::std::fmt::Display,
{
    time.format("%I:%M %p").to_string()
}
