use chrono::{DateTime, Local, TimeZone};

use crate::clock::Clock;

pub fn epsilon_eq(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = a - b;
    diff < epsilon && diff > -epsilon
}

pub struct FixedClock {
    time: DateTime<Local>,
}

impl FixedClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        Self {
            time: Local
                .with_ymd_and_hms(2019, 3, 14, hour, minute, 0)
                .unwrap(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.time
    }
}
