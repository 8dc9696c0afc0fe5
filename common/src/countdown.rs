use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

// period of the countdown tick, in milliseconds
pub const TICK_MS: u32 = 1_000;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

// decorative countdown shown next to limited releases
//
// it only ever counts down and parks at zero; nothing is wired to the end of the countdown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Countdown {
    pub days: u32,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Countdown {
    pub fn validate(&self) -> Result<()> {
        if self.hours > 23 {
            bail!("countdown hours must be within 0-23, got {}", self.hours);
        }
        if self.minutes > 59 {
            bail!("countdown minutes must be within 0-59, got {}", self.minutes);
        }
        if self.seconds > 59 {
            bail!("countdown seconds must be within 0-59, got {}", self.seconds);
        }
        Ok(())
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.days) * SECS_PER_DAY
            + u64::from(self.hours) * SECS_PER_HOUR
            + u64::from(self.minutes) * SECS_PER_MINUTE
            + u64::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    // one second less, borrowing seconds <- minutes <- hours <- days; zero stays zero
    pub fn tick(self) -> Self {
        let mut next = self;

        if next.seconds > 0 {
            next.seconds -= 1;
        } else if next.minutes > 0 {
            next.minutes -= 1;
            next.seconds = 59;
        } else if next.hours > 0 {
            next.hours -= 1;
            next.minutes = 59;
            next.seconds = 59;
        } else if next.days > 0 {
            next.days -= 1;
            next.hours = 23;
            next.minutes = 59;
            next.seconds = 59;
        }

        next
    }

    // (value, label) pairs in display order
    pub fn segments(&self) -> [(u32, &'static str); 4] {
        [
            (self.days, "Days"),
            (u32::from(self.hours), "Hours"),
            (u32::from(self.minutes), "Minutes"),
            (u32::from(self.seconds), "Seconds"),
        ]
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw(days: u32, hours: u8, minutes: u8, seconds: u8) -> Countdown {
        Countdown {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    fn cd(days: u32, hours: u8, minutes: u8, seconds: u8) -> Countdown {
        let countdown = raw(days, hours, minutes, seconds);
        countdown.validate().unwrap();
        countdown
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(cd(0, 0, 0, 0).tick(), cd(0, 0, 0, 0));
        assert!(cd(0, 0, 0, 0).tick().is_zero());
    }

    #[test]
    fn seconds_borrow_from_minutes() {
        assert_eq!(cd(0, 0, 1, 0).tick(), cd(0, 0, 0, 59));
    }

    #[test]
    fn minutes_borrow_from_hours() {
        assert_eq!(cd(0, 1, 0, 0).tick(), cd(0, 0, 59, 59));
    }

    #[test]
    fn hours_borrow_from_days() {
        assert_eq!(cd(1, 0, 0, 0).tick(), cd(0, 23, 59, 59));
    }

    #[test]
    fn plain_second_decrement() {
        assert_eq!(cd(2, 14, 37, 22).tick(), cd(2, 14, 37, 21));
    }

    #[test]
    fn each_tick_removes_exactly_one_second_until_zero() {
        let mut current = cd(0, 1, 1, 3);
        let mut previous = current.total_seconds();

        for _ in 0..4000 {
            current = current.tick();
            current.validate().unwrap();

            let total = current.total_seconds();
            if previous == 0 {
                assert_eq!(total, 0);
            } else {
                assert_eq!(total, previous - 1);
            }
            previous = total;
        }

        assert!(current.is_zero());
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(raw(0, 24, 0, 0).validate().is_err());
        assert!(raw(0, 0, 60, 0).validate().is_err());
        assert!(raw(0, 0, 0, 60).validate().is_err());
        assert!(raw(400, 23, 59, 59).validate().is_ok());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(cd(2, 4, 7, 9).to_string(), "02:04:07:09");
    }
}
