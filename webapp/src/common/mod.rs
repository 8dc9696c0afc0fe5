pub mod listener;
pub mod scroll;
pub mod style;

use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}
