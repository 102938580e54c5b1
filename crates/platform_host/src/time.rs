//! Clock helpers shared by the taskbar and the mobile lock screen.

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock reading.
pub struct ClockReading {
    /// Four-digit year.
    pub year: u32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Day of week, 0 = Sunday.
    pub weekday: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl ClockReading {
    /// `3:07 PM` style time.
    pub fn time_12h(&self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            other => other,
        };
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        format!("{}:{:02} {}", hour, self.minute, suffix)
    }

    /// `5/12/2024` style short date.
    pub fn short_date(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }

    /// `Sunday, May 12` style long date.
    pub fn long_date(&self) -> String {
        let weekday = WEEKDAYS[(self.weekday % 7) as usize];
        let month = MONTHS[(self.month.clamp(1, 12) - 1) as usize];
        format!("{weekday}, {month} {}", self.day)
    }
}

/// Reads the local wall clock.
///
/// Off the browser this returns the unix epoch so pure tests stay deterministic.
pub fn local_clock_now() -> ClockReading {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        ClockReading {
            year: date.get_full_year(),
            month: date.get_month() + 1,
            day: date.get_date(),
            weekday: date.get_day(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ClockReading {
            year: 1970,
            month: 1,
            day: 1,
            weekday: 4,
            hour: 0,
            minute: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(hour: u32, minute: u32) -> ClockReading {
        ClockReading {
            year: 2024,
            month: 5,
            day: 12,
            weekday: 0,
            hour,
            minute,
        }
    }

    #[test]
    fn twelve_hour_format_handles_midnight_and_noon() {
        assert_eq!(reading(0, 5).time_12h(), "12:05 AM");
        assert_eq!(reading(12, 0).time_12h(), "12:00 PM");
        assert_eq!(reading(15, 7).time_12h(), "3:07 PM");
    }

    #[test]
    fn date_formats() {
        assert_eq!(reading(9, 0).short_date(), "5/12/2024");
        assert_eq!(reading(9, 0).long_date(), "Sunday, May 12");
    }
}
