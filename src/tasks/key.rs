use std::fmt;
use time::{
    format_description::FormatItem, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Anything that falls on a single calendar day
pub(crate) trait CalendarDate {
    fn calendar_date(&self) -> Date;
}

impl CalendarDate for Date {
    fn calendar_date(&self) -> Date {
        *self
    }
}

impl CalendarDate for PrimitiveDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

impl CalendarDate for OffsetDateTime {
    fn calendar_date(&self) -> Date {
        self.date()
    }
}

/// Canonical `YYYY-MM-DD` name of a calendar day, used to file tasks
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct DayKey(String);

impl DayKey {
    /// The time of day and UTC offset, if any, never affect the key.
    pub(crate) fn for_date<D: CalendarDate + ?Sized>(date: &D) -> DayKey {
        let date = date.calendar_date();
        DayKey(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        ))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &YMD_FMT)
}
