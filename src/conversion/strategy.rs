//! Parse strategies for free-form date input.
//!
//! Every strategy first matches the complete input against an anchored
//! pattern and then builds the value through checked `chrono` constructors.
//! Trailing characters fail the pattern; impossible calendar values (30 February,
//! hour 25, offset beyond ±18:00) fail the constructor.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use regex::{Captures, Regex};

const DATE: &str = r"(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})";
const TIME: &str =
    r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})(?::(?P<second>[0-9]{2})(?:\.(?P<fraction>[0-9]{1,9}))?)?";
const INSTANT_TIME: &str =
    r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})(?:\.(?P<fraction>[0-9]{1,9}))?";
const OFFSET: &str = r"(?P<offset>[Zz]|[+-][0-9]{2}:[0-9]{2}(?::[0-9]{2})?)";

/// Largest offset accepted from input, in seconds.
const MAX_OFFSET_SECS: i32 = 18 * 3600;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{DATE}$")).expect("valid regex"));

static GERMAN_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>[0-9]{1,2})\.(?P<month>[0-9]{1,2})\.(?P<year>[0-9]{4})$")
        .expect("valid regex")
});

static LOCAL_DATE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{DATE}[Tt]{TIME}$")).expect("valid regex"));

static OFFSET_DATE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{DATE}[Tt]{TIME}{OFFSET}$")).expect("valid regex"));

static ZONED_DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{DATE}[Tt]{TIME}{OFFSET}\[(?P<zone>[^\[\]]+)\]$")).expect("valid regex")
});

static ZONE_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{OFFSET}$")).expect("valid regex"));

static INSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DATE}[Tt]{INSTANT_TIME}{OFFSET}$")).expect("valid regex")
});

/// One way of reading a calendar date out of a raw string.
///
/// Strategies are tried in [`ParseStrategy::ORDERED`] order and the first
/// success wins. The order is observable: `2026-02-09` is an ISO date, never a
/// date-time, and an offset date-time with `Z` is read before the instant
/// strategy gets a chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStrategy {
    /// `YYYY-MM-DD`
    IsoDate,
    /// `D.M.YYYY` with one or two digit day and month.
    GermanDate,
    /// `YYYY-MM-DDTHH:MM[:SS[.f]]`
    IsoLocalDateTime,
    /// `YYYY-MM-DDTHH:MM[:SS[.f]]` followed by `Z` or `±HH:MM[:SS]`.
    IsoOffsetDateTime,
    /// Offset date-time followed by a bracketed zone, e.g. `[Europe/Berlin]`.
    IsoZonedDateTime,
    /// `YYYY-MM-DDTHH:MM:SS[.f]` with offset, read as a UTC instant.
    Instant,
}

impl ParseStrategy {
    /// All strategies in priority order.
    pub const ORDERED: [ParseStrategy; 6] = [
        ParseStrategy::IsoDate,
        ParseStrategy::GermanDate,
        ParseStrategy::IsoLocalDateTime,
        ParseStrategy::IsoOffsetDateTime,
        ParseStrategy::IsoZonedDateTime,
        ParseStrategy::Instant,
    ];

    /// Stable identifier used in logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            ParseStrategy::IsoDate => "iso_date",
            ParseStrategy::GermanDate => "german_date",
            ParseStrategy::IsoLocalDateTime => "iso_local_date_time",
            ParseStrategy::IsoOffsetDateTime => "iso_offset_date_time",
            ParseStrategy::IsoZonedDateTime => "iso_zoned_date_time",
            ParseStrategy::Instant => "instant",
        }
    }

    /// Parse the whole input, returning the calendar date it denotes.
    pub fn parse(self, input: &str) -> Option<NaiveDate> {
        match self {
            ParseStrategy::IsoDate => calendar_date(&ISO_DATE.captures(input)?),
            ParseStrategy::GermanDate => calendar_date(&GERMAN_DATE.captures(input)?),
            ParseStrategy::IsoLocalDateTime => {
                local_date_time(&LOCAL_DATE_TIME.captures(input)?).map(|dt| dt.date())
            }
            ParseStrategy::IsoOffsetDateTime => {
                offset_date_time(&OFFSET_DATE_TIME.captures(input)?).map(|dt| dt.date_naive())
            }
            ParseStrategy::IsoZonedDateTime => parse_zoned(input),
            ParseStrategy::Instant => parse_instant(input),
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

fn calendar_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        number(caps, "year")?,
        number(caps, "month")?,
        number(caps, "day")?,
    )
}

/// Fractional seconds as nanoseconds; `5` means 500ms.
fn nanos(caps: &Captures<'_>) -> Option<u32> {
    match caps.name("fraction") {
        Some(m) => format!("{:0<9}", m.as_str()).parse().ok(),
        None => Some(0),
    }
}

fn clock_time(caps: &Captures<'_>) -> Option<NaiveTime> {
    let second = match caps.name("second") {
        Some(_) => number(caps, "second")?,
        None => 0,
    };
    NaiveTime::from_hms_nano_opt(number(caps, "hour")?, number(caps, "minute")?, second, nanos(caps)?)
}

fn local_date_time(caps: &Captures<'_>) -> Option<NaiveDateTime> {
    Some(NaiveDateTime::new(calendar_date(caps)?, clock_time(caps)?))
}

fn offset_date_time(caps: &Captures<'_>) -> Option<DateTime<FixedOffset>> {
    let offset = parse_offset(caps.name("offset")?.as_str())?;
    local_date_time(caps)?.and_local_timezone(offset).single()
}

/// Parse `Z` or `±HH:MM[:SS]`, with exactly two digits per field.
fn parse_offset(text: &str) -> Option<FixedOffset> {
    if !ZONE_OFFSET.is_match(text) {
        return None;
    }
    if text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match *text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };

    let mut parts = rest.split(':');
    let hours: i32 = parts.next()?.parse().ok()?;
    let minutes: i32 = parts.next()?.parse().ok()?;
    let seconds: i32 = match parts.next() {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || minutes > 59 || seconds > 59 {
        return None;
    }

    let total = hours * 3600 + minutes * 60 + seconds;
    if total > MAX_OFFSET_SECS {
        return None;
    }
    FixedOffset::east_opt(sign * total)
}

fn parse_zoned(input: &str) -> Option<NaiveDate> {
    let caps = ZONED_DATE_TIME.captures(input)?;
    let instant = offset_date_time(&caps)?;
    let zone = caps.name("zone")?.as_str();

    if let Ok(tz) = zone.parse::<Tz>() {
        return Some(instant.with_timezone(&tz).date_naive());
    }
    parse_offset(zone).map(|offset| instant.with_timezone(&offset).date_naive())
}

fn parse_instant(input: &str) -> Option<NaiveDate> {
    let caps = INSTANT.captures(input)?;
    let date = calendar_date(&caps)?;
    let nano = nanos(&caps)?;
    let (hour, minute, second): (u32, u32, u32) = (
        number(&caps, "hour")?,
        number(&caps, "minute")?,
        number(&caps, "second")?,
    );

    // End-of-day midnight rolls over; a leap second collapses onto :59.
    let (date, time) = match (hour, minute, second) {
        (24, 0, 0) if nano == 0 => (date.succ_opt()?, NaiveTime::from_hms_opt(0, 0, 0)?),
        (23, 59, 60) => (date, NaiveTime::from_hms_nano_opt(23, 59, 59, nano)?),
        _ => (date, NaiveTime::from_hms_nano_opt(hour, minute, second, nano)?),
    };

    let offset = parse_offset(caps.name("offset")?.as_str())?;
    let instant = NaiveDateTime::new(date, time).and_local_timezone(offset).single()?;
    Some(instant.with_timezone(&Utc).date_naive())
}
