//! The German date conversion service.

use chrono::{Datelike, NaiveDate};

use crate::conversion::error::{ConversionResult, DateFormatError};
use crate::conversion::strategy::ParseStrategy;

/// Output pattern, equivalent to `dd.MM.yyyy`.
pub const GERMAN_DATE_FORMAT: &str = "%d.%m.%Y";

/// Render a date as `DD.MM.YYYY`.
pub fn format_german(date: NaiveDate) -> String {
    date.format(GERMAN_DATE_FORMAT).to_string()
}

/// A successfully parsed input together with the strategy that accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub strategy: ParseStrategy,
    pub date: NaiveDate,
}

impl ParsedDate {
    pub fn to_german(&self) -> String {
        format_german(self.date)
    }
}

/// Converts free-form date strings to German-formatted dates.
///
/// The strategy list is fixed at construction and never mutated, so one
/// instance can be shared by any number of concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct DateConversionService {
    strategies: &'static [ParseStrategy],
}

impl DateConversionService {
    pub fn new() -> Self {
        Self {
            strategies: &ParseStrategy::ORDERED,
        }
    }

    /// The strategies in the order they are tried.
    pub fn strategies(&self) -> &[ParseStrategy] {
        self.strategies
    }

    /// Find the first strategy that accepts `raw`.
    ///
    /// Dates outside years 0000-9999 cannot be written as `yyyy` and count as
    /// a failure of the strategy that produced them.
    pub fn parse(&self, raw: &str) -> ConversionResult<ParsedDate> {
        for &strategy in self.strategies {
            match strategy.parse(raw) {
                Some(date) if (0..=9999).contains(&date.year()) => {
                    tracing::trace!(strategy = %strategy, %date, "Strategy matched");
                    return Ok(ParsedDate { strategy, date });
                }
                _ => continue,
            }
        }

        Err(DateFormatError::new(raw))
    }

    /// Convert `raw` to `DD.MM.YYYY`.
    pub fn to_german_date(&self, raw: &str) -> ConversionResult<String> {
        self.parse(raw).map(|parsed| parsed.to_german())
    }
}

impl Default for DateConversionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(raw: &str) -> ConversionResult<String> {
        DateConversionService::new().to_german_date(raw)
    }

    #[test]
    fn test_example_scenarios() {
        assert_eq!(convert("2026-02-09").unwrap(), "09.02.2026");
        assert_eq!(convert("09.02.2026").unwrap(), "09.02.2026");
        assert_eq!(convert("2026-02-09T15:30:00+01:00").unwrap(), "09.02.2026");
        assert_eq!(convert("2026-02-09T23:30:00Z").unwrap(), "09.02.2026");
    }

    #[test]
    fn test_german_input_is_zero_padded() {
        assert_eq!(convert("1.2.2026").unwrap(), "01.02.2026");
        assert_eq!(convert("1.12.0999").unwrap(), "01.12.0999");
    }

    #[test]
    fn test_time_of_day_is_discarded() {
        assert_eq!(convert("2026-02-09T00:00").unwrap(), "09.02.2026");
        assert_eq!(convert("2026-02-09T23:59:59.999").unwrap(), "09.02.2026");
        assert_eq!(convert("2026-02-09T23:59:59.999-11:00").unwrap(), "09.02.2026");
    }

    #[test]
    fn test_zone_is_applied_before_extracting_date() {
        assert_eq!(
            convert("2026-02-09T23:30:00+00:00[Europe/Berlin]").unwrap(),
            "10.02.2026"
        );
    }

    #[test]
    fn test_unknown_formats_fail_with_input() {
        for raw in ["02/09/2026", "", "   ", "garbage", "2026-02-09 ", "2026/02/09", "9.2.26"] {
            let err = convert(raw).unwrap_err();
            assert_eq!(err.input(), raw);
        }
    }

    #[test]
    fn test_invalid_calendar_values_fail() {
        assert!(convert("2026-02-30").is_err());
        assert!(convert("31.06.2026").is_err());
        assert!(convert("29.02.2025").is_err());
        assert!(convert("2026-13-01T10:00:00").is_err());
    }

    #[test]
    fn test_first_matching_strategy_wins() {
        let service = DateConversionService::new();
        assert_eq!(service.parse("2026-02-09").unwrap().strategy, ParseStrategy::IsoDate);
        assert_eq!(service.parse("9.2.2026").unwrap().strategy, ParseStrategy::GermanDate);
        assert_eq!(
            service.parse("2026-02-09T15:30:00").unwrap().strategy,
            ParseStrategy::IsoLocalDateTime
        );
        // Both the offset and the instant strategy accept this; offset comes first.
        assert_eq!(
            service.parse("2026-02-09T23:30:00Z").unwrap().strategy,
            ParseStrategy::IsoOffsetDateTime
        );
        assert_eq!(
            service.parse("2026-02-09T23:30:00Z[UTC]").unwrap().strategy,
            ParseStrategy::IsoZonedDateTime
        );
    }

    #[test]
    fn test_instant_fallback_reached_for_end_of_day() {
        let parsed = DateConversionService::new().parse("2026-02-09T24:00:00Z").unwrap();
        assert_eq!(parsed.strategy, ParseStrategy::Instant);
        assert_eq!(parsed.to_german(), "10.02.2026");
    }

    #[test]
    fn test_year_overflow_is_rejected() {
        assert!(convert("9999-12-31T24:00:00Z").is_err());
        assert!(convert("0000-01-01T00:30:00+01:00[UTC]").is_err());
        assert_eq!(convert("9999-12-31").unwrap(), "31.12.9999");
    }

    #[test]
    fn test_year_zero_keeps_proleptic_year() {
        assert_eq!(convert("0000-01-01").unwrap(), "01.01.0000");
        assert_eq!(convert("29.2.0000").unwrap(), "29.02.0000");
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let service = DateConversionService::new();
        let first = service.to_german_date("2026-02-09T15:30:00+01:00").unwrap();
        let second = service.to_german_date("2026-02-09T15:30:00+01:00").unwrap();
        assert_eq!(first, second);
        assert_eq!(service.to_german_date(&first).unwrap(), first);
    }

    #[test]
    fn test_strategy_order_is_fixed() {
        assert_eq!(DateConversionService::default().strategies(), &ParseStrategy::ORDERED);
    }
}
