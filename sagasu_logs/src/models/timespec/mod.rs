use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};

// Calendar-naive on purpose: a year is always 365 days, a month 30.
const UNITS: [(&str, u64); 7] = [
    ("y", 3600 * 24 * 365),
    ("mo", 3600 * 24 * 30),
    ("w", 3600 * 24 * 7),
    ("d", 3600 * 24),
    ("h", 3600),
    ("m", 60),
    ("s", 1),
];

/// Turns a time token into an absolute instant, anchored on a reference
/// instant captured once per invocation.
///
/// Three token forms are tried in order:
/// - ISO time, `"2020-05-24T12:25:00"`
/// - relative to the reference, `"1h"`, `"1h 30m"`, `"1y 1mo 1w 1d"`
/// - epoch in seconds, `"1590314700"`
#[derive(Debug, Clone)]
pub struct TimeParser {
    today: DateTime<Local>,
}

impl TimeParser {
    pub fn new(today: DateTime<Local>) -> Self {
        Self { today }
    }

    pub fn now() -> Self {
        Self::new(Local::now())
    }

    /// An absent token, or one no strategy recognizes, resolves to the
    /// reference instant. Only a relative token with an unknown unit suffix
    /// is an error; the other strategies fall through silently.
    pub fn parse(&self, token: Option<&str>) -> Result<DateTime<Local>> {
        let token = match token {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => return Ok(self.today),
        };

        if let Some(t) = self.parse_isodatetime(token) {
            return Ok(t);
        }
        if let Some(t) = self.parse_relative(token)? {
            return Ok(t);
        }
        if let Some(t) = self.parse_timestamp(token) {
            return Ok(t);
        }
        Ok(self.today)
    }

    fn parse_isodatetime(&self, token: &str) -> Option<DateTime<Local>> {
        if !(token.contains('-') && token.contains(':')) {
            return None;
        }
        let naive = token.parse::<NaiveDateTime>().ok()?;
        Local.from_local_datetime(&naive).earliest()
    }

    fn parse_relative(&self, token: &str) -> Result<Option<DateTime<Local>>> {
        if !token.chars().any(|c| c.is_ascii_alphabetic()) {
            return Ok(None);
        }
        let mut seconds: i64 = 0;
        for component in token.split_whitespace() {
            seconds = seconds.saturating_add(component_seconds(component)? as i64);
        }
        Ok(Some(self.today - Duration::seconds(seconds)))
    }

    fn parse_timestamp(&self, token: &str) -> Option<DateTime<Local>> {
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let epoch = token.parse::<i64>().ok()?;
        Local.timestamp_opt(epoch, 0).single()
    }
}

// Components are unit-homogeneous: "1h 30m", never "1h30m". The unit table
// is ordered so "mo" wins over "m".
fn component_seconds(component: &str) -> Result<u64> {
    let unit = UNITS.iter().find(|(suffix, _)| component.contains(suffix));
    let unit_seconds = match unit {
        Some((_, unit_seconds)) => *unit_seconds,
        None => bail!("can't parse time token {:?}", component),
    };
    let digits: String = component
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u64>() {
        Ok(magnitude) => magnitude
            .checked_mul(unit_seconds)
            .ok_or_else(|| anyhow::anyhow!("time token {:?} is out of range", component)),
        Err(_) => bail!("can't parse time token {:?}", component),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DateTime<Local> {
        Local.with_ymd_and_hms(2020, 5, 24, 12, 0, 0).unwrap()
    }

    fn parser() -> TimeParser {
        TimeParser::new(reference())
    }

    #[test]
    fn absent_token_resolves_to_the_reference() {
        assert_eq!(parser().parse(None).unwrap(), reference());
        assert_eq!(parser().parse(Some("")).unwrap(), reference());
        assert_eq!(parser().parse(Some("   ")).unwrap(), reference());
    }

    #[test]
    fn iso_token_is_parsed_as_is() {
        let parsed = parser().parse(Some("2020-05-24T12:25:00")).unwrap();
        assert_eq!(parsed, Local.with_ymd_and_hms(2020, 5, 24, 12, 25, 0).unwrap());
    }

    #[test]
    fn digits_only_token_is_an_epoch() {
        let parsed = parser().parse(Some("1590314700")).unwrap();
        assert_eq!(parsed.timestamp(), 1590314700);
    }

    #[test]
    fn relative_token_is_subtracted_from_the_reference() {
        let parsed = parser().parse(Some("1h")).unwrap();
        assert_eq!(parsed, reference() - Duration::seconds(3600));
    }

    #[test]
    fn relative_components_sum_up() {
        let parsed = parser().parse(Some("1h 60m")).unwrap();
        assert_eq!(parsed, reference() - Duration::seconds(7200));
    }

    #[test]
    fn component_order_does_not_matter() {
        let parsed = parser().parse(Some("3600s 60m 1h")).unwrap();
        assert_eq!(parsed, reference() - Duration::seconds(10800));
    }

    #[test]
    fn components_are_repeatable() {
        let parsed = parser().parse(Some("3600s 3600s 3600s")).unwrap();
        assert_eq!(parsed, reference() - Duration::seconds(10800));
    }

    #[test]
    fn every_unit_has_its_fixed_length() {
        let parsed = parser().parse(Some("1y 1mo 1w 1d 1h 1m 1s")).unwrap();
        let expected =
            365 * 86400 + 30 * 86400 + 7 * 86400 + 86400 + 3600 + 60 + 1;
        assert_eq!(parsed, reference() - Duration::seconds(expected));
    }

    #[test]
    fn month_wins_over_minute() {
        let parsed = parser().parse(Some("1mo")).unwrap();
        assert_eq!(parsed, reference() - Duration::seconds(30 * 86400));
    }

    #[test]
    fn unknown_unit_is_an_error_naming_the_token() {
        let err = parser().parse(Some("1x")).unwrap_err();
        assert!(err.to_string().contains("1x"), "{}", err);
    }

    #[test]
    fn unknown_unit_in_a_longer_expression_is_an_error() {
        let err = parser().parse(Some("1h 2x")).unwrap_err();
        assert!(err.to_string().contains("2x"), "{}", err);
    }

    #[test]
    fn unrecognized_token_falls_back_to_the_reference() {
        assert_eq!(parser().parse(Some("???")).unwrap(), reference());
    }
}
