//! Conversions between [`DateValue`] and text.
//!
//! Display patterns are templates built from the tokens `yyyy`, `mmm`, `mm`,
//! `m`, `dd` and `d`; every other character is copied verbatim. Parsing is
//! the inverse of formatting and additionally enforces a [`ConstraintSet`],
//! returning the sentinel instead of an error for anything unusable.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{
    ConstraintSet, DEFAULT_DAY_LABELS, DEFAULT_MONTH_LABELS, DateError, DateValue, Month, Weekday,
    Year, YearMonth,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year,
    MonthName,
    MonthPadded,
    Month,
    DayPadded,
    Day,
    Literal(String),
}

impl Token {
    const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Year | Self::MonthPadded | Self::Month | Self::DayPadded | Self::Day
        )
    }
}

/// A compiled display pattern such as `dd.mm.yyyy` or `d mmm yyyy`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{source}")]
#[serde(from = "String", into = "String")]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
}

impl DatePattern {
    pub fn new(pattern: &str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = pattern;
        while let Some(ch) = rest.chars().next() {
            let (token, len) = if rest.starts_with("yyyy") {
                (Token::Year, 4)
            } else if rest.starts_with("mmm") {
                (Token::MonthName, 3)
            } else if rest.starts_with("mm") {
                (Token::MonthPadded, 2)
            } else if rest.starts_with('m') {
                (Token::Month, 1)
            } else if rest.starts_with("dd") {
                (Token::DayPadded, 2)
            } else if rest.starts_with('d') {
                (Token::Day, 1)
            } else {
                if let Some(Token::Literal(literal)) = tokens.last_mut() {
                    literal.push(ch);
                } else {
                    tokens.push(Token::Literal(ch.to_string()));
                }
                rest = &rest[ch.len_utf8()..];
                continue;
            };
            tokens.push(token);
            rest = &rest[len..];
        }

        Self {
            source: pattern.to_owned(),
            tokens,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern has a year, a month and a day token, i.e. whether
    /// text in this pattern can be parsed back into a full date.
    ///
    /// An unpadded `m` or `d` directly followed by another numeric token is
    /// rejected: `1112024` has no single reading under `dmyyyy`.
    pub fn is_complete(&self) -> bool {
        let has = |wanted: &[Token]| self.tokens.iter().any(|t| wanted.contains(t));
        let ambiguous = self.tokens.windows(2).any(|pair| {
            matches!(pair[0], Token::Month | Token::Day) && pair[1].is_numeric()
        });
        has(&[Token::Year])
            && has(&[Token::MonthName, Token::MonthPadded, Token::Month])
            && has(&[Token::DayPadded, Token::Day])
            && !ambiguous
    }

    /// Whether the month is spelled with a label rather than a number
    pub fn uses_month_name(&self) -> bool {
        self.tokens.contains(&Token::MonthName)
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::new(crate::DEFAULT_DATE_FORMAT)
    }
}

impl From<&str> for DatePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for DatePattern {
    fn from(pattern: String) -> Self {
        Self::new(&pattern)
    }
}

impl From<DatePattern> for String {
    fn from(pattern: DatePattern) -> Self {
        pattern.source
    }
}

/// Month names, January first. Hosts supply them as `{ "1": "Jan", ... }`;
/// missing keys keep the English default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u8, String>", into = "BTreeMap<u8, String>")]
pub struct MonthLabels([String; 12]);

impl MonthLabels {
    pub const fn new(labels: [String; 12]) -> Self {
        Self(labels)
    }

    pub fn get(&self, month: Month) -> &str {
        &self.0[month.index()]
    }

    /// Case-insensitive exact match
    pub fn find(&self, text: &str) -> Option<Month> {
        let wanted = text.to_lowercase();
        (1..=12)
            .filter_map(|m| Month::new(m).ok())
            .find(|&month| !self.get(month).is_empty() && self.get(month).to_lowercase() == wanted)
    }

    /// Longest label that prefixes `text`, with the byte length it spans
    fn match_prefix(&self, text: &str) -> Option<(Month, usize)> {
        let mut best: Option<(Month, usize, usize)> = None;
        for m in 1..=12 {
            let Ok(month) = Month::new(m) else { continue };
            let label = self.get(month);
            let chars = label.chars().count();
            if chars == 0 || best.is_some_and(|(_, best_chars, _)| best_chars >= chars) {
                continue;
            }
            let end = text
                .char_indices()
                .nth(chars)
                .map_or(text.len(), |(idx, _)| idx);
            if text.chars().count() >= chars && text[..end].to_lowercase() == label.to_lowercase() {
                best = Some((month, chars, end));
            }
        }
        best.map(|(month, _, end)| (month, end))
    }
}

impl Default for MonthLabels {
    fn default() -> Self {
        Self(DEFAULT_MONTH_LABELS.map(str::to_owned))
    }
}

impl TryFrom<BTreeMap<u8, String>> for MonthLabels {
    type Error = DateError;

    fn try_from(map: BTreeMap<u8, String>) -> Result<Self, Self::Error> {
        let mut labels = Self::default();
        for (key, label) in map {
            labels.0[Month::new(key)?.index()] = label;
        }
        Ok(labels)
    }
}

impl From<MonthLabels> for BTreeMap<u8, String> {
    fn from(labels: MonthLabels) -> Self {
        (1..=12).zip(labels.0).collect()
    }
}

/// Weekday names keyed by token. Hosts supply them as `{ "su": "Sun", ... }`;
/// missing keys keep the English default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct DayLabels([String; 7]);

impl DayLabels {
    pub const fn new(labels: [String; 7]) -> Self {
        Self(labels)
    }

    pub fn get(&self, day: Weekday) -> &str {
        &self.0[day.index()]
    }
}

impl Default for DayLabels {
    fn default() -> Self {
        Self(DEFAULT_DAY_LABELS.map(str::to_owned))
    }
}

impl TryFrom<BTreeMap<String, String>> for DayLabels {
    type Error = DateError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut labels = Self::default();
        for (key, label) in map {
            labels.0[key.parse::<Weekday>()?.index()] = label;
        }
        Ok(labels)
    }
}

impl From<DayLabels> for BTreeMap<String, String> {
    fn from(labels: DayLabels) -> Self {
        Weekday::ALL
            .iter()
            .map(Weekday::to_string)
            .zip(labels.0)
            .collect()
    }
}

/// Renders `date` through `pattern`. The sentinel renders as an empty string.
pub fn format_date(date: &DateValue, pattern: &DatePattern, labels: &MonthLabels) -> String {
    let Some(month) = Month::new(date.month()).ok().filter(|_| date.is_valid()) else {
        return String::new();
    };

    let mut out = String::with_capacity(pattern.source.len() + 4);
    for token in &pattern.tokens {
        match token {
            Token::Year => out.push_str(&format!("{:04}", date.year())),
            Token::MonthName => out.push_str(labels.get(month)),
            Token::MonthPadded => out.push_str(&format!("{:02}", date.month())),
            Token::Month => out.push_str(&date.month().to_string()),
            Token::DayPadded => out.push_str(&format!("{:02}", date.day())),
            Token::Day => out.push_str(&date.day().to_string()),
            Token::Literal(literal) => out.push_str(literal),
        }
    }
    out
}

/// Parses user text in `pattern`.
///
/// Returns [`DateValue::NONE`] when the text does not have the pattern's
/// shape, names a day that does not exist, or names a day `constraints`
/// does not allow.
pub fn parse_date(
    text: &str,
    pattern: &DatePattern,
    labels: &MonthLabels,
    constraints: &ConstraintSet,
) -> DateValue {
    match match_pattern(text.trim(), pattern, labels) {
        Some(date) if constraints.is_selectable(&date) => date,
        Some(date) => {
            tracing::trace!(%date, "parsed date is not selectable");
            DateValue::NONE
        },
        None => {
            tracing::trace!(text, pattern = pattern.as_str(), "text does not match date pattern");
            DateValue::NONE
        },
    }
}

fn match_pattern(text: &str, pattern: &DatePattern, labels: &MonthLabels) -> Option<DateValue> {
    if !pattern.is_complete() {
        return None;
    }

    let mut rest = text;
    let (mut year, mut month, mut day) = (None, None, None);
    for token in &pattern.tokens {
        rest = match token {
            Token::Literal(literal) => rest.strip_prefix(literal.as_str())?,
            Token::Year => {
                let (value, tail) = take_number(rest, 4, 4, true)?;
                year = Some(value);
                tail
            },
            Token::MonthPadded | Token::Month => {
                let (value, tail) = take_number(rest, 1, 2, *token == Token::MonthPadded)?;
                month = Some(u8::try_from(value).ok()?);
                tail
            },
            Token::DayPadded | Token::Day => {
                let (value, tail) = take_number(rest, 1, 2, *token == Token::DayPadded)?;
                day = Some(u8::try_from(value).ok()?);
                tail
            },
            Token::MonthName => {
                let (value, len) = labels.match_prefix(rest)?;
                month = Some(value.get());
                &rest[len..]
            },
        };
    }

    if !rest.is_empty() {
        return None;
    }
    DateValue::new(year?, month?, day?).ok()
}

/// Reads `min..=max` leading ASCII digits. Without `zero_padded` a two-digit
/// value may not start with `0`.
fn take_number(text: &str, min: usize, max: usize, zero_padded: bool) -> Option<(u16, &str)> {
    let len = text
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    if len < min || (!zero_padded && len > 1 && text.starts_with('0')) {
        return None;
    }
    let (digits, tail) = text.split_at(len);
    digits.parse().ok().map(|value| (value, tail))
}

/// Month typed into the inline month editor
pub fn parse_month_label(text: &str, labels: &MonthLabels) -> Option<Month> {
    labels.find(text.trim())
}

/// Year typed into the inline year editor, accepted within `min_year..=max_year`
pub fn parse_year_label(text: &str, min_year: u16, max_year: u16) -> Option<Year> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = trimmed.parse::<u16>().ok()?;
    if value < min_year || value > max_year {
        return None;
    }
    Year::new(value).ok()
}

/// Month the picker opens on when nothing is selected yet.
///
/// Accepts `yyyy-mm` as well as `mm-yyyy`; any non-digit separates the parts.
pub fn parse_default_month(text: &str) -> Option<YearMonth> {
    let trimmed = text.trim();
    let separator = trimmed.chars().find(|c| !c.is_ascii_digit())?;
    let (first, second) = trimmed.split_once(separator)?;
    let (year, month) = if first.len() == 2 {
        (second, first)
    } else {
        (first, second)
    };
    if year.is_empty() || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    YearMonth::from_parts(year.parse().ok()?, month.parse().ok()?).ok()
}

/// Local midnight of `date` as `YYYY-MM-DDT00:00:00.000±HH:MM`.
pub fn to_local_iso_string(date: &DateValue, offset: FixedOffset) -> Option<String> {
    let midnight = local_midnight(date, offset)?;
    Some(midnight.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string())
}

/// Milliseconds since the Unix epoch at local midnight of `date`.
pub fn epoch_millis(date: &DateValue, offset: FixedOffset) -> Option<i64> {
    local_midnight(date, offset).map(|midnight| midnight.timestamp_millis())
}

fn local_midnight(date: &DateValue, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    date.to_naive()?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(offset)
        .single()
}

/// Calendar date at the start of an ISO 8601 timestamp such as
/// `2017-03-23T06:31:00.951+0000`. Returns the sentinel if there is none.
pub fn date_from_iso_prefix(text: &str) -> DateValue {
    text.trim()
        .get(..10)
        .and_then(|prefix| prefix.parse::<DateValue>().ok())
        .unwrap_or(DateValue::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, month, unconstrained};

    fn labels() -> MonthLabels {
        MonthLabels::default()
    }

    #[test]
    fn test_pattern_tokens() {
        let pattern = DatePattern::new("dd.mm.yyyy");
        assert_eq!(
            pattern.tokens,
            vec![
                Token::DayPadded,
                Token::Literal(".".to_owned()),
                Token::MonthPadded,
                Token::Literal(".".to_owned()),
                Token::Year,
            ]
        );
        assert!(pattern.is_complete());
        assert!(!pattern.uses_month_name());

        let pattern = DatePattern::new("d mmm yyyy");
        assert!(pattern.uses_month_name());
        assert!(pattern.is_complete());

        assert!(!DatePattern::new("mm/yyyy").is_complete());
        assert!(!DatePattern::new("dd/mm/yy").is_complete());
    }

    #[test]
    fn test_pattern_without_separators() {
        struct TestCase {
            pattern:     &'static str,
            complete:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                pattern:     "ddmmyyyy",
                complete:    true,
                description: "padded tokens have fixed widths",
            },
            TestCase {
                pattern:     "yyyymd",
                complete:    false,
                description: "unpadded month runs into the day",
            },
            TestCase {
                pattern:     "dmyyyy",
                complete:    false,
                description: "unpadded day runs into the month",
            },
            TestCase {
                pattern:     "myyyydd",
                complete:    false,
                description: "unpadded month runs into the year",
            },
            TestCase {
                pattern:     "yyyyddm",
                complete:    true,
                description: "trailing unpadded month is unambiguous",
            },
            TestCase {
                pattern:     "d mmmyyyy",
                complete:    true,
                description: "month name separates the day",
            },
        ];

        for case in &cases {
            let pattern = DatePattern::new(case.pattern);
            assert_eq!(pattern.is_complete(), case.complete, "{}", case.description);
        }

        let pattern = DatePattern::new("ddmmyyyy");
        let d = date(2024, 11, 1);
        let text = format_date(&d, &pattern, &labels());
        assert_eq!(text, "01112024");
        assert_eq!(parse_date(&text, &pattern, &labels(), &unconstrained()), d);
        assert_eq!(
            parse_date("1112024", &DatePattern::new("dmyyyy"), &labels(), &unconstrained()),
            DateValue::NONE
        );
    }

    #[test]
    fn test_format_cases() {
        struct TestCase {
            pattern:  &'static str,
            expected: &'static str,
        }

        let d = date(2024, 3, 5);
        let cases = [
            TestCase {
                pattern:  "yyyy-mm-dd",
                expected: "2024-03-05",
            },
            TestCase {
                pattern:  "dd.mm.yyyy",
                expected: "05.03.2024",
            },
            TestCase {
                pattern:  "d/m/yyyy",
                expected: "5/3/2024",
            },
            TestCase {
                pattern:  "dd mmm yyyy",
                expected: "05 Mar 2024",
            },
            TestCase {
                pattern:  "yyyy年mm月dd日",
                expected: "2024年03月05日",
            },
        ];

        for case in &cases {
            assert_eq!(
                format_date(&d, &DatePattern::new(case.pattern), &labels()),
                case.expected,
                "pattern {}",
                case.pattern
            );
        }
    }

    #[test]
    fn test_format_sentinel_is_empty() {
        assert_eq!(format_date(&DateValue::NONE, &DatePattern::default(), &labels()), "");
    }

    #[test]
    fn test_parse_cases() {
        struct TestCase {
            text:     &'static str,
            pattern:  &'static str,
            expected: DateValue,
        }

        let cases = [
            TestCase {
                text:     "2024-03-05",
                pattern:  "yyyy-mm-dd",
                expected: date(2024, 3, 5),
            },
            TestCase {
                text:     "2024-3-5",
                pattern:  "yyyy-mm-dd",
                expected: date(2024, 3, 5),
            },
            TestCase {
                text:     " 05.03.2024 ",
                pattern:  "dd.mm.yyyy",
                expected: date(2024, 3, 5),
            },
            TestCase {
                text:     "5/3/2024",
                pattern:  "d/m/yyyy",
                expected: date(2024, 3, 5),
            },
            TestCase {
                text:     "05/3/2024",
                pattern:  "d/m/yyyy",
                expected: DateValue::NONE,
            },
            TestCase {
                text:     "05 mar 2024",
                pattern:  "dd mmm yyyy",
                expected: date(2024, 3, 5),
            },
            TestCase {
                text:     "05 Mrz 2024",
                pattern:  "dd mmm yyyy",
                expected: DateValue::NONE,
            },
            TestCase {
                text:     "2024-02-30",
                pattern:  "yyyy-mm-dd",
                expected: DateValue::NONE,
            },
            TestCase {
                text:     "2024/03/05",
                pattern:  "yyyy-mm-dd",
                expected: DateValue::NONE,
            },
            TestCase {
                text:     "2024-03-05x",
                pattern:  "yyyy-mm-dd",
                expected: DateValue::NONE,
            },
            TestCase {
                text:     "24-03-05",
                pattern:  "yyyy-mm-dd",
                expected: DateValue::NONE,
            },
            TestCase {
                text:     "20240305",
                pattern:  "yyyymmdd",
                expected: date(2024, 3, 5),
            },
            TestCase {
                text:     "",
                pattern:  "yyyy-mm-dd",
                expected: DateValue::NONE,
            },
            TestCase {
                text:     "2024-03",
                pattern:  "yyyy-mm",
                expected: DateValue::NONE,
            },
        ];

        for case in &cases {
            let parsed = parse_date(case.text, &DatePattern::new(case.pattern), &labels(), &unconstrained());
            assert_eq!(parsed, case.expected, "{:?} in {}", case.text, case.pattern);
        }
    }

    #[test]
    fn test_parse_enforces_constraints() {
        let constraints = ConstraintSet::builder()
            .disable_weekends(true)
            .build()
            .unwrap();
        let pattern = DatePattern::default();
        assert_eq!(parse_date("2024-06-15", &pattern, &labels(), &constraints), DateValue::NONE);
        assert_eq!(
            parse_date("2024-06-17", &pattern, &labels(), &constraints),
            date(2024, 6, 17)
        );
        assert_eq!(
            parse_date("0999-06-17", &pattern, &labels(), &unconstrained()),
            DateValue::NONE,
            "below the library year floor"
        );
    }

    #[test]
    fn test_round_trip() {
        let patterns = ["yyyy-mm-dd", "dd.mm.yyyy", "d/m/yyyy", "dd mmm yyyy", "mmm d, yyyy"];
        let dates = [
            date(1000, 1, 1),
            date(2023, 12, 31),
            date(2024, 2, 29),
            date(2024, 10, 10),
            date(9999, 12, 31),
        ];
        for pattern in patterns.map(DatePattern::new) {
            for d in &dates {
                let text = format_date(d, &pattern, &labels());
                assert_eq!(
                    parse_date(&text, &pattern, &labels(), &unconstrained()),
                    *d,
                    "{text} in {pattern}"
                );
            }
        }
    }

    #[test]
    fn test_month_name_longest_match() {
        let mut names = DEFAULT_MONTH_LABELS.map(str::to_owned);
        names[5] = "Jun".to_owned();
        names[6] = "June-July".to_owned();
        let labels = MonthLabels::new(names);
        let pattern = DatePattern::new("mmm-dd-yyyy");
        assert_eq!(
            parse_date("June-July-04-2024", &pattern, &labels, &unconstrained()),
            date(2024, 7, 4)
        );
        assert_eq!(
            parse_date("jun-04-2024", &pattern, &labels, &unconstrained()),
            date(2024, 6, 4)
        );
    }

    #[test]
    fn test_parse_month_label() {
        assert_eq!(parse_month_label("mar", &labels()), Some(month(3)));
        assert_eq!(parse_month_label(" DEC ", &labels()), Some(month(12)));
        assert_eq!(parse_month_label("March", &labels()), None);
        assert_eq!(parse_month_label("", &labels()), None);
    }

    #[test]
    fn test_parse_year_label() {
        assert_eq!(parse_year_label("2024", 2020, 2025).map(Year::get), Some(2024));
        assert_eq!(parse_year_label("2026", 2020, 2025), None);
        assert_eq!(parse_year_label("20x4", 2020, 2025), None);
        assert_eq!(parse_year_label("", 2020, 2025), None);
        assert_eq!(parse_year_label("-2024", 1000, 9999), None);
    }

    #[test]
    fn test_parse_default_month() {
        assert_eq!(parse_default_month("2024-08").map(|ym| ym.to_string()).as_deref(), Some("2024-08"));
        assert_eq!(parse_default_month("08/2024").map(|ym| ym.to_string()).as_deref(), Some("2024-08"));
        assert_eq!(parse_default_month("2024.8").map(|ym| ym.to_string()).as_deref(), Some("2024-08"));
        assert_eq!(parse_default_month("2024-13"), None);
        assert_eq!(parse_default_month("202408"), None);
        assert_eq!(parse_default_month(""), None);
    }

    #[test]
    fn test_local_iso_string() {
        let d = date(2017, 3, 23);
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let minus_five_thirty = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(
            to_local_iso_string(&d, plus_one).as_deref(),
            Some("2017-03-23T00:00:00.000+01:00")
        );
        assert_eq!(
            to_local_iso_string(&d, minus_five_thirty).as_deref(),
            Some("2017-03-23T00:00:00.000-05:30")
        );
        assert_eq!(to_local_iso_string(&DateValue::NONE, plus_one), None);
        assert_eq!(
            to_local_iso_string(&date(1, 1, 1), plus_one).as_deref(),
            Some("0001-01-01T00:00:00.000+01:00")
        );
    }

    #[test]
    fn test_epoch_millis() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let plus_two = FixedOffset::east_opt(7200).unwrap();
        assert_eq!(epoch_millis(&date(1970, 1, 1), utc), Some(0));
        assert_eq!(epoch_millis(&date(1970, 1, 2), utc), Some(86_400_000));
        assert_eq!(epoch_millis(&date(1970, 1, 1), plus_two), Some(-7_200_000));
        assert_eq!(epoch_millis(&DateValue::NONE, utc), None);
        assert_eq!(epoch_millis(&date(1, 1, 1), utc), Some(-62_135_596_800_000));
    }

    #[test]
    fn test_date_from_iso_prefix() {
        assert_eq!(date_from_iso_prefix("2017-03-23T06:31:00.951+0000"), date(2017, 3, 23));
        assert_eq!(date_from_iso_prefix("2017-03-23"), date(2017, 3, 23));
        assert_eq!(date_from_iso_prefix("23.03.2017"), DateValue::NONE);
        assert_eq!(date_from_iso_prefix("2017"), DateValue::NONE);
    }

    #[test]
    fn test_labels_serde() {
        let labels: MonthLabels = serde_json::from_str(r#"{"1":"Jan.","12":"Déc."}"#).unwrap();
        assert_eq!(labels.get(month(1)), "Jan.");
        assert_eq!(labels.get(month(2)), "Feb");
        assert_eq!(labels.get(month(12)), "Déc.");
        assert!(serde_json::from_str::<MonthLabels>(r#"{"13":"x"}"#).is_err());

        let days: DayLabels = serde_json::from_str(r#"{"mo":"Mo","su":"So"}"#).unwrap();
        assert_eq!(days.get(Weekday::Monday), "Mo");
        assert_eq!(days.get(Weekday::Sunday), "So");
        assert_eq!(days.get(Weekday::Friday), "Fri");
        assert!(serde_json::from_str::<DayLabels>(r#"{"xx":"?"}"#).is_err());
    }

    #[test]
    fn test_pattern_serde_as_string() {
        let pattern = DatePattern::new("dd.mm.yyyy");
        assert_eq!(serde_json::to_string(&pattern).unwrap(), r#""dd.mm.yyyy""#);
        let parsed: DatePattern = serde_json::from_str(r#""dd.mm.yyyy""#).unwrap();
        assert_eq!(parsed, pattern);
    }
}
