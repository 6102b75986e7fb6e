use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Date of birth as received from callers.
///
/// Unparseable input is kept as `Invalid` instead of being rejected, so a client can still be
/// built from a request whose birth date is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthDate {
    Valid(OffsetDateTime),
    Invalid(String),
}

impl BirthDate {
    /// Parse an RFC 3339 instant or a `YYYY-MM-DD` calendar date (midnight UTC).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc3339) {
            return Self::Valid(dt.to_offset(UtcOffset::UTC));
        }

        match Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
            Ok(date) => Self::from_date(date),
            Err(_) => Self::Invalid(raw.to_string()),
        }
    }

    pub fn from_date(date: Date) -> Self {
        Self::Valid(date.midnight().assume_utc())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn as_date_time(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Valid(dt) => Some(*dt),
            Self::Invalid(_) => None,
        }
    }

    /// Text form that `parse` maps back to the same value.
    pub fn as_text(&self) -> String {
        match self {
            Self::Valid(dt) => dt.format(&Rfc3339).unwrap_or_default(),
            Self::Invalid(raw) => raw.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BirthDate;
    use time::macros::{date, datetime};

    #[test]
    fn given_calendar_date_when_parse_should_use_midnight_utc() {
        let result = BirthDate::parse("2000-01-01");

        assert_eq!(result, BirthDate::Valid(datetime!(2000-01-01 00:00 UTC)));
    }

    #[test]
    fn given_rfc3339_with_offset_when_parse_should_normalise_to_utc() {
        let result = BirthDate::parse("1990-06-15T23:30:00-03:00");

        assert_eq!(result, BirthDate::Valid(datetime!(1990-06-16 02:30 UTC)));
    }

    #[test]
    fn given_garbage_when_parse_should_keep_raw_input_as_invalid() {
        let result = BirthDate::parse("yesterday-ish");

        assert!(!result.is_valid());
        assert_eq!(result, BirthDate::Invalid("yesterday-ish".to_string()));
        assert_eq!(result.as_date_time(), None);
    }

    #[test]
    fn given_impossible_calendar_date_when_parse_should_be_invalid() {
        assert!(!BirthDate::parse("2001-02-30").is_valid());
    }

    #[test]
    fn given_valid_date_when_as_text_should_parse_back_to_same_value() {
        let birth_date = BirthDate::from_date(date!(1985 - 12 - 24));

        assert_eq!(BirthDate::parse(&birth_date.as_text()), birth_date);
    }

    #[test]
    fn given_invalid_date_when_as_text_should_parse_back_to_same_value() {
        let birth_date = BirthDate::parse("31/31/31");

        assert_eq!(BirthDate::parse(&birth_date.as_text()), birth_date);
    }
}
