//! Watermark model for tracking export state
//!
//! One watermark exists per log group. It is stored as a Parameter Store
//! string parameter holding the epoch milliseconds of the end of the last
//! exported window.

use crate::domain::ids::{LogGroupName, ParameterName};
use crate::domain::ParameterStoreError;
use chrono::{DateTime, TimeZone, Utc};

/// Watermark for one log group
///
/// # Examples
///
/// ```
/// use log_exporter::core::state::Watermark;
/// use log_exporter::domain::LogGroupName;
///
/// let log_group = LogGroupName::new("/app/service").unwrap();
/// let watermark = Watermark::never_exported("/log-exporter-last-export", log_group);
///
/// assert_eq!(watermark.parameter_name.as_str(), "/log-exporter-last-export/app/service");
/// assert_eq!(watermark.last_export_ms, 0);
/// assert!(watermark.is_due(86_400_000, 86_400_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watermark {
    /// Log group this watermark tracks
    pub log_group: LogGroupName,

    /// Parameter the watermark is stored under
    pub parameter_name: ParameterName,

    /// End of the last exported window, epoch milliseconds (0 = never)
    pub last_export_ms: i64,

    /// Whether the value was read from (or written to) the store
    pub persisted: bool,
}

impl Watermark {
    /// Parameter name for a log group's watermark
    pub fn parameter_name_for(prefix: &str, log_group: &LogGroupName) -> ParameterName {
        ParameterName::join(prefix, log_group.as_str())
    }

    /// A watermark for a log group that has never been exported
    pub fn never_exported(prefix: &str, log_group: LogGroupName) -> Self {
        Self {
            parameter_name: Self::parameter_name_for(prefix, &log_group),
            log_group,
            last_export_ms: 0,
            persisted: false,
        }
    }

    /// A watermark read from the store
    pub fn stored(prefix: &str, log_group: LogGroupName, last_export_ms: i64) -> Self {
        Self {
            parameter_name: Self::parameter_name_for(prefix, &log_group),
            log_group,
            last_export_ms,
            persisted: true,
        }
    }

    /// Decode a stored parameter value
    ///
    /// # Errors
    ///
    /// Returns [`ParameterStoreError::InvalidValue`] if the value is not a
    /// non-negative decimal integer.
    pub fn parse_value(name: &ParameterName, raw: &str) -> Result<i64, ParameterStoreError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|e| ParameterStoreError::InvalidValue {
                name: name.to_string(),
                message: format!("'{raw}' is not an epoch millisecond timestamp: {e}"),
            })?;

        if value < 0 {
            return Err(ParameterStoreError::InvalidValue {
                name: name.to_string(),
                message: format!("'{raw}' is before the epoch"),
            });
        }

        Ok(value)
    }

    /// Encode the value to store
    pub fn encode_value(&self) -> String {
        self.last_export_ms.to_string()
    }

    /// Milliseconds since the last export
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.last_export_ms)
    }

    /// Whether at least `interval_ms` has passed since the last export
    pub fn is_due(&self, now_ms: i64, interval_ms: i64) -> bool {
        self.age_ms(now_ms) >= interval_ms
    }

    /// Move the watermark to the end of a successfully exported window
    pub fn advance_to(&mut self, to_ms: i64) {
        self.last_export_ms = to_ms;
        self.persisted = true;
    }

    /// Time of the last export, `None` if the log group was never exported
    pub fn last_export_at(&self) -> Option<DateTime<Utc>> {
        if !self.persisted || self.last_export_ms == 0 {
            return None;
        }
        Utc.timestamp_millis_opt(self.last_export_ms).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const PREFIX: &str = "/log-exporter-last-export";
    const DAY_MS: i64 = 86_400_000;

    fn group(name: &str) -> LogGroupName {
        LogGroupName::new(name).unwrap()
    }

    #[test_case("/app/service", "/log-exporter-last-export/app/service" ; "leading slash collapses")]
    #[test_case("app/service", "/log-exporter-last-export/app/service" ; "no leading slash")]
    #[test_case("/aws/lambda/fn", "/log-exporter-last-export/aws/lambda/fn" ; "nested path")]
    #[test_case("//app", "/log-exporter-last-export//app" ; "single replacement pass")]
    fn test_parameter_name_for(log_group: &str, expected: &str) {
        let name = Watermark::parameter_name_for(PREFIX, &group(log_group));
        assert_eq!(name.as_str(), expected);
    }

    #[test]
    fn test_never_exported_starts_at_epoch() {
        let watermark = Watermark::never_exported(PREFIX, group("/app/service"));
        assert_eq!(watermark.last_export_ms, 0);
        assert!(!watermark.persisted);
        assert!(watermark.last_export_at().is_none());
    }

    #[test]
    fn test_is_due_boundaries() {
        let now = 10 * DAY_MS;
        let just_due = Watermark::stored(PREFIX, group("/a"), now - DAY_MS);
        let overdue = Watermark::stored(PREFIX, group("/a"), now - DAY_MS - 1);
        let recent = Watermark::stored(PREFIX, group("/a"), now - 1);

        assert!(just_due.is_due(now, DAY_MS));
        assert!(overdue.is_due(now, DAY_MS));
        assert!(!recent.is_due(now, DAY_MS));
    }

    #[test]
    fn test_parse_value() {
        let name = ParameterName::new("/p").unwrap();
        assert_eq!(Watermark::parse_value(&name, "1700000000000").unwrap(), 1_700_000_000_000);
        assert_eq!(Watermark::parse_value(&name, " 0\n").unwrap(), 0);
        assert!(Watermark::parse_value(&name, "yesterday").is_err());
        assert!(Watermark::parse_value(&name, "").is_err());
    }

    #[test_case("-1" ; "just before epoch")]
    #[test_case("-9223372036854775808" ; "i64 min")]
    #[test_case("9223372036854775808" ; "past i64 max")]
    fn test_parse_value_rejects_out_of_range(raw: &str) {
        let name = ParameterName::new("/p").unwrap();
        let err = Watermark::parse_value(&name, raw).unwrap_err();
        assert!(matches!(err, ParameterStoreError::InvalidValue { .. }));
    }

    #[test]
    fn test_age_saturates_on_extreme_values() {
        let ancient = Watermark::stored(PREFIX, group("/a"), i64::MIN);
        assert_eq!(ancient.age_ms(10 * DAY_MS), i64::MAX);
        assert!(ancient.is_due(10 * DAY_MS, DAY_MS));

        let future = Watermark::stored(PREFIX, group("/a"), i64::MAX);
        assert_eq!(future.age_ms(-10 * DAY_MS), i64::MIN);
        assert!(!future.is_due(-10 * DAY_MS, DAY_MS));
    }

    #[test]
    fn test_advance_and_encode() {
        let mut watermark = Watermark::never_exported(PREFIX, group("/app/service"));
        watermark.advance_to(1_700_000_000_123);

        assert!(watermark.persisted);
        assert_eq!(watermark.encode_value(), "1700000000123");
        assert_eq!(
            watermark.last_export_at().unwrap().timestamp_millis(),
            1_700_000_000_123
        );
    }
}
