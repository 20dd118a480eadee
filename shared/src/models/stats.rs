use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SharedError;

/// Time resolution of the pageview buckets shown in the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Hours => "hours",
            Resolution::Days => "days",
            Resolution::Weeks => "weeks",
            Resolution::Months => "months",
        }
    }

    /// Axis label for a bucket at this resolution
    pub fn bucket_label(&self, date: DateTime<Utc>) -> String {
        match self {
            Resolution::Hours => date.format("%H:00").to_string(),
            Resolution::Days => date.format("%d %b").to_string(),
            Resolution::Weeks => format!("Wk {}", date.iso_week().week()),
            Resolution::Months => date.format("%b %Y").to_string(),
        }
    }
}

impl FromStr for Resolution {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hours" => Ok(Resolution::Hours),
            "days" => Ok(Resolution::Days),
            "weeks" => Ok(Resolution::Weeks),
            "months" => Ok(Resolution::Months),
            other => Err(SharedError::InvalidResolution(other.to_string())),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The range/resolution pair carried in the query string. Values are kept
/// as raw strings so an unknown resolution never aliases a known preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RangeQuery {
    pub range: Option<String>,
    pub resolution: Option<String>,
}

impl RangeQuery {
    pub fn new(range: &str, resolution: Resolution) -> Self {
        Self {
            range: Some(range.to_string()),
            resolution: Some(resolution.as_str().to_string()),
        }
    }

    /// Extracts the range/resolution keys from a full query map, ignoring
    /// foreign parameters.
    pub fn from_query(query: &BTreeMap<String, String>) -> Self {
        Self {
            range: query.get("range").cloned(),
            resolution: query.get("resolution").cloned(),
        }
    }

    /// True when neither key is present (the default 7-day window).
    pub fn is_empty(&self) -> bool {
        self.range.is_none() && self.resolution.is_none()
    }

    /// Typed view of the resolution value, if one is present.
    pub fn parsed_resolution(&self) -> crate::Result<Option<Resolution>> {
        self.resolution.as_deref().map(Resolution::from_str).transpose()
    }
}

/// Account metadata shown in the operator header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_id: String,
    pub name: String,
}

/// One bar in the pageviews chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBucket {
    /// Start of the bucket's time window
    pub date: DateTime<Utc>,

    /// Pageviews counted in this bucket
    pub pageviews: u64,

    /// Unique visiting entities in this bucket (users for operators,
    /// accounts for users)
    pub visitors: u64,
}

/// Row in the top-pages table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRow {
    pub url: String,
    pub pageviews: u64,
}

/// Row in the top-referrers table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferrerRow {
    pub host: String,
    pub pageviews: u64,
}

/// The state object driving the dashboard view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsModel {
    /// Account being inspected; present in operator mode
    pub account: Option<AccountInfo>,

    /// Result of the cookie support probe for this browsing context
    pub allows_cookies: bool,

    /// Whether the current user has opted out of collection
    pub has_opted_out: bool,

    /// Unique users seen in the queried window (operator view)
    pub unique_users: u64,

    /// Unique accounts visited in the queried window (user view)
    pub unique_accounts: u64,

    /// Unique sessions seen in the queried window
    pub unique_sessions: u64,

    /// Share of single-page sessions (0.0 - 1.0)
    pub bounce_rate: f64,

    /// Operator-only ratio rendered as the "plus" metric (0.0 - 1.0)
    pub loss: f64,

    /// Resolution the pageview buckets were aggregated at
    pub resolution: Resolution,

    /// Pageview buckets, oldest first
    pub pageviews: Vec<ChartBucket>,

    /// Top pages by pageviews, descending
    pub pages: Vec<PageRow>,

    /// Top referrers by pageviews, descending
    pub referrers: Vec<ReferrerRow>,
}

impl Default for StatsModel {
    fn default() -> Self {
        Self {
            account: None,
            allows_cookies: false,
            has_opted_out: false,
            unique_users: 0,
            unique_accounts: 0,
            unique_sessions: 0,
            bounce_rate: 0.0,
            loss: 0.0,
            resolution: Resolution::default(),
            pageviews: Vec::new(),
            pages: Vec::new(),
            referrers: Vec::new(),
        }
    }
}

impl StatsModel {
    /// Clears all usage data while keeping consent and account state.
    /// Backs the "Delete my data" control.
    pub fn purge_usage_data(&mut self) {
        self.unique_users = 0;
        self.unique_accounts = 0;
        self.unique_sessions = 0;
        self.bounce_rate = 0.0;
        self.loss = 0.0;
        self.pageviews.clear();
        self.pages.clear();
        self.referrers.clear();
    }
}

/// Formats a 0.0 - 1.0 ratio as a percentage with exactly one fraction
/// digit, e.g. 0.5 -> "50.0".
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, "50.0")]
    #[case(0.0, "0.0")]
    #[case(1.0, "100.0")]
    #[case(0.666, "66.6")]
    #[case(0.12345, "12.3")]
    fn formats_percentages(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_percentage(value), expected);
    }

    #[rstest]
    #[case("hours", Resolution::Hours)]
    #[case("days", Resolution::Days)]
    #[case("weeks", Resolution::Weeks)]
    #[case("months", Resolution::Months)]
    fn parses_known_resolutions(#[case] input: &str, #[case] expected: Resolution) {
        assert_eq!(input.parse::<Resolution>().unwrap(), expected);
        assert_eq!(expected.as_str(), input);
    }

    #[test]
    fn rejects_unknown_resolution() {
        let err = "fortnights".parse::<Resolution>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown resolution: fortnights");
    }

    #[test]
    fn bucket_labels_follow_resolution() {
        let date = Utc.with_ymd_and_hms(2026, 6, 3, 14, 0, 0).unwrap();
        assert_eq!(Resolution::Hours.bucket_label(date), "14:00");
        assert_eq!(Resolution::Days.bucket_label(date), "03 Jun");
        assert_eq!(Resolution::Weeks.bucket_label(date), "Wk 23");
        assert_eq!(Resolution::Months.bucket_label(date), "Jun 2026");
    }

    #[test]
    fn range_query_ignores_foreign_params() {
        let mut query = BTreeMap::new();
        query.insert("range".to_string(), "24".to_string());
        query.insert("resolution".to_string(), "hours".to_string());
        query.insert("token".to_string(), "abc123".to_string());

        let extracted = RangeQuery::from_query(&query);
        assert_eq!(extracted, RangeQuery::new("24", Resolution::Hours));
        assert_eq!(
            extracted.parsed_resolution().unwrap(),
            Some(Resolution::Hours)
        );
    }

    #[test]
    fn unknown_resolution_matches_no_preset() {
        let mut query = BTreeMap::new();
        query.insert("range".to_string(), "24".to_string());
        query.insert("resolution".to_string(), "bogus".to_string());

        let extracted = RangeQuery::from_query(&query);
        assert!(!extracted.is_empty());
        assert_ne!(extracted, RangeQuery::new("24", Resolution::Hours));
        assert!(extracted.parsed_resolution().is_err());
    }

    #[test]
    fn empty_query_is_the_default_window() {
        let query = BTreeMap::new();
        assert!(RangeQuery::from_query(&query).is_empty());
    }

    #[test]
    fn purge_clears_usage_but_keeps_consent() {
        let mut model = StatsModel {
            allows_cookies: true,
            has_opted_out: true,
            unique_users: 12,
            unique_sessions: 40,
            bounce_rate: 0.3,
            pageviews: vec![ChartBucket {
                date: Utc.with_ymd_and_hms(2026, 6, 3, 0, 0, 0).unwrap(),
                pageviews: 7,
                visitors: 3,
            }],
            pages: vec![PageRow {
                url: "/index.html".to_string(),
                pageviews: 7,
            }],
            ..Default::default()
        };

        model.purge_usage_data();

        assert_eq!(model.unique_users, 0);
        assert_eq!(model.unique_sessions, 0);
        assert_eq!(model.bounce_rate, 0.0);
        assert!(model.pageviews.is_empty());
        assert!(model.pages.is_empty());
        // consent state survives a purge
        assert!(model.allows_cookies);
        assert!(model.has_opted_out);
    }
}
