//! Order records shown in the orders table

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// All statuses, in the order the filter menu lists them
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::InProgress,
        OrderStatus::Complete,
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Rejected,
    ];

    /// Rank used when sorting by status
    ///
    /// This is a domain priority, not alphabetical:
    /// `Rejected < Pending < In Progress < Approved < Complete`.
    pub fn severity(self) -> u8 {
        match self {
            OrderStatus::Rejected => 0,
            OrderStatus::Pending => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Approved => 3,
            OrderStatus::Complete => 4,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown order status: {}", s))
    }
}

/// The person who placed an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    pub avatar: String,
}

/// One row of the orders table
///
/// Records are loaded once and never mutated. Queries produce new views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub order_id: String,
    pub user: OrderUser,
    pub project: String,
    pub address: String,
    /// Raw date as supplied by the source, see [`OrderRecord::resolve_date`]
    pub date: String,
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Resolve the raw date string to an instant
    ///
    /// Accepts RFC 3339 timestamps, ISO-8601 timestamps and dates without an
    /// offset (read in `now`'s offset), and the relative phrases used by older
    /// mock data ("just now", "a minute ago", "1 hour ago", "yesterday"),
    /// which are resolved against `now`. Returns `None` for anything else.
    pub fn resolve_date(&self, now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        resolve_date(&self.date, now)
    }

    /// Fields covered by free-text search
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.order_id, &self.user.name, &self.project, &self.address]
    }
}

/// Resolve a raw record date, see [`OrderRecord::resolve_date`]
pub fn resolve_date(raw: &str, now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    if let Some(local) = parse_naive(raw) {
        return now.offset().from_local_datetime(&local).single();
    }

    match raw.to_lowercase().as_str() {
        "just now" => Some(now),
        "a minute ago" => Some(now - Duration::minutes(1)),
        "1 hour ago" => Some(now - Duration::hours(1)),
        "yesterday" => Some(now - Duration::days(1)),
        _ => None,
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// ISO-8601 timestamp or calendar date with no offset
fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
