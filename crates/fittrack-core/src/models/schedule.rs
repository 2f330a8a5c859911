// ABOUTME: Recurrence definition for a scheduled routine and its stored record shape
// ABOUTME: Repeat kind, interval, and a weekday bitset indexed 0=Sunday..6=Saturday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bitflags::bitflags;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// How a schedule repeats
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RepeatKind {
    /// Single occurrence on the start date
    #[default]
    None,
    /// Every `interval` days
    Daily,
    /// Selected weekdays every `interval` weeks
    Weekly,
    /// Same day of month every `interval` months
    Monthly,
    /// Stored value that matches no known kind; never occurs
    #[serde(other)]
    Unknown,
}

impl RepeatKind {
    /// Parse the kind names accepted on the wire
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

bitflags! {
    /// Set of weekdays, bit `n` is weekday index `n` (0 = Sunday)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WeekdaySet: u8 {
        /// Sunday (index 0)
        const SUNDAY = 1 << 0;
        /// Monday (index 1)
        const MONDAY = 1 << 1;
        /// Tuesday (index 2)
        const TUESDAY = 1 << 2;
        /// Wednesday (index 3)
        const WEDNESDAY = 1 << 3;
        /// Thursday (index 4)
        const THURSDAY = 1 << 4;
        /// Friday (index 5)
        const FRIDAY = 1 << 5;
        /// Saturday (index 6)
        const SATURDAY = 1 << 6;
    }
}

impl WeekdaySet {
    /// Flag for a weekday index, `None` outside 0..=6
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        if index > 6 {
            return None;
        }
        Self::from_bits(1 << index)
    }

    /// Flag for a chrono weekday
    #[must_use]
    pub fn from_weekday(weekday: Weekday) -> Self {
        // num_days_from_sunday is always 0..=6
        Self::from_bits_truncate(1 << weekday.num_days_from_sunday())
    }

    /// Build a set from weekday indices, ignoring anything outside 0..=6
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Self {
        indices
            .into_iter()
            .filter_map(Self::from_index)
            .fold(Self::empty(), |set, day| set | day)
    }

    /// Whether the set includes `weekday`
    #[must_use]
    pub fn contains_weekday(self, weekday: Weekday) -> bool {
        self.contains(Self::from_weekday(weekday))
    }

    /// Weekday indices in ascending order
    #[must_use]
    pub fn indices(self) -> Vec<u8> {
        (0..=6u8)
            .filter(|index| self.bits() & (1 << index) != 0)
            .collect()
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let indices = self.indices();
        let mut seq = serializer.serialize_seq(Some(indices.len()))?;
        for index in indices {
            seq.serialize_element(&index)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let indices = Option::<Vec<u8>>::deserialize(deserializer)?.unwrap_or_default();
        let mut set = Self::empty();
        for index in indices {
            let day = Self::from_index(index).ok_or_else(|| {
                de::Error::custom(format!("weekday index {index} is outside 0..=6"))
            })?;
            set |= day;
        }
        Ok(set)
    }
}

const fn default_interval() -> u32 {
    defaults::SCHEDULE_INTERVAL
}

/// Parse a schedule start date-time
///
/// Accepts RFC 3339 (the wall-clock time as written is kept, the offset is
/// dropped), a naive `YYYY-MM-DDTHH:MM[:SS[.f]]`, or a plain date at midnight.
#[must_use]
pub fn parse_start_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn deserialize_start_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDateTime, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_start_date_time(&text)
        .ok_or_else(|| de::Error::custom(format!("invalid start date `{text}`")))
}

/// Recurrence definition evaluated at calendar-day granularity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRule {
    /// First occurrence; the time of day is ignored by the evaluator
    #[serde(deserialize_with = "deserialize_start_date")]
    pub start_date: NaiveDateTime,
    /// Repeat kind
    #[serde(default)]
    pub repeat: RepeatKind,
    /// Step between occurrences, at least 1
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Weekdays for weekly rules; empty means the start date's weekday
    #[serde(default, skip_serializing_if = "WeekdaySet::is_empty")]
    pub days_of_week: WeekdaySet,
}

impl ScheduleRule {
    /// Rule with interval 1 and no explicit weekdays
    #[must_use]
    pub fn new(start_date: NaiveDateTime, repeat: RepeatKind) -> Self {
        Self {
            start_date,
            repeat,
            interval: defaults::SCHEDULE_INTERVAL,
            days_of_week: WeekdaySet::empty(),
        }
    }

    /// Rule starting at midnight of `date`
    #[must_use]
    pub fn starting_on(date: NaiveDate, repeat: RepeatKind) -> Self {
        Self::new(date.and_time(NaiveTime::MIN), repeat)
    }

    /// Set the interval
    #[must_use]
    pub const fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Set the weekday filter
    #[must_use]
    pub const fn with_days(mut self, days_of_week: WeekdaySet) -> Self {
        self.days_of_week = days_of_week;
        self
    }

    /// Calendar day of the first occurrence
    #[must_use]
    pub fn start_day(&self) -> NaiveDate {
        self.start_date.date()
    }

    /// Weekdays a weekly rule fires on, falling back to the start weekday
    #[must_use]
    pub fn effective_weekdays(&self) -> WeekdaySet {
        if self.days_of_week.is_empty() {
            WeekdaySet::from_weekday(self.start_day().weekday())
        } else {
            self.days_of_week
        }
    }
}

/// Schedule as stored by the persistence collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    /// Record identifier
    pub id: String,
    /// Routine this schedule runs
    pub routine_id: String,
    /// Routine title, when the store joined it in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_title: Option<String>,
    /// Time of day shown in the planner (`HH:MM`)
    pub time: String,
    /// Recurrence
    #[serde(flatten)]
    pub rule: ScheduleRule,
}

impl ScheduleRecord {
    /// Label the planner shows for this schedule
    #[must_use]
    pub fn label(&self) -> &str {
        self.routine_title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.routine_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_set_indices_round_trip() {
        let set = WeekdaySet::from_indices([3, 1, 9]);
        assert_eq!(set, WeekdaySet::MONDAY | WeekdaySet::WEDNESDAY);
        assert_eq!(set.indices(), vec![1, 3]);
        assert!(set.contains_weekday(Weekday::Wed));
        assert!(!set.contains_weekday(Weekday::Sun));
    }

    #[test]
    fn test_weekday_set_rejects_out_of_range_on_deserialize() {
        let result: Result<WeekdaySet, _> = serde_json::from_str("[1, 7]");
        assert!(result.is_err());
    }

    #[test]
    fn test_schedule_record_deserializes_wire_shape() {
        let json = r#"{
            "id": "s1",
            "routineId": "r1",
            "time": "07:00",
            "startDate": "2024-01-01T07:00:00",
            "repeat": "weekly",
            "interval": 2,
            "daysOfWeek": [1, 3]
        }"#;
        let record: ScheduleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rule.repeat, RepeatKind::Weekly);
        assert_eq!(record.rule.interval, 2);
        assert_eq!(record.rule.days_of_week.indices(), vec![1, 3]);
        assert_eq!(record.label(), "r1");
    }

    #[test]
    fn test_schedule_record_accepts_utc_start_date() {
        let json = r#"{
            "id": "s2",
            "routineId": "r1",
            "routineTitle": "Push day",
            "time": "07:00",
            "startDate": "2024-01-01T07:00:00.000Z",
            "repeat": "daily",
            "interval": 1
        }"#;
        let record: ScheduleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rule.start_date.to_string(), "2024-01-01 07:00:00");
        assert_eq!(record.rule.repeat, RepeatKind::Daily);
        assert_eq!(record.label(), "Push day");
    }

    #[test]
    fn test_schedule_record_null_days_of_week_is_empty() {
        let json = r#"{
            "id": "s3",
            "routineId": "r1",
            "time": "18:30",
            "startDate": "2024-01-03",
            "repeat": "weekly",
            "interval": 1,
            "daysOfWeek": null
        }"#;
        let record: ScheduleRecord = serde_json::from_str(json).unwrap();
        assert!(record.rule.days_of_week.is_empty());
        assert_eq!(record.rule.effective_weekdays(), WeekdaySet::WEDNESDAY);
    }

    #[test]
    fn test_schedule_record_rejects_unparseable_start_date() {
        let json = r#"{"id": "s4", "routineId": "r1", "time": "07:00", "startDate": "soon"}"#;
        assert!(serde_json::from_str::<ScheduleRecord>(json).is_err());
    }

    #[test]
    fn test_unknown_repeat_kind_is_tolerated() {
        let kind: RepeatKind = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(kind, RepeatKind::Unknown);
        assert_eq!(RepeatKind::parse("yearly"), None);
    }

    #[test]
    fn test_effective_weekdays_defaults_to_start() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rule = ScheduleRule::starting_on(start, RepeatKind::Weekly);
        assert_eq!(rule.effective_weekdays(), WeekdaySet::MONDAY);
        assert_eq!(rule.interval, 1);
    }
}
