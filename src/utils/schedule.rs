use std::str::FromStr;
use chrono::NaiveTime;
use crate::error::PortalError;

/// A lecture slot written as `HH:MM - HH:MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

impl FromStr for TimeRange {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| PortalError::Content(format!("'{}' is not a time range", s)))?;
        let start = NaiveTime::parse_from_str(start.trim(), "%H:%M")?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H:%M")?;
        if end <= start {
            return Err(PortalError::Content(format!("'{}' ends before it starts", s)));
        }
        Ok(Self { start, end })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    Active,
    Next,
    Idle,
}

impl SlotStatus {
    pub fn is_active(self) -> bool {
        self == SlotStatus::Active
    }

    pub fn is_next(self) -> bool {
        self == SlotStatus::Next
    }
}

/// Marks every slot running at `now` as active and the earliest slot
/// starting after `now` as next. Unparseable slots stay idle.
pub fn classify<S: AsRef<str>>(times: &[S], now: NaiveTime) -> Vec<SlotStatus> {
    let ranges: Vec<Option<TimeRange>> = times
        .iter()
        .map(|time| match time.as_ref().parse::<TimeRange>() {
            Ok(range) => Some(range),
            Err(err) => {
                log::warn!("Skipping schedule slot: {}", err);
                None
            }
        })
        .collect();

    let next = ranges
        .iter()
        .enumerate()
        .filter_map(|(idx, range)| range.filter(|r| r.start > now).map(|r| (idx, r.start)))
        .min_by_key(|(_, start)| *start)
        .map(|(idx, _)| idx);

    ranges
        .iter()
        .enumerate()
        .map(|(idx, range)| match range {
            Some(range) if range.contains(now) => SlotStatus::Active,
            Some(_) if Some(idx) == next => SlotStatus::Next,
            _ => SlotStatus::Idle,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_parse_range() {
        let range: TimeRange = "08:00 - 10:30".parse().unwrap();
        assert_eq!(range.start, at(8, 0));
        assert_eq!(range.end, at(10, 30));
        assert!("10:30 - 08:00".parse::<TimeRange>().is_err());
        assert!("08:00".parse::<TimeRange>().is_err());
        assert!("8 am - 10 am".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_classify_marks_active_and_next() {
        let times = ["08:00 - 10:30", "13:00 - 15:30", "10:45 - 12:15"];
        let statuses = classify(&times, at(9, 15));
        assert_eq!(statuses, vec![SlotStatus::Active, SlotStatus::Idle, SlotStatus::Next]);
    }

    #[test]
    fn test_classify_end_is_exclusive() {
        let times = ["08:00 - 10:30", "13:00 - 15:30"];
        let statuses = classify(&times, at(10, 30));
        assert_eq!(statuses, vec![SlotStatus::Idle, SlotStatus::Next]);
    }

    #[test]
    fn test_classify_after_last_slot() {
        let times = ["08:00 - 10:30", "garbage"];
        assert_eq!(classify(&times, at(18, 0)), vec![SlotStatus::Idle, SlotStatus::Idle]);
    }
}
