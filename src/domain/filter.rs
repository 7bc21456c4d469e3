//! List filtering for the entry list view

use crate::domain::diary::Diary;
use chrono::NaiveDate;

/// Criteria applied on top of the newest-first list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryFilter {
    pub starred_only: bool,
    /// Inclusive lower bound on the entry's calendar date (UTC)
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the entry's calendar date (UTC)
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl DiaryFilter {
    pub fn starred() -> Self {
        DiaryFilter {
            starred_only: true,
            ..Default::default()
        }
    }

    pub fn matches(&self, diary: &Diary) -> bool {
        if self.starred_only && !diary.is_star {
            return false;
        }

        let day = diary.date.date_naive();
        if self.from.is_some_and(|from| day < from) {
            return false;
        }
        if self.to.is_some_and(|to| day > to) {
            return false;
        }

        true
    }

    /// Apply to an already ordered list, keeping its order
    pub fn apply<'a>(&self, diaries: &'a [Diary]) -> Vec<&'a Diary> {
        let matching = diaries.iter().filter(|diary| self.matches(diary));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(title: &str, day: u32, is_star: bool) -> Diary {
        let mut diary = Diary::new(
            title.to_string(),
            "contents".to_string(),
            Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        );
        diary.is_star = is_star;
        diary
    }

    fn titles(diaries: Vec<&Diary>) -> Vec<&str> {
        diaries.into_iter().map(|d| d.title.as_str()).collect()
    }

    fn sample() -> Vec<Diary> {
        vec![
            entry("D", 20, true),
            entry("C", 15, false),
            entry("B", 12, true),
            entry("A", 10, false),
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let diaries = sample();
        assert_eq!(
            titles(DiaryFilter::default().apply(&diaries)),
            vec!["D", "C", "B", "A"]
        );
    }

    #[test]
    fn test_starred_only() {
        let diaries = sample();
        assert_eq!(titles(DiaryFilter::starred().apply(&diaries)), vec!["D", "B"]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let diaries = sample();
        let filter = DiaryFilter {
            from: NaiveDate::from_ymd_opt(2024, 1, 12),
            to: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..Default::default()
        };
        assert_eq!(titles(filter.apply(&diaries)), vec!["C", "B"]);
    }

    #[test]
    fn test_limit_after_filtering() {
        let diaries = sample();
        let filter = DiaryFilter {
            from: NaiveDate::from_ymd_opt(2024, 1, 11),
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(titles(filter.apply(&diaries)), vec!["D", "C"]);
    }
}
