//! How entry dates are shown to the user

use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// 2024-01-12
    #[default]
    Iso,
    /// 24년 01월 12일(금)
    Korean,
}

impl DateStyle {
    pub fn format(&self, date: &DateTime<Utc>) -> String {
        match self {
            DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
            DateStyle::Korean => format!(
                "{}({})",
                date.format("%y년 %m월 %d일"),
                korean_weekday(date.weekday())
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DateStyle::Iso => "iso",
            DateStyle::Korean => "korean",
        }
    }
}

fn korean_weekday(weekday: Weekday) -> char {
    match weekday {
        Weekday::Mon => '월',
        Weekday::Tue => '화',
        Weekday::Wed => '수',
        Weekday::Thu => '목',
        Weekday::Fri => '금',
        Weekday::Sat => '토',
        Weekday::Sun => '일',
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iso" => Ok(DateStyle::Iso),
            "korean" | "ko" => Ok(DateStyle::Korean),
            _ => Err(format!(
                "Invalid date style: '{}'. Valid styles are: iso, korean",
                s
            )),
        }
    }
}
