//! 시계열 집계 단위 정의.
//!
//! 이 모듈은 일/주/월 집계 단위와 기간 키 파생 규칙을 정의합니다.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 집계 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// 일별 집계
    Day,
    /// 주별 집계 (ISO-8601 주차, 월요일 시작)
    Week,
    /// 월별 집계
    Month,
}

impl Granularity {
    /// 집계 단위의 표시 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            Granularity::Day => "일별",
            Granularity::Week => "주별",
            Granularity::Month => "월별",
        }
    }

    /// 날짜를 기간 키로 변환합니다.
    ///
    /// 키는 연도가 앞에 오고 0으로 채워지므로 문자열 정렬이 곧
    /// 시간순 정렬입니다.
    ///
    /// - 일: `YYYY-MM-DD`
    /// - 주: `YYYY-Www` (ISO 주차. 목요일이 포함된 첫 주가 그 해의
    ///   1주차이며, 연도는 ISO 주차 기준 연도를 사용)
    /// - 월: `YYYY-MM`
    pub fn period_key(&self, date: NaiveDate) -> String {
        match self {
            Granularity::Day => date.format("%Y-%m-%d").to_string(),
            Granularity::Week => {
                let week = date.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Granularity::Month => date.format("%Y-%m").to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Day => write!(f, "day"),
            Granularity::Week => write!(f, "week"),
            Granularity::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            _ => Err(format!("Unknown granularity: {}", s)),
        }
    }
}
