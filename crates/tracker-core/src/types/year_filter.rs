//! 연도 필터 정의.
//!
//! 대시보드의 연도 선택(현재 연도 / 전체 / 특정 연도)을 나타냅니다.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 연도 선택 필터.
///
/// 직렬화 형식은 숫자(특정 연도) 또는 `"current"`/`"all"` 문자열입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearFilter {
    /// 특정 연도
    Year(i32),
    /// 현재 연도
    Current,
    /// 전체 연도 합산
    All,
}

impl YearFilter {
    /// 필터를 구체적인 연도로 해석합니다.
    ///
    /// `All`은 단일 연도로 해석되지 않으므로 `None`을 반환합니다.
    pub fn resolve(&self, current_year: i32) -> Option<i32> {
        match self {
            YearFilter::Year(year) => Some(*year),
            YearFilter::Current => Some(current_year),
            YearFilter::All => None,
        }
    }

    /// 전체 연도 합산 여부.
    pub fn is_all(&self) -> bool {
        matches!(self, YearFilter::All)
    }
}

impl Default for YearFilter {
    fn default() -> Self {
        Self::Current
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::Year(year) => write!(f, "{}", year),
            YearFilter::Current => write!(f, "current"),
            YearFilter::All => write!(f, "all"),
        }
    }
}

impl Serialize for YearFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YearFilter::Year(year) => serializer.serialize_i32(*year),
            YearFilter::Current => serializer.serialize_str("current"),
            YearFilter::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for YearFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(year) => Ok(YearFilter::Year(year)),
            Raw::Text(s) => match s.as_str() {
                "current" => Ok(YearFilter::Current),
                "all" => Ok(YearFilter::All),
                other => Err(D::Error::custom(format!("unknown year filter: {}", other))),
            },
        }
    }
}
