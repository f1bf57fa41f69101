//! 일별 기록 정의.
//!
//! 한 사용자가 한 날짜에 기록한 잔 수를 나타냅니다. (사용자, 날짜)당
//! 최대 1개의 기록이 존재하며, 유일성은 외부 저장소에서 보장됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::profile::UserId;
use crate::error::{TrackerError, TrackerResult};

/// 한 사용자의 하루 기록.
///
/// 외부 저장소에서 가져온 뒤에는 불변입니다. 잔 수는 `u32`이므로
/// 음수가 될 수 없고, 날짜는 `NaiveDate`이므로 항상 유효한 달력
/// 날짜입니다. 잘못된 입력은 수집 경계에서 거부됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// 사용자 식별자
    pub user_id: UserId,
    /// 달력 날짜
    pub date: NaiveDate,
    /// 잔 수 (0 이상)
    pub count: u32,
}

impl DayEntry {
    /// 새 기록을 생성합니다.
    pub fn new(user_id: UserId, date: NaiveDate, count: u32) -> Self {
        Self {
            user_id,
            date,
            count,
        }
    }

    /// ISO 날짜 문자열에서 기록을 생성합니다.
    ///
    /// 수집 경계에서 사용하는 헬퍼입니다. 잘못된 날짜 문자열은
    /// `TrackerError::InvalidInput`으로 거부됩니다.
    pub fn from_iso_date(user_id: UserId, date: &str, count: u32) -> TrackerResult<Self> {
        let date = date
            .parse::<NaiveDate>()
            .map_err(|e| TrackerError::InvalidInput(format!("날짜 '{}' 파싱 실패: {}", date, e)))?;

        Ok(Self::new(user_id, date, count))
    }

    /// 음주일 여부 (잔 수 > 0).
    pub fn is_drinking_day(&self) -> bool {
        self.count > 0
    }
}
