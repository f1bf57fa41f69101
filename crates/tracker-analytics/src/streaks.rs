//! 스트릭(연속 기록) 계산 모듈.
//!
//! 한 사용자의 기록에서 가장 긴 음주 스트릭과 가장 긴 금주 스트릭을
//! 계산합니다.
//!
//! # 규칙
//!
//! - "연속"은 달력 날짜가 빈틈없이 이어지는 것을 의미합니다.
//! - 기록이 없는 날(누락)은 음주도 금주도 아니며, 두 스트릭을 모두
//!   끊습니다.
//! - 누락 판정은 순수하게 날짜 차이로만 하며, 연도 경계를 넘어도
//!   별도 리셋은 없습니다.

use serde::{Deserialize, Serialize};
use tracker_core::DayEntry;

/// 스트릭 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// 가장 긴 음주 스트릭 (연속 일수, 잔 수 > 0)
    pub max_drinking: u32,

    /// 가장 긴 금주 스트릭 (연속 일수, 잔 수 = 0)
    pub max_sober: u32,
}

/// 한 사용자의 기록에서 스트릭을 계산합니다.
///
/// 단일 좌→우 스캔으로 두 개의 진행 카운터와 두 개의 최대값을
/// 유지합니다. 입력 순서에 의존하지 않도록 내부에서 날짜순으로
/// 정렬합니다.
///
/// # 매개변수
///
/// * `entries` - 한 사용자의 기록
///
/// # 반환값
///
/// 두 최대값. 기록이 없으면 (0, 0)입니다.
pub fn calculate_streaks(entries: &[DayEntry]) -> StreakSummary {
    if entries.is_empty() {
        return StreakSummary {
            max_drinking: 0,
            max_sober: 0,
        };
    }

    let mut sorted: Vec<&DayEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let mut max_drinking = 0u32;
    let mut max_sober = 0u32;
    let mut current_drinking = 0u32;
    let mut current_sober = 0u32;

    for (i, entry) in sorted.iter().enumerate() {
        if entry.is_drinking_day() {
            current_drinking += 1;
            max_drinking = max_drinking.max(current_drinking);
            current_sober = 0;
        } else {
            current_sober += 1;
            max_sober = max_sober.max(current_sober);
            current_drinking = 0;
        }

        // 다음 기록까지 하루를 넘게 비면 두 카운터 모두 리셋
        if let Some(next) = sorted.get(i + 1) {
            let gap = (next.date - entry.date).num_days();
            if gap > 1 {
                current_drinking = 0;
                current_sober = 0;
            }
        }
    }

    StreakSummary {
        max_drinking,
        max_sober,
    }
}
