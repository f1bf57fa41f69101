//! 구간별 분포 모듈.
//!
//! 일별 잔 수를 고정된 구간(0, 1–2, 3–5, 6–9, 10+)으로 분류하여
//! 히스토그램을 만듭니다.
//!
//! # 규칙
//!
//! - 각 기록은 잔 수에 따라 정확히 하나의 구간에 속합니다.
//! - 백분율 = 구간 일수 / 전체 기록 수 × 100, 정수로 반올림.
//!   기록이 없으면 모든 구간의 백분율이 0입니다.
//! - "전체 기간" 뷰는 여러 연도의 기록을 그대로 전달하면 됩니다.
//!   일수가 먼저 합산된 뒤 백분율이 계산되며, 연도별 백분율을
//!   평균 내는 일은 없습니다.

use serde::{Deserialize, Serialize};
use tracker_core::DayEntry;

/// 잔 수 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountRange {
    /// 0잔
    Zero,
    /// 1–2잔
    OneToTwo,
    /// 3–5잔
    ThreeToFive,
    /// 6–9잔
    SixToNine,
    /// 10잔 이상
    TenPlus,
}

impl CountRange {
    /// 모든 구간을 표시 순서대로 반환합니다.
    pub const ALL: [CountRange; 5] = [
        CountRange::Zero,
        CountRange::OneToTwo,
        CountRange::ThreeToFive,
        CountRange::SixToNine,
        CountRange::TenPlus,
    ];

    /// 잔 수를 구간으로 분류합니다.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => CountRange::Zero,
            1..=2 => CountRange::OneToTwo,
            3..=5 => CountRange::ThreeToFive,
            6..=9 => CountRange::SixToNine,
            _ => CountRange::TenPlus,
        }
    }

    /// 구간의 표시 레이블.
    pub fn label(&self) -> &'static str {
        match self {
            CountRange::Zero => "0",
            CountRange::OneToTwo => "1-2",
            CountRange::ThreeToFive => "3-5",
            CountRange::SixToNine => "6-9",
            CountRange::TenPlus => "10+",
        }
    }
}

/// 한 구간의 분포 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSlot {
    /// 구간
    pub range: CountRange,
    /// 구간에 속한 일수
    pub days: u32,
    /// 전체 대비 백분율 (정수 반올림)
    pub percentage: u32,
}

/// 기록의 구간별 분포를 계산합니다.
///
/// # 매개변수
///
/// * `entries` - 일별 기록 (단일 연도 또는 전체 기간)
///
/// # 반환값
///
/// 표시 순서대로 항상 5개의 구간. 기록이 없어도 에러가 아니라
/// 모두 0인 구간이 반환됩니다.
pub fn build_distribution(entries: &[DayEntry]) -> Vec<RangeSlot> {
    let mut counts = [0u32; 5];

    for entry in entries {
        let idx = CountRange::ALL
            .iter()
            .position(|r| *r == CountRange::from_count(entry.count))
            .unwrap_or(0);
        counts[idx] += 1;
    }

    let total: u32 = counts.iter().sum();

    CountRange::ALL
        .iter()
        .zip(counts.iter())
        .map(|(&range, &days)| {
            let percentage = if total > 0 {
                ((days as f64 / total as f64) * 100.0).round() as u32
            } else {
                0
            };
            RangeSlot {
                range,
                days,
                percentage,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tracker_core::UserId;
    use uuid::Uuid;

    fn entries_with_counts(counts: &[u32]) -> Vec<DayEntry> {
        let id = UserId(Uuid::from_u128(1));
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| DayEntry::new(id, start + chrono::Duration::days(i as i64), c))
            .collect()
    }

    #[test]
    fn test_from_count_boundaries() {
        assert_eq!(CountRange::from_count(0), CountRange::Zero);
        assert_eq!(CountRange::from_count(1), CountRange::OneToTwo);
        assert_eq!(CountRange::from_count(2), CountRange::OneToTwo);
        assert_eq!(CountRange::from_count(3), CountRange::ThreeToFive);
        assert_eq!(CountRange::from_count(5), CountRange::ThreeToFive);
        assert_eq!(CountRange::from_count(6), CountRange::SixToNine);
        assert_eq!(CountRange::from_count(9), CountRange::SixToNine);
        assert_eq!(CountRange::from_count(10), CountRange::TenPlus);
        assert_eq!(CountRange::from_count(42), CountRange::TenPlus);
    }

    #[test]
    fn test_distribution_basic() {
        // [0,1,3,6,10,2] → {0:1, 1-2:2, 3-5:1, 6-9:1, 10+:1}
        let entries = entries_with_counts(&[0, 1, 3, 6, 10, 2]);
        let slots = build_distribution(&entries);

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].days, 1); // 0
        assert_eq!(slots[1].days, 2); // 1-2
        assert_eq!(slots[2].days, 1); // 3-5
        assert_eq!(slots[3].days, 1); // 6-9
        assert_eq!(slots[4].days, 1); // 10+

        // 반올림으로 인해 합계는 100 ± 1
        let pct_sum: u32 = slots.iter().map(|s| s.percentage).sum();
        assert!((99..=101).contains(&pct_sum), "pct_sum = {}", pct_sum);
    }

    #[test]
    fn test_empty_entries_no_division_error() {
        let slots = build_distribution(&[]);

        assert_eq!(slots.len(), 5);
        for slot in &slots {
            assert_eq!(slot.days, 0);
            assert_eq!(slot.percentage, 0);
        }
    }

    #[test]
    fn test_multi_year_counts_sum_before_percentages() {
        // 두 해의 기록: 2024년 0잔 3일, 2025년 0잔 1일 + 2잔 4일.
        // 전체 기간 분포는 일수를 먼저 합산 (0: 4일, 1-2: 4일 → 각 50%)
        let id = UserId(Uuid::from_u128(1));
        let mut entries = Vec::new();
        for d in 1..=3 {
            entries.push(DayEntry::new(
                id,
                NaiveDate::from_ymd_opt(2024, 7, d).unwrap(),
                0,
            ));
        }
        entries.push(DayEntry::new(
            id,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            0,
        ));
        for d in 2..=5 {
            entries.push(DayEntry::new(
                id,
                NaiveDate::from_ymd_opt(2025, 7, d).unwrap(),
                2,
            ));
        }

        let slots = build_distribution(&entries);

        assert_eq!(slots[0].days, 4);
        assert_eq!(slots[0].percentage, 50);
        assert_eq!(slots[1].days, 4);
        assert_eq!(slots[1].percentage, 50);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = CountRange::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["0", "1-2", "3-5", "6-9", "10+"]);
    }
}
