//! 전년 대비 비교 모듈.
//!
//! 한 사용자의 대상 연도와 직전 연도를 같은 경과 기간(1월 1일부터
//! "오늘"까지)으로 제한하여 비교합니다.
//!
//! # 규칙
//!
//! - 경과 기간 매칭은 경과 일수가 아니라 달력상의 월-일로 합니다.
//!   윤년을 사이에 두고도 같은 달력 날짜끼리 비교됩니다.
//! - 일별 매칭은 월-일 문자열로 하므로, 윤년의 2월 29일은 평년에
//!   짝이 없어 일수 집계에서 제외됩니다.
//! - 전년 누계가 0이면 백분율은 0입니다 (0으로 나누지 않음).

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tracker_core::DayEntry;

/// 전년 대비 비교 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearComparison {
    /// 대상 연도
    pub year: i32,

    /// 직전 연도
    pub previous_year: i32,

    /// 오늘의 잔 수 (기록 없으면 0)
    pub today_count: u32,

    /// 작년 같은 날짜의 잔 수 (기록 없으면 0)
    pub previous_day_count: u32,

    /// 오늘 vs 작년 같은 날짜의 차이 (부호 있음)
    pub day_difference: i64,

    /// 대상 연도 누계 (1월 1일 ~ 오늘)
    pub ytd_current: u64,

    /// 직전 연도 누계 (같은 경과 기간)
    pub ytd_previous: u64,

    /// 누계 차이 (부호 있음)
    pub ytd_difference: i64,

    /// 누계 변화율 (%). 전년 누계가 0이면 0 (소수점 첫째 자리 반올림)
    pub ytd_change_pct: Decimal,

    /// 대상 연도가 더 많았던 날 수
    pub days_up: u32,

    /// 같았던 날 수
    pub days_equal: u32,

    /// 대상 연도가 더 적었던 날 수
    pub days_down: u32,
}

/// 대상 연도와 직전 연도를 비교합니다.
///
/// # 매개변수
///
/// * `entries` - 한 사용자의 기록. 두 연도 외의 기록은 무시됩니다.
/// * `year` - 대상 연도
/// * `today` - 경과 기간의 끝 날짜 (이 날짜의 월-일까지 포함)
///
/// # 반환값
///
/// 비교 결과. 어느 한 해의 기록이 없어도 에러가 아니라 0으로
/// 채워진 결과를 반환합니다.
pub fn compare_years(entries: &[DayEntry], year: i32, today: NaiveDate) -> YearComparison {
    let previous_year = year - 1;
    let cutoff = today.format("%m-%d").to_string();
    let today_key = cutoff.clone();

    // 연도별로 월-일 키 → 잔 수 매핑 구성 (경과 기간으로 제한)
    let current = month_day_map(entries, year, &cutoff);
    let previous = month_day_map(entries, previous_year, &cutoff);

    let today_count = current.get(&today_key).copied().unwrap_or(0);
    let previous_day_count = previous.get(&today_key).copied().unwrap_or(0);

    let ytd_current: u64 = current.values().map(|&c| c as u64).sum();
    let ytd_previous: u64 = previous.values().map(|&c| c as u64).sum();
    let ytd_difference = ytd_current as i64 - ytd_previous as i64;

    let ytd_change_pct = if ytd_previous > 0 {
        (Decimal::from(ytd_difference) / Decimal::from(ytd_previous) * dec!(100))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    // 월-일 짝이 있는 날만 집계 (2월 29일은 평년에 짝이 없음)
    let mut days_up = 0u32;
    let mut days_equal = 0u32;
    let mut days_down = 0u32;

    for (month_day, &count) in &current {
        if let Some(&prev_count) = previous.get(month_day) {
            match count.cmp(&prev_count) {
                std::cmp::Ordering::Greater => days_up += 1,
                std::cmp::Ordering::Equal => days_equal += 1,
                std::cmp::Ordering::Less => days_down += 1,
            }
        }
    }

    YearComparison {
        year,
        previous_year,
        today_count,
        previous_day_count,
        day_difference: today_count as i64 - previous_day_count as i64,
        ytd_current,
        ytd_previous,
        ytd_difference,
        ytd_change_pct,
        days_up,
        days_equal,
        days_down,
    }
}

/// 한 연도의 기록을 월-일 키 매핑으로 변환합니다.
///
/// `cutoff`(월-일 문자열) 이후의 기록은 제외합니다. 키가 0으로
/// 채워진 월-일이므로 문자열 비교가 곧 날짜 비교입니다.
fn month_day_map(entries: &[DayEntry], year: i32, cutoff: &str) -> BTreeMap<String, u32> {
    entries
        .iter()
        .filter(|e| e.date.year() == year)
        .filter_map(|e| {
            let key = e.date.format("%m-%d").to_string();
            (key.as_str() <= cutoff).then_some((key, e.count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::UserId;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(y: i32, m: u32, d: u32, count: u32) -> DayEntry {
        DayEntry::new(UserId(Uuid::from_u128(1)), date(y, m, d), count)
    }

    #[test]
    fn test_same_day_difference() {
        let entries = vec![entry(2025, 3, 10, 5), entry(2024, 3, 10, 2)];
        let cmp = compare_years(&entries, 2025, date(2025, 3, 10));

        assert_eq!(cmp.today_count, 5);
        assert_eq!(cmp.previous_day_count, 2);
        assert_eq!(cmp.day_difference, 3);
    }

    #[test]
    fn test_ytd_totals_and_pct() {
        let entries = vec![
            entry(2025, 1, 5, 10),
            entry(2025, 2, 1, 10),
            entry(2024, 1, 5, 5),
            entry(2024, 2, 1, 5),
        ];
        let cmp = compare_years(&entries, 2025, date(2025, 3, 1));

        assert_eq!(cmp.ytd_current, 20);
        assert_eq!(cmp.ytd_previous, 10);
        assert_eq!(cmp.ytd_difference, 10);
        assert_eq!(cmp.ytd_change_pct, dec!(100.0));
    }

    #[test]
    fn test_ytd_pct_rounds_midpoint_up() {
        // 41 / 400 * 100 = 10.25 → 10.3 (은행가 반올림이면 10.2가 됨)
        let entries = vec![entry(2025, 1, 5, 441), entry(2024, 1, 5, 400)];
        let cmp = compare_years(&entries, 2025, date(2025, 3, 1));

        assert_eq!(cmp.ytd_change_pct, dec!(10.3));
    }

    #[test]
    fn test_zero_previous_ytd_yields_zero_pct() {
        // 전년 누계 0, 올해 누계 50 → 백분율 0, 차이 +50
        let entries = vec![entry(2025, 1, 10, 50)];
        let cmp = compare_years(&entries, 2025, date(2025, 2, 1));

        assert_eq!(cmp.ytd_current, 50);
        assert_eq!(cmp.ytd_previous, 0);
        assert_eq!(cmp.ytd_difference, 50);
        assert_eq!(cmp.ytd_change_pct, Decimal::ZERO);
    }

    #[test]
    fn test_entries_after_cutoff_excluded() {
        let entries = vec![
            entry(2025, 1, 10, 3),
            entry(2025, 6, 1, 99), // 경과 기간 밖
            entry(2024, 1, 10, 1),
            entry(2024, 6, 1, 99), // 경과 기간 밖
        ];
        let cmp = compare_years(&entries, 2025, date(2025, 2, 1));

        assert_eq!(cmp.ytd_current, 3);
        assert_eq!(cmp.ytd_previous, 1);
    }

    #[test]
    fn test_day_tally() {
        let entries = vec![
            entry(2025, 1, 1, 3), // up (3 > 1)
            entry(2024, 1, 1, 1),
            entry(2025, 1, 2, 2), // equal
            entry(2024, 1, 2, 2),
            entry(2025, 1, 3, 0), // down (0 < 4)
            entry(2024, 1, 3, 4),
            entry(2025, 1, 4, 7), // 짝 없음 → 집계 제외
        ];
        let cmp = compare_years(&entries, 2025, date(2025, 1, 31));

        assert_eq!(cmp.days_up, 1);
        assert_eq!(cmp.days_equal, 1);
        assert_eq!(cmp.days_down, 1);
    }

    #[test]
    fn test_leap_day_has_no_partner() {
        // 2024-02-29는 2023년에 짝이 없음 → 일수 집계에서 제외,
        // 누계에는 포함
        let entries = vec![
            entry(2024, 2, 28, 2),
            entry(2024, 2, 29, 5),
            entry(2023, 2, 28, 1),
        ];
        let cmp = compare_years(&entries, 2024, date(2024, 3, 1));

        assert_eq!(cmp.ytd_current, 7);
        assert_eq!(cmp.ytd_previous, 1);
        assert_eq!(cmp.days_up, 1); // 02-28만 비교됨
        assert_eq!(cmp.days_equal, 0);
        assert_eq!(cmp.days_down, 0);
    }

    #[test]
    fn test_leap_day_cutoff_includes_prior_feb_28() {
        // 오늘이 2024-02-29이면 전년 경과 기간은 02-28까지
        let entries = vec![entry(2024, 2, 29, 3), entry(2023, 2, 28, 2)];
        let cmp = compare_years(&entries, 2024, date(2024, 2, 29));

        assert_eq!(cmp.today_count, 3);
        assert_eq!(cmp.previous_day_count, 0); // 전년에 02-29 없음
        assert_eq!(cmp.ytd_previous, 2);
    }

    #[test]
    fn test_serializes_for_presentation_layer() {
        let entries = vec![entry(2025, 3, 10, 5), entry(2024, 3, 10, 2)];
        let cmp = compare_years(&entries, 2025, date(2025, 3, 10));

        let json = serde_json::to_string(&cmp).unwrap();
        let parsed: YearComparison = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, cmp);
    }

    #[test]
    fn test_no_data_renders_zeroes() {
        let cmp = compare_years(&[], 2025, date(2025, 5, 1));

        assert_eq!(cmp.ytd_current, 0);
        assert_eq!(cmp.ytd_previous, 0);
        assert_eq!(cmp.ytd_change_pct, Decimal::ZERO);
        assert_eq!(cmp.days_up + cmp.days_equal + cmp.days_down, 0);
    }
}
