//! 사용자 및 그룹 통계 모듈.
//!
//! 랭킹 외의 통계 뷰를 제공합니다:
//! - 사용자 연간 통계 (합계, 일평균, 최대, 첫/마지막 기록)
//! - 사용자 월별 통계
//! - 사용자 요일별 통계
//! - 그룹 연간 통계
//! - 사용자 요약 (통계 카드용)

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ranking::{avg_per_active_day, YearlyRanking};
use tracker_core::{DayEntry, UserId};

/// 사용자 연간 통계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserYearlyStats {
    /// 사용자 식별자
    pub user_id: UserId,
    /// 연도
    pub year: i32,
    /// 활동일 수 (잔 수 > 0인 날)
    pub days_active: u32,
    /// 총 잔 수
    pub total: u64,
    /// 활동일당 평균 (소수점 둘째 자리)
    pub avg_daily: Decimal,
    /// 하루 최대 잔 수
    pub max_daily: u32,
    /// 첫 기록 날짜
    pub first_entry: Option<NaiveDate>,
    /// 마지막 기록 날짜
    pub last_entry: Option<NaiveDate>,
}

/// 한 사용자의 연간 통계를 계산합니다.
///
/// 기록이 없으면 0과 `None`으로 채워진 결과를 반환합니다.
pub fn build_user_yearly_stats(
    entries: &[DayEntry],
    user_id: UserId,
    year: i32,
) -> UserYearlyStats {
    let mut total = 0u64;
    let mut days_active = 0u32;
    let mut max_daily = 0u32;
    let mut first_entry: Option<NaiveDate> = None;
    let mut last_entry: Option<NaiveDate> = None;

    for entry in entries {
        if entry.user_id != user_id || entry.date.year() != year {
            continue;
        }

        total += entry.count as u64;
        max_daily = max_daily.max(entry.count);
        if entry.count > 0 {
            days_active += 1;
        }

        first_entry = Some(first_entry.map_or(entry.date, |d: NaiveDate| d.min(entry.date)));
        last_entry = Some(last_entry.map_or(entry.date, |d: NaiveDate| d.max(entry.date)));
    }

    UserYearlyStats {
        user_id,
        year,
        days_active,
        total,
        avg_daily: avg_per_active_day(total, days_active),
        max_daily,
        first_entry,
        last_entry,
    }
}

/// 사용자 월별 통계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// 연도
    pub year: i32,
    /// 월 (1-12)
    pub month: u32,
    /// 활동일 수
    pub days_active: u32,
    /// 총 잔 수
    pub total: u64,
    /// 활동일당 평균 (소수점 둘째 자리)
    pub avg_daily: Decimal,
    /// 하루 최대 잔 수
    pub max_daily: u32,
}

/// 한 사용자의 월별 통계를 계산합니다.
///
/// 기록이 있는 달만, 월 오름차순으로 반환합니다.
pub fn build_monthly_stats(entries: &[DayEntry], user_id: UserId, year: i32) -> Vec<MonthlyStats> {
    let mut grouped: BTreeMap<u32, Vec<&DayEntry>> = BTreeMap::new();

    for entry in entries {
        if entry.user_id == user_id && entry.date.year() == year {
            grouped.entry(entry.date.month()).or_default().push(entry);
        }
    }

    grouped
        .into_iter()
        .map(|(month, month_entries)| {
            let total: u64 = month_entries.iter().map(|e| e.count as u64).sum();
            let days_active = month_entries.iter().filter(|e| e.count > 0).count() as u32;
            let max_daily = month_entries.iter().map(|e| e.count).max().unwrap_or(0);

            MonthlyStats {
                year,
                month,
                days_active,
                total,
                avg_daily: avg_per_active_day(total, days_active),
                max_daily,
            }
        })
        .collect()
}

/// 사용자 요일별 통계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayStats {
    /// 요일
    pub weekday: Weekday,
    /// 해당 요일의 기록 일수
    pub days_count: u32,
    /// 총 잔 수
    pub total: u64,
    /// 기록일당 평균 (소수점 둘째 자리)
    pub avg: Decimal,
}

/// 한 사용자의 요일별 통계를 계산합니다.
///
/// 항상 월요일부터 일요일까지 7개 행을 반환합니다.
pub fn build_weekday_stats(entries: &[DayEntry], user_id: UserId) -> Vec<WeekdayStats> {
    const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    let mut totals = [0u64; 7];
    let mut counts = [0u32; 7];

    for entry in entries {
        if entry.user_id != user_id {
            continue;
        }
        let idx = entry.date.weekday().num_days_from_monday() as usize;
        totals[idx] += entry.count as u64;
        counts[idx] += 1;
    }

    WEEKDAYS
        .iter()
        .enumerate()
        .map(|(idx, &weekday)| {
            let avg = if counts[idx] > 0 {
                (Decimal::from(totals[idx]) / Decimal::from(counts[idx]))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            } else {
                Decimal::ZERO
            };
            WeekdayStats {
                weekday,
                days_count: counts[idx],
                total: totals[idx],
                avg,
            }
        })
        .collect()
}

/// 그룹 연간 통계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupYearlyStats {
    /// 연도
    pub year: i32,
    /// 기록이 있는 사용자 수
    pub active_users: u32,
    /// 기록이 있는 날짜 수 (사용자 무관)
    pub days_with_entries: u32,
    /// 그룹 총 잔 수
    pub total: u64,
    /// 기록당 평균 잔 수 (소수점 둘째 자리)
    pub avg_per_entry: Decimal,
    /// 단일 기록 최대 잔 수
    pub max_single_entry: u32,
}

/// 그룹 전체의 연간 통계를 계산합니다.
pub fn build_group_yearly_stats(entries: &[DayEntry], year: i32) -> GroupYearlyStats {
    let year_entries: Vec<&DayEntry> = entries
        .iter()
        .filter(|e| e.date.year() == year)
        .collect();

    let mut users: Vec<UserId> = year_entries.iter().map(|e| e.user_id).collect();
    users.sort();
    users.dedup();

    let mut dates: Vec<NaiveDate> = year_entries.iter().map(|e| e.date).collect();
    dates.sort();
    dates.dedup();

    let total: u64 = year_entries.iter().map(|e| e.count as u64).sum();
    let max_single_entry = year_entries.iter().map(|e| e.count).max().unwrap_or(0);

    let avg_per_entry = if year_entries.is_empty() {
        Decimal::ZERO
    } else {
        (Decimal::from(total) / Decimal::from(year_entries.len() as u64))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    GroupYearlyStats {
        year,
        active_users: users.len() as u32,
        days_with_entries: dates.len() as u32,
        total,
        avg_per_entry,
        max_single_entry,
    }
}

/// 사용자 요약 (통계 카드용).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// 총 잔 수
    pub total: u64,
    /// 활동일당 평균
    pub avg_daily: Decimal,
    /// 활동일 수
    pub days_active: u32,
    /// 그룹 내 순위
    pub position: u32,
    /// 그룹 총 잔 수
    pub group_total: u64,
}

/// 랭킹 행에서 한 사용자의 요약을 추출합니다.
///
/// 연도별 랭킹과 전체 연도 합산 랭킹 어느 쪽에도 동일하게
/// 적용됩니다.
pub fn user_summary(ranking: &[YearlyRanking], user_id: UserId) -> Option<UserSummary> {
    let group_total: u64 = ranking.iter().map(|r| r.total).sum();
    let row = ranking.iter().find(|r| r.user_id == user_id)?;

    Some(UserSummary {
        total: row.total,
        avg_daily: row.avg_daily,
        days_active: row.days_active,
        position: row.position,
        group_total,
    })
}
