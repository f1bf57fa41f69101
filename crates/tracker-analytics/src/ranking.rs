//! 연간 랭킹 모듈.
//!
//! 연도별 사용자 랭킹과 "전체 연도" 합산 랭킹을 계산합니다.
//!
//! # 전체 연도 합산 규칙
//!
//! 여러 뷰에서 반복되는 패턴을 [`aggregate_all_years`] 하나로
//! 묶었습니다: 사용자별 (합계, 활동일) 쌍을 연도에 걸쳐 먼저
//! 합산한 뒤, 그 합에서 일평균을 다시 계산합니다. 연도별 평균을
//! 평균 내거나 연도별 순위를 평균 내는 일은 없습니다.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use chrono::Datelike;
use tracker_core::{DayEntry, Profile, UserId};

/// 연간 랭킹 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRanking {
    /// 사용자 식별자
    pub user_id: UserId,
    /// 표시 이름
    pub name: String,
    /// 차트 색상
    pub color: String,
    /// 연도 (합산 행에서는 처음 만난 연도가 유지됨)
    pub year: i32,
    /// 총 잔 수
    pub total: u64,
    /// 활동일당 평균 (소수점 둘째 자리 반올림, 활동일 0이면 0)
    pub avg_daily: Decimal,
    /// 활동일 수 (잔 수 > 0인 날)
    pub days_active: u32,
    /// 순위 (1부터)
    pub position: u32,
}

/// (합계, 활동일) 쌍에서 일평균을 계산합니다.
///
/// 합산 뷰와 연도별 뷰가 모두 이 함수를 사용하므로 파생 비율의
/// 계산 방식이 갈라질 수 없습니다.
pub(crate) fn avg_per_active_day(total: u64, days_active: u32) -> Decimal {
    if days_active == 0 {
        return Decimal::ZERO;
    }
    // 0.5는 짝수가 아니라 항상 위로 (1.125 → 1.13)
    (Decimal::from(total) / Decimal::from(days_active))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// 합계 내림차순으로 정렬하고 순위를 다시 부여합니다.
///
/// 정렬은 안정적이므로 동점은 기존 순서(명단 순서 또는 처음 만난
/// 순서)를 유지합니다.
fn assign_positions(rows: &mut [YearlyRanking]) {
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx as u32 + 1;
    }
}

/// 한 연도의 사용자 랭킹을 계산합니다.
///
/// # 매개변수
///
/// * `entries` - 일별 기록. 대상 연도 외의 기록은 무시됩니다.
/// * `profiles` - 추적 대상 명단 (동점 처리 순서)
/// * `year` - 대상 연도
///
/// # 반환값
///
/// 합계 내림차순의 랭킹 행. 기록이 없는 사용자도 0으로 포함됩니다.
pub fn build_yearly_ranking(
    entries: &[DayEntry],
    profiles: &[Profile],
    year: i32,
) -> Vec<YearlyRanking> {
    let mut rows: Vec<YearlyRanking> = profiles
        .iter()
        .map(|profile| {
            let mut total = 0u64;
            let mut days_active = 0u32;

            for entry in entries {
                if entry.user_id == profile.id && entry.date.year() == year {
                    total += entry.count as u64;
                    if entry.count > 0 {
                        days_active += 1;
                    }
                }
            }

            YearlyRanking {
                user_id: profile.id,
                name: profile.name.clone(),
                color: profile.color.clone(),
                year,
                total,
                avg_daily: avg_per_active_day(total, days_active),
                days_active,
                position: 0,
            }
        })
        .collect();

    assign_positions(&mut rows);

    debug!(year, rows = rows.len(), "Yearly ranking built");

    rows
}

/// 연도별 랭킹 행을 전체 연도 합산 랭킹으로 축약합니다.
///
/// 사용자별로 합계와 활동일을 먼저 합산한 뒤 일평균을 그 합에서
/// 다시 계산하고, 합산 합계 내림차순으로 순위를 다시 부여합니다.
/// 동점은 처음 만난 순서를 유지합니다 (안정 정렬).
///
/// # 매개변수
///
/// * `rows` - 여러 연도의 랭킹 행
pub fn aggregate_all_years(rows: &[YearlyRanking]) -> Vec<YearlyRanking> {
    let mut aggregated: Vec<YearlyRanking> = Vec::new();
    let mut index: HashMap<UserId, usize> = HashMap::new();

    for row in rows {
        match index.get(&row.user_id) {
            Some(&i) => {
                aggregated[i].total += row.total;
                aggregated[i].days_active += row.days_active;
            }
            None => {
                index.insert(row.user_id, aggregated.len());
                aggregated.push(row.clone());
            }
        }
    }

    for row in &mut aggregated {
        row.avg_daily = avg_per_active_day(row.total, row.days_active);
    }

    assign_positions(&mut aggregated);

    aggregated
}
