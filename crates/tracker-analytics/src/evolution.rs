//! 기간별 시계열 집계 모듈.
//!
//! 일별 기록을 일/주/월 버킷으로 묶어 사용자별 합계와 그룹 평균을
//! 계산합니다. 대시보드의 시간 추이 차트가 소비하는 데이터입니다.
//!
//! # 집계 규칙
//!
//! - 버킷 키는 연도가 앞에 오고 0으로 채워지므로 문자열 정렬이 곧
//!   시간순 정렬입니다 ([`Granularity::period_key`] 참조).
//! - 버킷에 기록이 없는 사용자는 누락이 아니라 0으로 보고됩니다.
//! - 평균은 활동 사용자 수가 아닌 전체 추적 대상 수로 나누며,
//!   소수점 첫째 자리까지 반올림합니다.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use tracker_core::{DayEntry, Granularity, Profile, UserId};

/// 한 기간 버킷의 집계 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionPoint {
    /// 기간 키 (예: "2025-03-07", "2025-W10", "2025-03")
    pub period: String,

    /// 사용자별 합계. 모든 추적 대상 사용자가 항상 포함됩니다.
    pub totals: BTreeMap<UserId, u32>,

    /// 그룹 평균 (소수점 첫째 자리 반올림)
    pub average: Decimal,
}

/// 기록을 기간 버킷으로 집계합니다.
///
/// # 매개변수
///
/// * `entries` - 일별 기록 (한 명 또는 여러 명, 순서 무관)
/// * `profiles` - 추적 대상 명단
/// * `granularity` - 집계 단위 (일/주/월)
///
/// # 반환값
///
/// 기간 키 오름차순의 버킷 목록. 기록이 비어 있으면 빈 벡터를
/// 반환합니다.
pub fn build_evolution(
    entries: &[DayEntry],
    profiles: &[Profile],
    granularity: Granularity,
) -> Vec<EvolutionPoint> {
    if entries.is_empty() {
        return Vec::new();
    }

    // 기간별 → 사용자별 합계로 그룹화 (BTreeMap이 키 순서를 보장)
    let mut grouped: BTreeMap<String, BTreeMap<UserId, u32>> = BTreeMap::new();

    for entry in entries {
        let key = granularity.period_key(entry.date);
        let bucket = grouped.entry(key).or_default();
        *bucket.entry(entry.user_id).or_insert(0) += entry.count;
    }

    debug!(
        entries = entries.len(),
        buckets = grouped.len(),
        granularity = %granularity,
        "Evolution series built"
    );

    let user_count = Decimal::from(profiles.len() as u64);

    grouped
        .into_iter()
        .map(|(period, sums)| {
            // 모든 추적 대상에 값이 있도록 0을 채움
            let totals: BTreeMap<UserId, u32> = profiles
                .iter()
                .map(|p| (p.id, sums.get(&p.id).copied().unwrap_or(0)))
                .collect();

            let sum: u32 = totals.values().sum();
            let average = if profiles.is_empty() {
                Decimal::ZERO
            } else {
                // 0.5는 짝수가 아니라 항상 위로 (0.25 → 0.3)
                (Decimal::from(sum) / user_count)
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            };

            EvolutionPoint {
                period,
                totals,
                average,
            }
        })
        .collect()
}
