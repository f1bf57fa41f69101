//! 집계 및 파생 통계 엔진.
//!
//! 외부 저장소에서 가져온 일별 기록(날짜 + 잔 수)을 입력으로 받아
//! 파생 뷰를 생성합니다:
//! - 기간별 시계열 (일/주/월 버킷)
//! - 연속 기록 (음주/금주 스트릭)
//! - 구간별 분포 히스토그램
//! - 전년 대비 비교
//! - 연간 랭킹 및 사용자/그룹 통계
//!
//! 모든 함수는 메모리에 적재된 데이터에 대한 순수 함수입니다.
//! I/O도 내부 상태도 없으므로 동일한 입력은 항상 동일한 출력을
//! 생성하며, 호출마다 전체를 다시 계산합니다.
//!
//! # Re-exports
//!
//! - [`evolution`]: 기간별 시계열 집계 (EvolutionPoint)
//! - [`streaks`]: 스트릭 계산 (StreakSummary)
//! - [`distribution`]: 구간별 분포 (RangeSlot)
//! - [`comparison`]: 전년 대비 비교 (YearComparison)
//! - [`ranking`]: 연간 랭킹 및 전체 연도 합산 (YearlyRanking)
//! - [`stats`]: 사용자/그룹 통계
//! - [`mock`]: 테스트용 가상 데이터 생성기

pub mod comparison;
pub mod distribution;
pub mod evolution;
pub mod mock;
pub mod ranking;
pub mod stats;
pub mod streaks;

// Evolution 모듈 re-exports
pub use evolution::{build_evolution, EvolutionPoint};

// Streaks 모듈 re-exports
pub use streaks::{calculate_streaks, StreakSummary};

// Distribution 모듈 re-exports
pub use distribution::{build_distribution, CountRange, RangeSlot};

// Comparison 모듈 re-exports
pub use comparison::{compare_years, YearComparison};

// Ranking 모듈 re-exports
pub use ranking::{aggregate_all_years, build_yearly_ranking, YearlyRanking};

// Stats 모듈 re-exports
pub use stats::{
    build_group_yearly_stats, build_monthly_stats, build_user_yearly_stats, build_weekday_stats,
    user_summary, GroupYearlyStats, MonthlyStats, UserSummary, UserYearlyStats, WeekdayStats,
};

// Mock 모듈 re-exports
pub use mock::{MockGenerator, UserPattern};
