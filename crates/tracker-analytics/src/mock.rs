//! 테스트 및 데모용 가상 데이터 생성기.
//!
//! 사용자별 소비 패턴(평균 잔 수, 0잔 확률, 과음일 확률, 금주
//! 스트릭 확률)에 따라 1년치 일별 기록을 생성합니다. 주말에는
//! 평균에 보너스가 붙고, 3~7일짜리 금주 스트릭이 확률적으로
//! 삽입됩니다.
//!
//! RNG를 호출자가 주입하므로 시드를 고정하면 결정적으로 동작합니다.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;

use tracker_core::{DayEntry, UserId};

/// 사용자별 소비 패턴.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserPattern {
    /// 평소 하루 평균 잔 수
    pub avg_count: f64,
    /// 0잔인 날의 확률
    pub zero_prob: f64,
    /// 과음일(10잔 이상)의 확률
    pub high_day_prob: f64,
    /// 금주 스트릭이 시작될 확률 (일 단위)
    pub dry_streak_prob: f64,
}

impl Default for UserPattern {
    fn default() -> Self {
        Self {
            avg_count: 3.0,
            zero_prob: 0.2,
            high_day_prob: 0.1,
            dry_streak_prob: 0.05,
        }
    }
}

/// 가상 데이터 생성기.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    patterns: Vec<(UserId, UserPattern)>,
}

impl MockGenerator {
    /// 빈 생성기를 만듭니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 패턴을 추가합니다.
    pub fn with_pattern(mut self, user_id: UserId, pattern: UserPattern) -> Self {
        self.patterns.push((user_id, pattern));
        self
    }

    /// 한 사용자의 1년치 기록을 생성합니다.
    ///
    /// # 매개변수
    ///
    /// * `rng` - 난수 생성기 (시드 고정 시 결정적)
    /// * `user_id` - 대상 사용자
    /// * `year` - 대상 연도
    /// * `up_to` - 이 날짜 이후의 기록은 생성하지 않음 (진행 중인
    ///   연도 시뮬레이션용)
    pub fn generate_year<R: Rng>(
        &self,
        rng: &mut R,
        user_id: UserId,
        year: i32,
        up_to: Option<NaiveDate>,
    ) -> Vec<DayEntry> {
        let pattern = self
            .patterns
            .iter()
            .find(|(id, _)| *id == user_id)
            .map(|(_, p)| *p)
            .unwrap_or_default();

        let mut entries = Vec::new();
        let mut dry_streak_remaining = 0u32;

        let mut date = NaiveDate::from_ymd_opt(year, 1, 1).expect("1월 1일은 항상 유효함");
        while date.year() == year {
            if let Some(cutoff) = up_to {
                if date > cutoff {
                    break;
                }
            }

            if dry_streak_remaining == 0 && rng.gen::<f64>() < pattern.dry_streak_prob {
                dry_streak_remaining = rng.gen_range(3..8);
            }

            let count = if dry_streak_remaining > 0 {
                dry_streak_remaining -= 1;
                0
            } else {
                generate_count(rng, &pattern, is_weekend(date))
            };

            entries.push(DayEntry::new(user_id, date, count));

            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        entries
    }

    /// 등록된 모든 사용자의 여러 연도 기록을 생성합니다.
    pub fn generate_all<R: Rng>(
        &self,
        rng: &mut R,
        years: &[i32],
        up_to: Option<NaiveDate>,
    ) -> Vec<DayEntry> {
        let mut entries = Vec::new();
        for (user_id, _) in &self.patterns {
            for &year in years {
                entries.extend(self.generate_year(rng, *user_id, year, up_to));
            }
        }
        entries
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 패턴에 따라 하루 잔 수를 생성합니다.
fn generate_count<R: Rng>(rng: &mut R, pattern: &UserPattern, weekend: bool) -> u32 {
    let roll = rng.gen::<f64>();

    if roll < pattern.zero_prob {
        return 0;
    }
    if roll < pattern.zero_prob + pattern.high_day_prob {
        return rng.gen_range(10..15);
    }

    let weekend_bonus = if weekend { 2.0 } else { 0.0 };
    let base = pattern.avg_count + weekend_bonus;
    let variation = rng.gen_range(-2i32..2) as f64;

    (base + variation).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn uid(i: u128) -> UserId {
        UserId(Uuid::from_u128(i))
    }

    #[test]
    fn test_generates_full_year() {
        let generator = MockGenerator::new().with_pattern(uid(1), UserPattern::default());
        let mut rng = StdRng::seed_from_u64(42);

        let entries = generator.generate_year(&mut rng, uid(1), 2025, None);

        assert_eq!(entries.len(), 365);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(
            entries.last().unwrap().date,
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_leap_year_has_366_days() {
        let generator = MockGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        let entries = generator.generate_year(&mut rng, uid(1), 2024, None);
        assert_eq!(entries.len(), 366);
    }

    #[test]
    fn test_cutoff_stops_generation() {
        let generator = MockGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let cutoff = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let entries = generator.generate_year(&mut rng, uid(1), 2026, Some(cutoff));

        assert_eq!(entries.len(), 15);
        assert_eq!(entries.last().unwrap().date, cutoff);
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let generator = MockGenerator::new().with_pattern(uid(1), UserPattern::default());

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let a = generator.generate_year(&mut rng_a, uid(1), 2025, None);
        let b = generator.generate_year(&mut rng_b, uid(1), 2025, None);

        assert_eq!(a, b);
    }

    #[test]
    fn test_always_zero_pattern() {
        let pattern = UserPattern {
            avg_count: 0.0,
            zero_prob: 1.0,
            high_day_prob: 0.0,
            dry_streak_prob: 0.0,
        };
        let generator = MockGenerator::new().with_pattern(uid(1), pattern);
        let mut rng = StdRng::seed_from_u64(1);

        let entries = generator.generate_year(&mut rng, uid(1), 2025, None);
        assert!(entries.iter().all(|e| e.count == 0));
    }

    #[test]
    fn test_generate_all_covers_users_and_years() {
        let generator = MockGenerator::new()
            .with_pattern(uid(1), UserPattern::default())
            .with_pattern(uid(2), UserPattern::default());
        let mut rng = StdRng::seed_from_u64(3);

        let entries = generator.generate_all(&mut rng, &[2024, 2025], None);

        // 2명 × (366 + 365)
        assert_eq!(entries.len(), 2 * (366 + 365));
        assert!(entries.iter().any(|e| e.user_id == uid(2)));
    }
}
