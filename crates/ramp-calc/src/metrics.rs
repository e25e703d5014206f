//! 排序效益指標
//!
//! 比較未優化（Plain）與優化（Optimized）兩份排程：
//!
//! | 指標 | 定義 |
//! |------|------|
//! | 節省時間 | Plain 總耗時 - Optimized 總耗時（可能為負） |
//! | 稼動率 | 生產時間 / 總耗時 × 100，總耗時為 0 時為 0 |
//! | 稼動率提升 | 稼動率(Optimized) - 稼動率(Plain) |
//! | 回收產能 | floor(節省時間 / 平均週期時間) |
//! | 缺料總數 | 所有明細缺料數量合計 |

use ramp_core::ScheduleResult;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::feasibility::{FeasibilityResolver, ResolvedLine};

/// 比較指標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    /// 節省時間（秒）
    pub time_saved_seconds: Decimal,
    /// 節省時間（分鐘）
    pub time_saved_minutes: Decimal,
    /// 未優化稼動率（%）
    pub utilization_plain: Decimal,
    /// 優化後稼動率（%）
    pub utilization_optimized: Decimal,
    /// 稼動率提升（百分點）
    pub utilization_boost: Decimal,
    /// 節省時間可多做的數量
    pub recovered_units: i64,
    /// 缺料總數
    pub total_shortage: u64,
    pub changeovers_plain: usize,
    pub changeovers_optimized: usize,
}

/// 指標計算器
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// 計算兩份排程的比較指標
    ///
    /// `plain` 與 `optimized` 必須來自同一批 `lines`
    pub fn compare(
        plain: &ScheduleResult,
        optimized: &ScheduleResult,
        lines: &[ResolvedLine],
    ) -> ComparisonMetrics {
        let time_saved_seconds = Self::time_saved(plain, optimized);
        let utilization_plain = Self::utilization(plain);
        let utilization_optimized = Self::utilization(optimized);

        ComparisonMetrics {
            time_saved_seconds,
            time_saved_minutes: time_saved_seconds / Decimal::from(60),
            utilization_plain,
            utilization_optimized,
            utilization_boost: utilization_optimized - utilization_plain,
            recovered_units: Self::recovered_units(time_saved_seconds, Self::mean_cycle_time(lines)),
            total_shortage: FeasibilityResolver::total_shortage(lines),
            changeovers_plain: plain.changeover_count(),
            changeovers_optimized: optimized.changeover_count(),
        }
    }

    /// 節省時間（秒）
    pub fn time_saved(plain: &ScheduleResult, optimized: &ScheduleResult) -> Decimal {
        plain.total_duration_seconds - optimized.total_duration_seconds
    }

    /// 稼動率（%）
    pub fn utilization(result: &ScheduleResult) -> Decimal {
        if result.total_duration_seconds <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        result.production_seconds() / result.total_duration_seconds * Decimal::ONE_HUNDRED
    }

    /// 平均週期時間（沒有明細時為 None）
    pub fn mean_cycle_time(lines: &[ResolvedLine]) -> Option<Decimal> {
        if lines.is_empty() {
            return None;
        }
        let sum: Decimal = lines.iter().map(|r| r.line.cycle_time_seconds).sum();
        Some(sum / Decimal::from(lines.len()))
    }

    /// 回收產能 = floor(節省時間 / 平均週期時間)
    pub fn recovered_units(time_saved_seconds: Decimal, mean_cycle_time: Option<Decimal>) -> i64 {
        match mean_cycle_time {
            Some(mean) if mean > Decimal::ZERO => time_saved_seconds
                .checked_div(mean)
                .and_then(|units| units.floor().to_i64())
                .unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramp_core::{DemandLine, ScheduledBlock, SequenceMode};
    use rstest::rstest;

    fn lines(cases: &[(&str, u32, i64)]) -> Vec<ResolvedLine> {
        let demand: Vec<_> = cases
            .iter()
            .map(|(m, q, c)| DemandLine::new(m.to_string(), *q, Decimal::from(*c)))
            .collect();
        FeasibilityResolver::resolve(&demand)
    }

    #[test]
    fn test_utilization() {
        let blocks = vec![
            ScheduledBlock::production("A".to_string(), Decimal::ZERO, Decimal::from(300), 1, None),
            ScheduledBlock::changeover("B", Decimal::from(300), Decimal::from(100)),
        ];
        let result = ScheduleResult::new(SequenceMode::Plain, blocks);

        assert_eq!(MetricsAggregator::utilization(&result), Decimal::from(75));
    }

    #[test]
    fn test_utilization_of_empty_schedule_is_zero() {
        let result = ScheduleResult::empty(SequenceMode::Plain);
        assert_eq!(MetricsAggregator::utilization(&result), Decimal::ZERO);

        // 只有零長度生產時段
        let blocks = vec![ScheduledBlock::production(
            "A".to_string(),
            Decimal::ZERO,
            Decimal::ZERO,
            0,
            None,
        )];
        let result = ScheduleResult::new(SequenceMode::Plain, blocks);
        assert_eq!(MetricsAggregator::utilization(&result), Decimal::ZERO);
    }

    #[test]
    fn test_mean_cycle_time() {
        let resolved = lines(&[("A", 1, 45), ("B", 1, 60), ("A", 1, 45), ("B", 1, 60)]);
        assert_eq!(
            MetricsAggregator::mean_cycle_time(&resolved),
            Some(Decimal::new(525, 1))
        );
        assert_eq!(MetricsAggregator::mean_cycle_time(&[]), None);
    }

    #[rstest]
    #[case(Decimal::from(1800), Some(Decimal::new(525, 1)), 34)]
    #[case(Decimal::from(100), Some(Decimal::from(50)), 2)]
    #[case(Decimal::from(-100), Some(Decimal::from(30)), -4)]
    #[case(Decimal::from(1800), Some(Decimal::ZERO), 0)]
    #[case(Decimal::from(1800), None, 0)]
    #[case(Decimal::ZERO, Some(Decimal::from(45)), 0)]
    #[case(Decimal::MAX, Some(Decimal::new(1, 28)), 0)]
    fn test_recovered_units(
        #[case] saved: Decimal,
        #[case] mean: Option<Decimal>,
        #[case] expected: i64,
    ) {
        assert_eq!(MetricsAggregator::recovered_units(saved, mean), expected);
    }

    #[test]
    fn test_compare_broken_batch() {
        use crate::sequencing::SequenceBuilder;

        let resolved = lines(&[("A", 40, 45), ("B", 25, 60), ("A", 30, 45), ("B", 15, 60)]);
        let co = Decimal::from(900);
        let plain = SequenceBuilder::build(&resolved, SequenceMode::Plain, co);
        let optimized = SequenceBuilder::build(&resolved, SequenceMode::Optimized, co);

        let metrics = MetricsAggregator::compare(&plain, &optimized, &resolved);

        assert_eq!(metrics.time_saved_seconds, Decimal::from(1800));
        assert_eq!(metrics.time_saved_minutes, Decimal::from(30));
        assert_eq!(metrics.recovered_units, 34);
        assert_eq!(metrics.total_shortage, 0);
        assert_eq!(metrics.changeovers_plain, 3);
        assert_eq!(metrics.changeovers_optimized, 1);

        // 5550 / 8250 與 5550 / 6450
        let expected_plain = Decimal::from(5550) / Decimal::from(8250) * Decimal::ONE_HUNDRED;
        let expected_optimized = Decimal::from(5550) / Decimal::from(6450) * Decimal::ONE_HUNDRED;
        assert_eq!(metrics.utilization_plain, expected_plain);
        assert_eq!(metrics.utilization_optimized, expected_optimized);
        assert!(metrics.utilization_boost > Decimal::from(18));
        assert!(metrics.utilization_boost < Decimal::from(19));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sequencing::SequenceBuilder;
    use proptest::prelude::*;
    use ramp_core::{DemandLine, SequenceMode};

    proptest! {
        #[test]
        fn utilization_is_a_percentage(
            cases in prop::collection::vec((0usize..3, 1u32..100, prop::option::of(0u32..100), 1i64..90), 1..10),
            changeover in 0i64..3600,
        ) {
            let models = ["A", "B", "C"];
            let demand: Vec<_> = cases
                .iter()
                .map(|(m, q, on_hand, c)| {
                    let line = DemandLine::new(models[*m].to_string(), *q, Decimal::from(*c));
                    match on_hand {
                        Some(v) => line.with_material_on_hand(*v),
                        None => line,
                    }
                })
                .collect();
            let resolved = FeasibilityResolver::resolve(&demand);

            for mode in [SequenceMode::Plain, SequenceMode::Optimized] {
                let result = SequenceBuilder::build(&resolved, mode, Decimal::from(changeover));
                let utilization = MetricsAggregator::utilization(&result);
                prop_assert!(utilization >= Decimal::ZERO);
                prop_assert!(utilization <= Decimal::ONE_HUNDRED);
            }
        }
    }
}
