//! 可生產量計算（齊套檢查）

use ramp_core::DemandLine;
use serde::{Deserialize, Serialize};

/// 可生產量計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLine {
    /// 原始需求明細
    pub line: DemandLine,
    /// 可生產數量 = min(需求, 現有物料)
    pub feasible_qty: u32,
    /// 缺料數量 = 需求 - 可生產
    pub shortage: u32,
}

impl ResolvedLine {
    pub fn model(&self) -> &str {
        &self.line.model
    }

    /// 是否缺料
    pub fn is_short(&self) -> bool {
        self.shortage > 0
    }
}

/// 可生產量計算器
pub struct FeasibilityResolver;

impl FeasibilityResolver {
    /// 計算單筆明細的可生產量
    ///
    /// 沒有現有物料資料時不受限制：可生產量 = 需求數量
    pub fn resolve_line(line: &DemandLine) -> ResolvedLine {
        let feasible_qty = match line.material_on_hand {
            Some(on_hand) => line.requested_qty.min(on_hand),
            None => line.requested_qty,
        };

        ResolvedLine {
            line: line.clone(),
            feasible_qty,
            shortage: line.requested_qty - feasible_qty,
        }
    }

    /// 計算所有明細（保留輸入順序）
    pub fn resolve(lines: &[DemandLine]) -> Vec<ResolvedLine> {
        lines.iter().map(Self::resolve_line).collect()
    }

    /// 缺料明細（保留輸入順序）
    pub fn shortage_lines(resolved: &[ResolvedLine]) -> Vec<ResolvedLine> {
        resolved.iter().filter(|r| r.is_short()).cloned().collect()
    }

    /// 缺料總數
    pub fn total_shortage(resolved: &[ResolvedLine]) -> u64 {
        resolved.iter().map(|r| u64::from(r.shortage)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramp_core::Priority;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[test]
    fn test_material_constrained_line() {
        // 急件需求 10，現有物料只有 5
        let line = DemandLine::new("MacBook Pro M4".to_string(), 10, Decimal::from(45))
            .with_priority(Priority::Hot)
            .with_material_on_hand(5);

        let resolved = FeasibilityResolver::resolve_line(&line);

        assert_eq!(resolved.feasible_qty, 5);
        assert_eq!(resolved.shortage, 5);
        assert!(resolved.is_short());
        assert_eq!(resolved.line, line);
    }

    #[test]
    fn test_unconstrained_line() {
        let line = DemandLine::new("MacBook Air M3".to_string(), 40, Decimal::from(45));

        let resolved = FeasibilityResolver::resolve_line(&line);

        assert_eq!(resolved.feasible_qty, 40);
        assert_eq!(resolved.shortage, 0);
        assert!(!resolved.is_short());
    }

    #[rstest]
    #[case(10, 0, 0, 10)]
    #[case(10, 10, 10, 0)]
    #[case(10, 25, 10, 0)]
    #[case(1, 0, 0, 1)]
    fn test_feasible_is_min_of_demand_and_material(
        #[case] requested: u32,
        #[case] on_hand: u32,
        #[case] feasible: u32,
        #[case] shortage: u32,
    ) {
        let line = DemandLine::new("X".to_string(), requested, Decimal::ONE)
            .with_material_on_hand(on_hand);

        let resolved = FeasibilityResolver::resolve_line(&line);
        assert_eq!(resolved.feasible_qty, feasible);
        assert_eq!(resolved.shortage, shortage);
        assert_eq!(resolved.feasible_qty + resolved.shortage, requested);
    }

    #[test]
    fn test_shortage_lines_and_total() {
        let lines = vec![
            DemandLine::new("A".to_string(), 10, Decimal::ONE).with_material_on_hand(4),
            DemandLine::new("B".to_string(), 10, Decimal::ONE),
            DemandLine::new("C".to_string(), 8, Decimal::ONE).with_material_on_hand(0),
        ];

        let resolved = FeasibilityResolver::resolve(&lines);
        assert_eq!(resolved.len(), 3);

        let short = FeasibilityResolver::shortage_lines(&resolved);
        let models: Vec<_> = short.iter().map(|r| r.model()).collect();
        assert_eq!(models, vec!["A", "C"]);

        assert_eq!(FeasibilityResolver::total_shortage(&resolved), 14);
    }
}
