//! 同機種合併

use ramp_core::Priority;
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::feasibility::ResolvedLine;

/// 合併後的機種群組
#[derive(Debug, Clone, PartialEq)]
pub struct ModelGroup {
    /// 機種
    pub model: String,

    /// 群組優先級：取成員中最高者（Hot 優先）
    pub priority: Option<Priority>,

    /// 需求數量合計（參考用）
    pub requested_qty: u64,

    /// 可生產數量合計
    pub feasible_qty: u64,

    /// 週期時間（取第一次出現的明細）
    pub cycle_time_seconds: Decimal,

    /// 第一次出現在輸入中的位置
    pub first_seen: usize,

    /// 被合併的需求明細
    pub source_line_ids: Vec<Uuid>,
}

impl ModelGroup {
    fn from_first(line: &ResolvedLine, first_seen: usize) -> Self {
        Self {
            model: line.line.model.clone(),
            priority: line.line.priority,
            requested_qty: u64::from(line.line.requested_qty),
            feasible_qty: u64::from(line.feasible_qty),
            cycle_time_seconds: line.line.cycle_time_seconds,
            first_seen,
            source_line_ids: vec![line.line.id],
        }
    }

    fn absorb(&mut self, line: &ResolvedLine) {
        self.requested_qty += u64::from(line.line.requested_qty);
        self.feasible_qty += u64::from(line.feasible_qty);
        self.priority = match (self.priority, line.line.priority) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.source_line_ids.push(line.line.id);
    }

    /// 排序權重，未標記者視為一般件
    pub fn priority_rank(&self) -> u8 {
        self.priority.unwrap_or(Priority::Standard).rank()
    }
}

/// 合併計算器
pub struct ConsolidationCalculator;

impl ConsolidationCalculator {
    /// 依機種合併，群組順序 = 機種第一次出現的順序
    pub fn consolidate(lines: &[ResolvedLine]) -> Vec<ModelGroup> {
        let mut groups: Vec<ModelGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for (position, line) in lines.iter().enumerate() {
            match index.get(line.line.model.as_str()) {
                Some(&pos) => groups[pos].absorb(line),
                None => {
                    index.insert(line.line.model.as_str(), groups.len());
                    groups.push(ModelGroup::from_first(line, position));
                }
            }
        }

        groups
    }

    /// 依（優先級, 第一次出現順序）排序
    pub fn sort_by_priority(groups: &mut [ModelGroup]) {
        groups.sort_by_key(|g| (g.priority_rank(), g.first_seen));
    }
}
