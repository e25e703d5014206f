//! 排序與時段產生

use ramp_core::{Priority, Result, ScheduleResult, ScheduledBlock, SequenceMode, SequencerError};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::feasibility::ResolvedLine;
use crate::grouping::{ConsolidationCalculator, ModelGroup};

/// 排好順序、待產生時段的一筆生產
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceEntry {
    pub model: String,
    pub priority: Option<Priority>,
    /// 排程數量（一律為可生產量，不是需求量）
    pub quantity: u64,
    pub cycle_time_seconds: Decimal,
    pub source_line_ids: Vec<Uuid>,
}

impl SequenceEntry {
    /// 生產時間 = 數量 × 週期時間
    pub fn production_seconds(&self) -> Decimal {
        Decimal::from(self.quantity) * self.cycle_time_seconds
    }
}

impl From<&ResolvedLine> for SequenceEntry {
    fn from(resolved: &ResolvedLine) -> Self {
        Self {
            model: resolved.line.model.clone(),
            priority: resolved.line.priority,
            quantity: u64::from(resolved.feasible_qty),
            cycle_time_seconds: resolved.line.cycle_time_seconds,
            source_line_ids: vec![resolved.line.id],
        }
    }
}

impl From<ModelGroup> for SequenceEntry {
    fn from(group: ModelGroup) -> Self {
        Self {
            model: group.model,
            priority: group.priority,
            quantity: group.feasible_qty,
            cycle_time_seconds: group.cycle_time_seconds,
            source_line_ids: group.source_line_ids,
        }
    }
}

/// 排序器
pub struct SequenceBuilder;

impl SequenceBuilder {
    /// 依模式排序並產生時段
    pub fn build(
        lines: &[ResolvedLine],
        mode: SequenceMode,
        changeover_seconds: Decimal,
    ) -> ScheduleResult {
        let entries = Self::order(lines, mode);
        let blocks = Self::generate_blocks(&entries, changeover_seconds);
        ScheduleResult::new(mode, blocks)
    }

    /// 兩種模式總耗時的上界（秒）
    ///
    /// 上界 = 可生產量合計 × 最大週期時間（絕對值）+ 明細數 × 換線時間，兩種排程的
    /// 每個中間值都不會超過它。任何一步溢出即回傳 `TimeOverflow`。
    pub fn check_horizon(lines: &[ResolvedLine], changeover_seconds: Decimal) -> Result<Decimal> {
        let overflow = || SequencerError::TimeOverflow(format!("{} 筆明細的總耗時", lines.len()));

        let units: u64 = lines.iter().map(|r| u64::from(r.feasible_qty)).sum();
        let max_cycle = lines
            .iter()
            .map(|r| r.line.cycle_time_seconds.abs())
            .max()
            .unwrap_or(Decimal::ZERO);

        // 平均週期時間也要能加總
        lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.line.cycle_time_seconds.abs()))
            .ok_or_else(overflow)?;

        let production = Decimal::from(units)
            .checked_mul(max_cycle)
            .ok_or_else(overflow)?;
        let changeovers = Decimal::from(lines.len())
            .checked_mul(changeover_seconds)
            .ok_or_else(overflow)?;

        production.checked_add(changeovers).ok_or_else(overflow)
    }

    /// 依模式決定生產順序
    pub fn order(lines: &[ResolvedLine], mode: SequenceMode) -> Vec<SequenceEntry> {
        match mode {
            SequenceMode::Plain => Self::plain_order(lines),
            SequenceMode::Optimized => Self::optimized_order(lines),
        }
    }

    /// 照輸入順序，重複機種不合併
    fn plain_order(lines: &[ResolvedLine]) -> Vec<SequenceEntry> {
        lines.iter().map(SequenceEntry::from).collect()
    }

    /// 同機種合併後，依（優先級, 第一次出現順序）排序
    fn optimized_order(lines: &[ResolvedLine]) -> Vec<SequenceEntry> {
        let mut groups = ConsolidationCalculator::consolidate(lines);
        ConsolidationCalculator::sort_by_priority(&mut groups);
        groups.into_iter().map(SequenceEntry::from).collect()
    }

    /// 逐筆產生時段，機種與前一筆不同時先插入換線
    pub fn generate_blocks(
        entries: &[SequenceEntry],
        changeover_seconds: Decimal,
    ) -> Vec<ScheduledBlock> {
        let mut blocks = Vec::with_capacity(entries.len() * 2);
        let mut cursor = Decimal::ZERO;
        let mut previous: Option<&str> = None;

        for entry in entries {
            if previous.is_some_and(|prev| prev != entry.model) {
                blocks.push(ScheduledBlock::changeover(
                    &entry.model,
                    cursor,
                    changeover_seconds,
                ));
                cursor += changeover_seconds;
            }

            let duration = entry.production_seconds();
            blocks.push(
                ScheduledBlock::production(
                    entry.model.clone(),
                    cursor,
                    duration,
                    entry.quantity,
                    entry.priority,
                )
                .with_source_line_ids(entry.source_line_ids.clone()),
            );
            cursor += duration;
            previous = Some(entry.model.as_str());
        }

        blocks
    }
}
