//! 排程結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::demand::Priority;

/// 排序模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceMode {
    /// 照輸入順序（未優化，FIFO）
    Plain,
    /// 同機種合併 + 優先級排序
    Optimized,
}

/// 時段類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// 生產
    Production,
    /// 換線
    Changeover,
}

/// 排程時段（產線時間的最小單位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledBlock {
    /// 時段類型
    pub kind: BlockKind,

    /// 機種（換線時段為 `changeover-to-<機種>`）
    pub model: String,

    /// 開始時間（秒，相對班別開始）
    pub start_seconds: Decimal,

    /// 結束時間（秒）
    pub finish_seconds: Decimal,

    /// 生產數量（換線為 0；合併後可能超過單筆上限）
    pub quantity: u64,

    /// 優先級（僅供顯示）
    pub priority: Option<Priority>,

    /// 來源需求明細
    pub source_line_ids: Vec<Uuid>,
}

impl ScheduledBlock {
    /// 創建生產時段
    pub fn production(
        model: String,
        start_seconds: Decimal,
        duration_seconds: Decimal,
        quantity: u64,
        priority: Option<Priority>,
    ) -> Self {
        Self {
            kind: BlockKind::Production,
            model,
            start_seconds,
            finish_seconds: start_seconds + duration_seconds,
            quantity,
            priority,
            source_line_ids: Vec::new(),
        }
    }

    /// 創建換線時段
    pub fn changeover(to_model: &str, start_seconds: Decimal, duration_seconds: Decimal) -> Self {
        Self {
            kind: BlockKind::Changeover,
            model: format!("changeover-to-{}", to_model),
            start_seconds,
            finish_seconds: start_seconds + duration_seconds,
            quantity: 0,
            priority: None,
            source_line_ids: Vec::new(),
        }
    }

    /// 建構器模式：設置來源需求明細
    pub fn with_source_line_ids(mut self, ids: Vec<Uuid>) -> Self {
        self.source_line_ids = ids;
        self
    }

    /// 時段長度（秒）
    pub fn duration_seconds(&self) -> Decimal {
        self.finish_seconds - self.start_seconds
    }

    pub fn is_production(&self) -> bool {
        self.kind == BlockKind::Production
    }

    pub fn is_changeover(&self) -> bool {
        self.kind == BlockKind::Changeover
    }
}

/// 單次排序結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// 排序模式
    pub mode: SequenceMode,

    /// 依時間排列的時段
    pub blocks: Vec<ScheduledBlock>,

    /// 總耗時（= 最後一個時段的結束時間）
    pub total_duration_seconds: Decimal,
}

impl ScheduleResult {
    /// 由時段列表建立結果
    pub fn new(mode: SequenceMode, blocks: Vec<ScheduledBlock>) -> Self {
        let total_duration_seconds = blocks
            .last()
            .map(|b| b.finish_seconds)
            .unwrap_or(Decimal::ZERO);

        Self {
            mode,
            blocks,
            total_duration_seconds,
        }
    }

    /// 創建空的排序結果
    pub fn empty(mode: SequenceMode) -> Self {
        Self::new(mode, Vec::new())
    }

    /// 生產時段
    pub fn production_blocks(&self) -> impl Iterator<Item = &ScheduledBlock> {
        self.blocks.iter().filter(|b| b.is_production())
    }

    /// 生產時間合計（秒）
    pub fn production_seconds(&self) -> Decimal {
        self.production_blocks().map(|b| b.duration_seconds()).sum()
    }

    /// 換線時間合計（秒）
    pub fn changeover_seconds(&self) -> Decimal {
        self.blocks
            .iter()
            .filter(|b| b.is_changeover())
            .map(|b| b.duration_seconds())
            .sum()
    }

    /// 換線次數
    pub fn changeover_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_changeover()).count()
    }

    /// 生產時段數量
    pub fn production_block_count(&self) -> usize {
        self.production_blocks().count()
    }

    /// 總產出數量
    pub fn units_built(&self) -> u64 {
        self.production_blocks().map(|b| b.quantity).sum()
    }

    /// 檢查時段是否首尾相接（第一段從 0 開始、無重疊、無空檔）
    pub fn is_contiguous(&self) -> bool {
        let starts_at_zero = self
            .blocks
            .first()
            .map_or(true, |b| b.start_seconds == Decimal::ZERO);

        starts_at_zero
            && self
                .blocks
                .windows(2)
                .all(|pair| pair[0].finish_seconds == pair[1].start_seconds)
    }
}
