//! 輸入列檢查
//!
//! 編輯表格的每一列都可能缺欄位或填錯，排序引擎只接受通過檢查的
//! [`DemandLine`]。提供兩種模式：
//! - [`validate_rows`]：嚴格模式，遇到第一個錯誤即回傳
//! - [`strip_invalid_rows`]：寬鬆模式，直接略過不合格的列

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ShiftConfig;
use crate::demand::{DemandLine, Priority};
use crate::{Result, SequencerError};

/// 單件週期時間上限（秒）：一件超過一天視為輸入錯誤
pub const MAX_CYCLE_TIME_SECONDS: u32 = 86_400;

/// 表格中的一列（所有欄位皆可能缺漏）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRow {
    pub model: Option<String>,
    pub priority: Option<Priority>,
    pub quantity: Option<i64>,
    pub material_on_hand: Option<i64>,
    pub cycle_time_seconds: Option<Decimal>,
}

impl PlanRow {
    /// 創建完整的一列
    pub fn new(model: &str, quantity: i64, cycle_time_seconds: Decimal) -> Self {
        Self {
            model: Some(model.to_string()),
            quantity: Some(quantity),
            cycle_time_seconds: Some(cycle_time_seconds),
            ..Self::default()
        }
    }

    /// 建構器模式：設置優先級
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// 建構器模式：設置現有物料
    pub fn with_material_on_hand(mut self, on_hand: i64) -> Self {
        self.material_on_hand = Some(on_hand);
        self
    }

    /// 轉換為需求明細
    ///
    /// `row` 為 1 起算的列號，只用於錯誤訊息
    pub fn to_demand_line(&self, row: usize) -> Result<DemandLine> {
        let model = self
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or(SequencerError::MissingModel { row })?;

        let quantity = self
            .quantity
            .ok_or(SequencerError::MissingQuantity { row })?;
        if quantity < 1 {
            return Err(SequencerError::NonPositiveQuantity {
                row,
                value: quantity,
            });
        }
        let requested_qty = u32::try_from(quantity).map_err(|_| {
            SequencerError::QuantityOutOfRange {
                row,
                value: quantity,
            }
        })?;

        let cycle_time = self
            .cycle_time_seconds
            .ok_or(SequencerError::MissingCycleTime { row })?;
        if cycle_time < Decimal::ONE || cycle_time > Decimal::from(MAX_CYCLE_TIME_SECONDS) {
            return Err(SequencerError::InvalidCycleTime {
                row,
                value: cycle_time,
            });
        }

        let mut line = DemandLine::new(model.to_string(), requested_qty, cycle_time);

        if let Some(priority) = self.priority {
            line = line.with_priority(priority);
        }

        if let Some(on_hand) = self.material_on_hand {
            if on_hand < 0 {
                return Err(SequencerError::NegativeMaterial {
                    row,
                    value: on_hand,
                });
            }
            let on_hand = u32::try_from(on_hand).map_err(|_| {
                SequencerError::QuantityOutOfRange {
                    row,
                    value: on_hand,
                }
            })?;
            line = line.with_material_on_hand(on_hand);
        }

        Ok(line)
    }
}

/// 嚴格檢查所有列，任何一列不合格即失敗
pub fn validate_rows(rows: &[PlanRow]) -> Result<Vec<DemandLine>> {
    if rows.is_empty() {
        return Err(SequencerError::EmptyPlan);
    }

    rows.iter()
        .enumerate()
        .map(|(i, row)| row.to_demand_line(i + 1))
        .collect()
}

/// 略過不合格的列，只保留可排程的需求明細
pub fn strip_invalid_rows(rows: &[PlanRow]) -> Vec<DemandLine> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| row.to_demand_line(i + 1).ok())
        .collect()
}

/// 一天的生產計劃（班別配置 + 表格列）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default)]
    pub config: ShiftConfig,

    pub rows: Vec<PlanRow>,
}

impl DayPlan {
    /// 創建新的生產計劃
    pub fn new(config: ShiftConfig, rows: Vec<PlanRow>) -> Self {
        Self { config, rows }
    }

    /// 從 JSON 載入（只檢查格式與配置範圍，列內容留給 [`validate_rows`]）
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: Self = serde_json::from_str(json)?;
        plan.config.validate()?;
        Ok(plan)
    }

    /// 預設示範計劃：同機種被拆成兩段的「破碎批次」
    pub fn broken_batch() -> Self {
        Self::new(
            ShiftConfig::default(),
            vec![
                PlanRow::new("MacBook Air M3", 40, Decimal::from(45)),
                PlanRow::new("MacBook Pro M4", 25, Decimal::from(60)),
                PlanRow::new("MacBook Air M3", 30, Decimal::from(45)),
                PlanRow::new("MacBook Pro M4", 15, Decimal::from(60)),
            ],
        )
    }
}
