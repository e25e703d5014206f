//! # Ramp Core
//!
//! 產線排序核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod schedule;
pub mod shift;
pub mod validation;

// Re-export 主要類型
pub use config::ShiftConfig;
pub use demand::{DemandLine, Priority};
pub use schedule::{BlockKind, ScheduleResult, ScheduledBlock, SequenceMode};
pub use shift::{ShiftClock, TimelineEntry};
pub use validation::{
    strip_invalid_rows, validate_rows, DayPlan, PlanRow, MAX_CYCLE_TIME_SECONDS,
};

use rust_decimal::Decimal;

/// 排序引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SequencerError {
    #[error("第 {row} 列缺少機種名稱")]
    MissingModel { row: usize },

    #[error("第 {row} 列缺少數量")]
    MissingQuantity { row: usize },

    #[error("第 {row} 列數量必須為正整數: {value}")]
    NonPositiveQuantity { row: usize, value: i64 },

    #[error("第 {row} 列物料庫存不可為負數: {value}")]
    NegativeMaterial { row: usize, value: i64 },

    #[error("第 {row} 列缺少週期時間")]
    MissingCycleTime { row: usize },

    #[error("第 {row} 列週期時間必須在 1-86400 秒之間: {value}")]
    InvalidCycleTime { row: usize, value: Decimal },

    #[error("第 {row} 列數值超出範圍: {value}")]
    QuantityOutOfRange { row: usize, value: i64 },

    #[error("生產計劃為空")]
    EmptyPlan,

    #[error("無效的優先級: {0}")]
    InvalidPriority(String),

    #[error("無效的班別配置: {0}")]
    InvalidConfig(String),

    #[error("時間換算溢出: {0}")]
    TimeOverflow(String),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SequencerError>;
