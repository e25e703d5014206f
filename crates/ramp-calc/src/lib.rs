//! # Ramp Calculation Engine
//!
//! 產線排序計算引擎：可生產量、排序、效益指標

pub mod feasibility;
pub mod grouping;
pub mod metrics;
pub mod sequencer;
pub mod sequencing;

// Re-export 主要類型
pub use feasibility::{FeasibilityResolver, ResolvedLine};
pub use metrics::{ComparisonMetrics, MetricsAggregator};
pub use sequencer::RampSequencer;
pub use sequencing::SequenceBuilder;

use ramp_core::ScheduleResult;
use serde::{Deserialize, Serialize};

/// 排序比較結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// 計算過可生產量的明細（輸入順序）
    pub resolved_lines: Vec<ResolvedLine>,

    /// 未優化排程
    pub plain: ScheduleResult,

    /// 優化排程
    pub optimized: ScheduleResult,

    /// 比較指標
    pub metrics: ComparisonMetrics,

    /// 缺料明細
    pub shortage_lines: Vec<ResolvedLine>,

    /// 警告信息
    pub warnings: Vec<SequenceWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ComparisonReport {
    /// 添加警告
    pub fn add_warning(&mut self, warning: SequenceWarning) {
        self.warnings.push(warning);
    }

    /// 是否有缺料
    pub fn has_shortage(&self) -> bool {
        !self.shortage_lines.is_empty()
    }
}

/// 排序警告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceWarning {
    pub model: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SequenceWarning {
    pub fn new(model: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            model,
            message,
            severity,
        }
    }

    pub fn info(model: String, message: String) -> Self {
        Self::new(model, message, WarningSeverity::Info)
    }

    pub fn warning(model: String, message: String) -> Self {
        Self::new(model, message, WarningSeverity::Warning)
    }

    pub fn error(model: String, message: String) -> Self {
        Self::new(model, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
