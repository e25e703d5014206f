//! # Ramp Sequencer
//!
//! 單線混線生產排序模擬：比較照單生產（未優化）與同機種合併 + 優先級排序（優化）

pub mod logging;
pub mod summary;

pub use ramp_calc::{
    ComparisonMetrics, ComparisonReport, FeasibilityResolver, MetricsAggregator, RampSequencer,
    ResolvedLine, SequenceBuilder, SequenceWarning, WarningSeverity,
};
pub use ramp_core::{
    strip_invalid_rows, validate_rows, BlockKind, DayPlan, DemandLine, PlanRow, Priority,
    Result, ScheduleResult, ScheduledBlock, SequenceMode, SequencerError, ShiftClock,
    ShiftConfig, TimelineEntry, MAX_CYCLE_TIME_SECONDS,
};
pub use rust_decimal::Decimal;
