//! 班別時間軸

use chrono::{Duration, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ShiftConfig;
use crate::schedule::{BlockKind, ScheduleResult};
use crate::{Result, SequencerError};

/// 班別時鐘：把相對秒數換算為實際時間
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftClock {
    /// 班別開始時間
    pub shift_start: NaiveDateTime,

    /// 班別長度（秒）
    pub shift_seconds: Decimal,
}

/// 時間軸項目（甘特圖用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub kind: BlockKind,
    pub model: String,
    pub quantity: u64,
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
}

impl ShiftClock {
    /// 創建新的班別時鐘
    pub fn new(shift_start: NaiveDateTime, shift_seconds: Decimal) -> Self {
        Self {
            shift_start,
            shift_seconds,
        }
    }

    /// 從班別配置建立
    pub fn from_config(config: &ShiftConfig) -> Self {
        Self::new(config.shift_start, config.shift_seconds())
    }

    /// 相對秒數對應的時間（毫秒精度）
    pub fn at(&self, offset_seconds: Decimal) -> Result<NaiveDateTime> {
        let millis = offset_seconds
            .checked_mul(Decimal::from(1000))
            .and_then(|ms| ms.round().to_i64())
            .ok_or_else(|| SequencerError::TimeOverflow(offset_seconds.to_string()))?;

        Duration::try_milliseconds(millis)
            .and_then(|delta| self.shift_start.checked_add_signed(delta))
            .ok_or_else(|| SequencerError::TimeOverflow(offset_seconds.to_string()))
    }

    /// 班別結束標記
    pub fn shift_end(&self) -> Result<NaiveDateTime> {
        self.at(self.shift_seconds)
    }

    /// 排程是否超出班別
    pub fn overruns(&self, result: &ScheduleResult) -> bool {
        result.total_duration_seconds > self.shift_seconds
    }

    /// 超出班別的秒數（未超出為 0）
    pub fn overrun_seconds(&self, result: &ScheduleResult) -> Decimal {
        (result.total_duration_seconds - self.shift_seconds).max(Decimal::ZERO)
    }

    /// 將排程投影到時間軸上
    pub fn project(&self, result: &ScheduleResult) -> Result<Vec<TimelineEntry>> {
        result
            .blocks
            .iter()
            .map(|block| {
                Ok(TimelineEntry {
                    kind: block.kind,
                    model: block.model.clone(),
                    quantity: block.quantity,
                    start: self.at(block.start_seconds)?,
                    finish: self.at(block.finish_seconds)?,
                })
            })
            .collect()
    }
}
