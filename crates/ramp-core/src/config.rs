//! 班別配置模型

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, SequencerError};

/// 班別時數下限
pub const MIN_SHIFT_HOURS: u32 = 1;
/// 班別時數上限
pub const MAX_SHIFT_HOURS: u32 = 24;
/// 換線時間下限（分鐘）
pub const MIN_CHANGEOVER_MINUTES: u32 = 5;
/// 換線時間上限（分鐘）
pub const MAX_CHANGEOVER_MINUTES: u32 = 60;

/// 班別配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftConfig {
    /// 班別時數（僅用於標示班別結束，不截斷排程）
    pub shift_hours: Decimal,

    /// 換線時間（分鐘），每次機種切換都會套用
    pub changeover_minutes: u32,

    /// 班別開始時間（時間軸顯示用）
    pub shift_start: NaiveDateTime,
}

impl ShiftConfig {
    /// 創建新的班別配置
    pub fn new(shift_hours: Decimal, changeover_minutes: u32) -> Self {
        Self {
            shift_hours,
            changeover_minutes,
            ..Self::default()
        }
    }

    /// 建構器模式：設置班別時數
    pub fn with_shift_hours(mut self, hours: Decimal) -> Self {
        self.shift_hours = hours;
        self
    }

    /// 建構器模式：設置換線時間
    pub fn with_changeover_minutes(mut self, minutes: u32) -> Self {
        self.changeover_minutes = minutes;
        self
    }

    /// 建構器模式：設置班別開始時間
    pub fn with_shift_start(mut self, start: NaiveDateTime) -> Self {
        self.shift_start = start;
        self
    }

    /// 換線時間（秒）
    pub fn changeover_seconds(&self) -> Decimal {
        Decimal::from(self.changeover_minutes) * Decimal::from(60)
    }

    /// 班別長度（秒）
    pub fn shift_seconds(&self) -> Decimal {
        self.shift_hours * Decimal::from(3600)
    }

    /// 檢查配置是否在允許範圍內
    pub fn validate(&self) -> Result<()> {
        if self.shift_hours < Decimal::from(MIN_SHIFT_HOURS)
            || self.shift_hours > Decimal::from(MAX_SHIFT_HOURS)
        {
            return Err(SequencerError::InvalidConfig(format!(
                "班別時數 {} 不在 {}-{} 小時範圍內",
                self.shift_hours, MIN_SHIFT_HOURS, MAX_SHIFT_HOURS
            )));
        }

        if !(MIN_CHANGEOVER_MINUTES..=MAX_CHANGEOVER_MINUTES).contains(&self.changeover_minutes) {
            return Err(SequencerError::InvalidConfig(format!(
                "換線時間 {} 分鐘不在 {}-{} 分鐘範圍內",
                self.changeover_minutes, MIN_CHANGEOVER_MINUTES, MAX_CHANGEOVER_MINUTES
            )));
        }

        Ok(())
    }

    /// 從 JSON 載入並檢查配置
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ShiftConfig {
    /// 10 小時班、換線 15 分鐘，時間軸從 epoch 起算
    fn default() -> Self {
        Self {
            shift_hours: Decimal::TEN,
            changeover_minutes: 15,
            shift_start: DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
        }
    }
}
