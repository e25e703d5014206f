//! 需求明細模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::SequencerError;

/// 優先級
///
/// 宣告順序即排序順序：`Hot < Standard`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Priority {
    /// 急件
    Hot,
    /// 一般
    Standard,
}

impl Priority {
    /// 排序權重（Hot = 0, Standard = 1）
    pub fn rank(self) -> u8 {
        match self {
            Priority::Hot => 0,
            Priority::Standard => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Hot => "Hot",
            Priority::Standard => "Standard",
        }
    }
}

impl FromStr for Priority {
    type Err = SequencerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Priority::Hot),
            "standard" => Ok(Priority::Standard),
            _ => Err(SequencerError::InvalidPriority(s.to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = SequencerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 需求明細（一個計劃生產批次）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandLine {
    /// 明細ID
    pub id: Uuid,

    /// 機種
    pub model: String,

    /// 優先級（簡化版輸入可能沒有）
    pub priority: Option<Priority>,

    /// 需求數量（>= 1）
    pub requested_qty: u32,

    /// 現有物料（沒有則不受物料限制）
    pub material_on_hand: Option<u32>,

    /// 單件週期時間（秒，>= 1）
    pub cycle_time_seconds: Decimal,
}

impl DemandLine {
    /// 創建新的需求明細
    pub fn new(model: String, requested_qty: u32, cycle_time_seconds: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            model,
            priority: None,
            requested_qty,
            material_on_hand: None,
            cycle_time_seconds,
        }
    }

    /// 建構器模式：設置優先級
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// 建構器模式：設置現有物料
    pub fn with_material_on_hand(mut self, on_hand: u32) -> Self {
        self.material_on_hand = Some(on_hand);
        self
    }

    /// 是否受物料限制
    pub fn is_material_constrained(&self) -> bool {
        self.material_on_hand.is_some()
    }

    /// 是否為急件
    pub fn is_hot(&self) -> bool {
        self.priority == Some(Priority::Hot)
    }

    /// 排序用的優先級權重，未標記者視為一般件
    pub fn priority_rank(&self) -> u8 {
        self.priority.unwrap_or(Priority::Standard).rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_create_demand_line() {
        let line = DemandLine::new("MacBook Air M3".to_string(), 40, Decimal::from(45));

        assert_eq!(line.model, "MacBook Air M3");
        assert_eq!(line.requested_qty, 40);
        assert_eq!(line.cycle_time_seconds, Decimal::from(45));
        assert_eq!(line.priority, None);
        assert!(!line.is_material_constrained());
        assert_eq!(line.priority_rank(), 1);
    }

    #[test]
    fn test_demand_line_builder() {
        let line = DemandLine::new("MacBook Pro M4".to_string(), 10, Decimal::from(60))
            .with_priority(Priority::Hot)
            .with_material_on_hand(5);

        assert!(line.is_hot());
        assert!(line.is_material_constrained());
        assert_eq!(line.material_on_hand, Some(5));
        assert_eq!(line.priority_rank(), 0);
    }

    #[test]
    fn test_each_line_gets_its_own_id() {
        let a = DemandLine::new("A".to_string(), 1, Decimal::ONE);
        let b = DemandLine::new("A".to_string(), 1, Decimal::ONE);
        assert_ne!(a.id, b.id);
    }

    #[rstest]
    #[case("Hot", Priority::Hot)]
    #[case("hot", Priority::Hot)]
    #[case(" STANDARD ", Priority::Standard)]
    #[case("Standard", Priority::Standard)]
    fn test_parse_priority(#[case] input: &str, #[case] expected: Priority) {
        assert_eq!(input.parse::<Priority>().unwrap(), expected);
    }

    #[test]
    fn test_parse_invalid_priority() {
        assert!(matches!(
            "Urgent".parse::<Priority>(),
            Err(SequencerError::InvalidPriority(_))
        ));
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Hot < Priority::Standard);
        assert_eq!(Priority::Hot.min(Priority::Standard), Priority::Hot);
    }

    #[test]
    fn test_priority_serde() {
        let json = serde_json::to_string(&Priority::Hot).unwrap();
        assert_eq!(json, "\"Hot\"");

        let parsed: Priority = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(parsed, Priority::Standard);
    }
}
