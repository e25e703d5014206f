//! 比較結果文字摘要

use ramp_calc::ComparisonReport;
use ramp_core::{BlockKind, Result, ScheduleResult, ShiftClock};
use rust_decimal::Decimal;

/// 三項主要指標
pub fn metrics_line(report: &ComparisonReport) -> String {
    let m = &report.metrics;
    let sign = if m.utilization_boost >= Decimal::ZERO { "+" } else { "" };

    format!(
        "節省時間 {:.1} 分鐘 | 稼動率提升 {}{:.1}% | 回收產能 {} 件",
        m.time_saved_minutes, sign, m.utilization_boost, m.recovered_units
    )
}

/// 排程時間軸（每個時段一行）
pub fn timeline(result: &ScheduleResult, clock: &ShiftClock) -> Result<String> {
    let entries = clock.project(result)?;

    let mut lines: Vec<String> = entries
        .iter()
        .map(|e| {
            let kind = match e.kind {
                BlockKind::Production => "生產",
                BlockKind::Changeover => "換線",
            };
            format!(
                "{} - {}  {}  {:<24} {:>5}",
                e.start.format("%H:%M:%S"),
                e.finish.format("%H:%M:%S"),
                kind,
                e.model,
                e.quantity
            )
        })
        .collect();

    let marker = clock.shift_end()?;
    let note = if clock.overruns(result) {
        "（超出）"
    } else {
        ""
    };
    lines.push(format!("班別結束 {}{}", marker.format("%H:%M:%S"), note));

    Ok(lines.join("\n"))
}

/// 缺料明細表
pub fn shortage_table(report: &ComparisonReport) -> String {
    if report.shortage_lines.is_empty() {
        return "無缺料".to_string();
    }

    report
        .shortage_lines
        .iter()
        .map(|r| {
            format!(
                "{:<24} 需求 {:>5}  可生產 {:>5}  缺料 {:>5}",
                r.model(),
                r.line.requested_qty,
                r.feasible_qty,
                r.shortage
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
