//! NPI 爬坡排序示例
//!
//! 用法：`cargo run --example npi_ramp [plan.json]`
//! 沒有指定檔案時使用預設的「破碎批次」計劃

use anyhow::Context;
use ramp_sequencer::{logging, summary, DayPlan, RampSequencer, ShiftClock};

fn main() -> anyhow::Result<()> {
    logging::init();

    let plan = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("無法讀取計劃檔 {}", path))?;
            DayPlan::from_json(&json)?
        }
        None => DayPlan::broken_batch(),
    };

    println!("=== NPI 爬坡排序 ===\n");
    println!(
        "班別 {} 小時，換線 {} 分鐘，明細 {} 筆\n",
        plan.config.shift_hours,
        plan.config.changeover_minutes,
        plan.rows.len()
    );

    let report = RampSequencer::run_plan(&plan)?;
    let clock = ShiftClock::from_config(&plan.config);

    println!("{}\n", summary::metrics_line(&report));

    println!("方案 A：照單生產（未優化）");
    println!("{}\n", summary::timeline(&report.plain, &clock)?);

    println!("方案 B：同機種合併（優化）");
    println!("{}\n", summary::timeline(&report.optimized, &clock)?);

    println!("缺料明細:");
    println!("{}", summary::shortage_table(&report));

    for warning in &report.warnings {
        println!("[{:?}] {}: {}", warning.severity, warning.model, warning.message);
    }

    Ok(())
}
