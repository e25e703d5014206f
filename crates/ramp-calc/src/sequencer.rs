//! 排序比較主流程

use ramp_core::{
    validate_rows, DayPlan, DemandLine, ScheduleResult, SequenceMode, SequencerError, ShiftClock,
    ShiftConfig,
};
use rust_decimal::Decimal;

use crate::feasibility::{FeasibilityResolver, ResolvedLine};
use crate::metrics::{ComparisonMetrics, MetricsAggregator};
use crate::sequencing::SequenceBuilder;
use crate::{ComparisonReport, SequenceWarning};

/// 排序比較器
pub struct RampSequencer {
    /// 班別配置
    config: ShiftConfig,
}

impl RampSequencer {
    /// 創建新的排序比較器
    pub fn new(config: ShiftConfig) -> Self {
        Self { config }
    }

    /// 主計算入口：未優化 vs 優化
    pub fn compare(&self, lines: &[DemandLine]) -> ramp_core::Result<ComparisonReport> {
        self.config.validate()?;
        if lines.is_empty() {
            return Err(SequencerError::EmptyPlan);
        }

        tracing::info!(
            "開始排序比較：明細 {} 筆，換線 {} 分鐘",
            lines.len(),
            self.config.changeover_minutes
        );

        let start_time = std::time::Instant::now();

        // Step 1: 可生產量
        tracing::debug!("Step 1: 計算可生產量");
        let resolved = FeasibilityResolver::resolve(lines);
        let shortage_lines = FeasibilityResolver::shortage_lines(&resolved);
        tracing::debug!("缺料明細: {} 筆", shortage_lines.len());

        let changeover_seconds = self.config.changeover_seconds();
        let horizon = SequenceBuilder::check_horizon(&resolved, changeover_seconds)?;
        tracing::debug!("總耗時上界: {} 秒", horizon);

        // Step 2: 兩種模式互不相干，可並行
        tracing::debug!("Step 2: 產生未優化與優化排程");
        let (plain, optimized) = rayon::join(
            || SequenceBuilder::build(&resolved, SequenceMode::Plain, changeover_seconds),
            || SequenceBuilder::build(&resolved, SequenceMode::Optimized, changeover_seconds),
        );
        tracing::debug!(
            "未優化: {} 個時段，總耗時 {} 秒；優化: {} 個時段，總耗時 {} 秒",
            plain.blocks.len(),
            plain.total_duration_seconds,
            optimized.blocks.len(),
            optimized.total_duration_seconds
        );

        // Step 3: 指標
        tracing::debug!("Step 3: 計算比較指標");
        let metrics = MetricsAggregator::compare(&plain, &optimized, &resolved);

        // Step 4: 警告
        let warnings = self.collect_warnings(&shortage_lines, &plain, &optimized, &metrics);

        let report = ComparisonReport {
            resolved_lines: resolved,
            plain,
            optimized,
            metrics,
            shortage_lines,
            warnings,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!("排序比較完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "節省 {} 秒，回收產能 {} 件",
            report.metrics.time_saved_seconds,
            report.metrics.recovered_units
        );

        Ok(report)
    }

    /// 檢查表格列後執行比較
    pub fn run_plan(plan: &DayPlan) -> ramp_core::Result<ComparisonReport> {
        let lines = validate_rows(&plan.rows)?;
        Self::new(plan.config.clone()).compare(&lines)
    }

    /// 收集警告
    fn collect_warnings(
        &self,
        shortage_lines: &[ResolvedLine],
        plain: &ScheduleResult,
        optimized: &ScheduleResult,
        metrics: &ComparisonMetrics,
    ) -> Vec<SequenceWarning> {
        let mut warnings = Vec::new();

        for short in shortage_lines {
            // 完全無料：這筆明細今天不會有任何產出
            if short.feasible_qty == 0 {
                tracing::error!(
                    "機種 {} 完全缺料（需求 {}）",
                    short.model(),
                    short.line.requested_qty
                );
                warnings.push(SequenceWarning::error(
                    short.model().to_string(),
                    format!("完全缺料：需求 {}，無法生產", short.line.requested_qty),
                ));
                continue;
            }

            tracing::warn!(
                "機種 {} 缺料 {} 件（需求 {}，可生產 {}）",
                short.model(),
                short.shortage,
                short.line.requested_qty,
                short.feasible_qty
            );
            warnings.push(SequenceWarning::warning(
                short.model().to_string(),
                format!(
                    "缺料 {} 件：需求 {}，僅可生產 {}",
                    short.shortage, short.line.requested_qty, short.feasible_qty
                ),
            ));
        }

        let clock = ShiftClock::from_config(&self.config);
        for result in [plain, optimized] {
            if clock.overruns(result) {
                warnings.push(SequenceWarning::warning(
                    mode_label(result.mode).to_string(),
                    format!(
                        "排程超出班別 {} 秒（總耗時 {} 秒，班別 {} 秒）",
                        clock.overrun_seconds(result),
                        result.total_duration_seconds,
                        clock.shift_seconds
                    ),
                ));
            }
        }

        if metrics.time_saved_seconds <= Decimal::ZERO {
            warnings.push(SequenceWarning::info(
                mode_label(SequenceMode::Optimized).to_string(),
                "優化排序未節省時間".to_string(),
            ));
        }

        warnings
    }

    /// 獲取班別配置引用
    pub fn config(&self) -> &ShiftConfig {
        &self.config
    }
}

fn mode_label(mode: SequenceMode) -> &'static str {
    match mode {
        SequenceMode::Plain => "PLAIN",
        SequenceMode::Optimized => "OPTIMIZED",
    }
}
