//! Human-readable cycle report.

use crate::core::runtime::CycleReport;
use crate::signals::engine::TickerEvaluation;
use crate::signals::thresholds::SignalThresholds;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;
const TOP_SIGNALS: usize = 3;

/// Format an integer with comma thousands separators.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Summary block for one evaluated ticker.
pub fn render_ticker(evaluation: &TickerEvaluation) -> String {
    let s = &evaluation.indicators;
    let mut out = String::new();

    let _ = writeln!(out, "\n{} - {}", evaluation.category, evaluation.ticker);
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Price: ${:.2} ({:+.2}%)", s.price, s.change_pct);
    let _ = writeln!(
        out,
        "Volume: {} ({:.2}x avg)",
        format_thousands(s.volume),
        s.volume_ratio
    );
    let _ = writeln!(out, "RSI: {:.1} | MACD: {:.3}", s.rsi, s.macd);
    let _ = writeln!(
        out,
        "Bollinger Position: {:.1}% (Width: {:.1}%)",
        s.bb_position, s.bb_width
    );
    let _ = writeln!(
        out,
        "\nSignal Score: {:.1}/{:.1}",
        evaluation.score,
        SignalThresholds::MAX_SCORE
    );

    if !evaluation.signals.is_empty() {
        let _ = writeln!(out, "Signals:");
        for signal in evaluation.signals.iter() {
            let _ = writeln!(out, "  [{:+.1}] {}", signal.score_delta, signal.description);
        }
    }

    if evaluation.strong_buy {
        let _ = writeln!(out, "\n*** STRONG BUY SIGNAL - Score {:.1} ***", evaluation.score);
    }
    out
}

/// Ranked strong-buy section; empty when there are none.
pub fn render_strong_buys(ranked: &[&TickerEvaluation]) -> String {
    if ranked.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "STRONG BUY OPPORTUNITIES");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    for evaluation in ranked {
        let _ = writeln!(out, "\n{} - {}", evaluation.category, evaluation.ticker);
        let _ = writeln!(
            out,
            "  Score: {:.1} | Price: ${:.2}",
            evaluation.score, evaluation.indicators.price
        );
        let _ = writeln!(out, "  Top Signals:");
        for signal in evaluation.signals.iter().take(TOP_SIGNALS) {
            let _ = writeln!(out, "    {}", signal.description);
        }
    }
    out
}

/// Full console report for a cycle.
pub fn render_cycle(cycle: &CycleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "STOCK MONITOR - {}",
        cycle.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for evaluation in &cycle.results {
        out.push_str(&render_ticker(evaluation));
    }
    for ticker in &cycle.missing {
        let _ = writeln!(out, "\n{}: No data available", ticker);
    }

    out.push_str(&render_strong_buys(&cycle.strong_buys()));

    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "Check complete: {} evaluated, {} without data.",
        cycle.results.len(),
        cycle.missing.len()
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out
}
