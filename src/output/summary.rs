//! Text rendering of an aggregate timer tree.

use crate::aggregator::metrics::{average_micros, display_name, top_timers};
use crate::aggregator::AggregateTimer;

const NAME_WIDTH: usize = 42;

/// Render the aggregate as an indented tree, one line per timer
pub fn generate_tree_summary(root: &AggregateTimer) -> String {
    let mut lines = Vec::new();
    let reference = root.total_micros().max(1);

    lines.push(format!(
        "  {:<width$} {:>14} {:>10} {:>12} {:>7}",
        "Timer",
        "TOTAL (us)",
        "COUNT",
        "AVG (us)",
        "%",
        width = NAME_WIDTH
    ));
    lines.push(format!("  {}", "─".repeat(NAME_WIDTH + 47)));

    root.walk(&mut |timer, depth| {
        let label = format!("{}{}", "  ".repeat(depth), display_name(timer));
        let percentage = (timer.total_micros() as f64 / reference as f64) * 100.0;
        lines.push(format!(
            "  {:<width$} {:>14} {:>10} {:>12} {:>6.1}%",
            truncate(&label),
            timer.total_micros(),
            timer.count(),
            average_micros(timer),
            percentage,
            width = NAME_WIDTH
        ));
    });

    lines.join("\n")
}

/// Render the `max_lines` heaviest timers as a flat table
pub fn generate_text_summary(root: &AggregateTimer, max_lines: usize) -> String {
    let mut lines = Vec::new();
    let rows = top_timers(root, max_lines);

    lines.push("  HEAVIEST TIMERS".to_string());
    for row in &rows {
        lines.push(format!(
            "  {:<width$} {:>14} us {:>10}x {:>6.1}%",
            truncate(&row.path),
            row.total_micros,
            row.count,
            row.percentage,
            width = NAME_WIDTH
        ));
    }

    let node_count = root.node_count().saturating_sub(1);
    if node_count > rows.len() {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing top {} of {} timers)",
            rows.len(),
            node_count
        ));
    }

    lines.join("\n")
}

// Keep the tail, which holds the most specific timer names
fn truncate(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() > NAME_WIDTH {
        let tail: String = chars[chars.len() - (NAME_WIDTH - 3)..].iter().collect();
        format!("...{}", tail)
    } else {
        label.to_string()
    }
}
