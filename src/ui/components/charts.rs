//! Text renderings of the dashboard charts.

use crate::domain::dashboard::dto::dashboard_metrics::TrendPoint;

/// Slice colours, assigned by index and cycled.
pub const CHART_COLORS: [&str; 5] = ["#3B82F6", "#EF4444", "#F59E0B", "#10B981", "#8B5CF6"];

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
    pub color: &'static str,
    /// `name NN%`.
    pub label: String,
}

pub fn color_for(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Slices in input order. An all-zero input has nothing to draw.
pub fn pie_slices(data: &[(String, u64)]) -> Vec<PieSlice> {
    let total: u64 = data.iter().map(|(_, v)| *v).sum();
    if total == 0 {
        return Vec::new();
    }

    data.iter()
        .enumerate()
        .map(|(i, (name, value))| {
            let percent = *value as f64 / total as f64 * 100.0;
            PieSlice {
                name: name.clone(),
                value: *value,
                color: color_for(i),
                label: format!("{} {:.0}%", name, percent),
            }
        })
        .collect()
}

pub fn render_pie(title: &str, data: &[(String, u64)]) -> String {
    let mut out = String::from(title);
    for slice in pie_slices(data) {
        out.push_str(&format!("\n  ● {} ({}) {}", slice.label, slice.value, slice.color));
    }
    out
}

/// Horizontal bars scaled against the largest value.
pub fn render_bars(title: &str, data: &[(String, u64)]) -> String {
    let max = data.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = data.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::from(title);
    for (label, value) in data {
        let len = bar_len(*value, max);
        out.push_str(&format!(
            "\n  {:<width$} {} {}",
            label,
            "█".repeat(len),
            value,
            width = label_width
        ));
    }
    out
}

/// Created vs resolved per day, one row per point the backend sent.
pub fn render_trend(title: &str, points: &[TrendPoint]) -> String {
    let max = points
        .iter()
        .map(|p| p.tickets.max(p.resolved))
        .max()
        .unwrap_or(0);

    let mut out = String::from(title);
    for p in points {
        out.push_str(&format!(
            "\n  {}  criados {:>4} {:<w$}  resolvidos {:>4} {}",
            p.date,
            p.tickets,
            "▇".repeat(bar_len(p.tickets, max)),
            p.resolved,
            "▇".repeat(bar_len(p.resolved, max)),
            w = BAR_WIDTH
        ));
    }
    out
}

fn bar_len(value: u64, max: u64) -> usize {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities() -> Vec<(String, u64)> {
        vec![
            ("Alta".into(), 25),
            ("Média".into(), 50),
            ("Baixa".into(), 25),
            ("Muito Alta".into(), 0),
            ("Muito Baixa".into(), 0),
            ("Outra".into(), 0),
        ]
    }

    #[test]
    fn pie_labels_use_whole_percentages_and_cycle_colors() {
        let slices = pie_slices(&priorities());
        assert_eq!(slices[0].label, "Alta 25%");
        assert_eq!(slices[1].label, "Média 50%");
        assert_eq!(slices[0].color, "#3B82F6");
        assert_eq!(slices[5].color, "#3B82F6");
    }

    #[test]
    fn empty_pie_draws_nothing() {
        assert!(pie_slices(&[("Alta".into(), 0)]).is_empty());
        assert_eq!(render_pie("Prioridade", &[]), "Prioridade");
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let out = render_bars("Status", &[("Novo".into(), 10), ("Fechado".into(), 5)]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1].matches('█').count(), 30);
        assert_eq!(lines[2].matches('█').count(), 15);
    }
}
