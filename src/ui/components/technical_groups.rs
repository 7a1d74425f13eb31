use crate::core::util::format_util::FormatUtil;
use crate::domain::dashboard::dto::technical_group::TechnicalGroup;
use crate::ui::components::charts::color_for;

pub const TITLE: &str = "Análise por Grupos Técnicos";
pub const EMPTY_MESSAGE: &str = "Nenhum grupo técnico encontrado";

const BAR_LABEL_CHARS: usize = 15;
const PIE_LABEL_CHARS: usize = 20;
const PIE_TOP_GROUPS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBar {
    pub name: String,
    pub full_name: String,
    pub total: u64,
    pub resolved: u64,
    pub pending: u64,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSlice {
    pub name: String,
    pub full_name: String,
    pub value: u64,
    pub color: &'static str,
}

pub fn group_bars(groups: &[TechnicalGroup]) -> Vec<GroupBar> {
    groups
        .iter()
        .map(|g| GroupBar {
            name: FormatUtil::truncate(&g.name, BAR_LABEL_CHARS),
            full_name: g.name.clone(),
            total: g.total_tickets,
            resolved: g.resolved_tickets,
            pending: g.pending_tickets,
            rate: g.resolution_rate,
        })
        .collect()
}

/// First five groups as sent by the backend.
pub fn group_slices(groups: &[TechnicalGroup]) -> Vec<GroupSlice> {
    groups
        .iter()
        .take(PIE_TOP_GROUPS)
        .enumerate()
        .map(|(i, g)| GroupSlice {
            name: FormatUtil::truncate(&g.name, PIE_LABEL_CHARS),
            full_name: g.name.clone(),
            value: g.total_tickets,
            color: color_for(i),
        })
        .collect()
}

pub fn render_technical_groups(groups: Option<&[TechnicalGroup]>, loading: bool) -> String {
    if loading {
        return format!("{}\n  ░░░░░░░░░░░░░░░░", TITLE);
    }

    let groups = match groups {
        Some(g) if !g.is_empty() => g,
        _ => return format!("{}\n  {}", TITLE, EMPTY_MESSAGE),
    };

    let mut out = String::from(TITLE);
    for bar in group_bars(groups) {
        out.push_str(&format!(
            "\n  {:<18} total {:>4}  resolvidos {:>4}  pendentes {:>4}  taxa {}",
            bar.name,
            bar.total,
            bar.resolved,
            bar.pending,
            FormatUtil::percent(bar.rate)
        ));
    }
    out.push_str("\n  Top grupos:");
    for slice in group_slices(groups) {
        out.push_str(&format!("\n  ● {} ({}) {}", slice.name, slice.value, slice.color));
    }
    out
}
