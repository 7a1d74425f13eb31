use crate::ui::components::style::{render_badge, StyleTable, Tone};

pub const STATUS_TONES: StyleTable<Tone> = StyleTable {
    entries: &[
        ("novo", Tone::Blue),
        ("processando (atribuído)", Tone::Yellow),
        ("processando (planejado)", Tone::Yellow),
        ("pendente", Tone::Orange),
        ("solucionado", Tone::Green),
        ("fechado", Tone::Gray),
    ],
    default: Tone::Gray,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl StatusBadge {
    pub fn new(status: &str) -> Self {
        Self {
            label: status.to_string(),
            tone: STATUS_TONES.lookup(status),
        }
    }

    pub fn class(&self) -> &'static str {
        self.tone.badge_class()
    }

    pub fn render(&self) -> String {
        render_badge(&self.label, None)
    }
}
