use crate::ui::components::style::{render_badge, Icon, StyleTable, Tone};

pub const PRIORITY_STYLES: StyleTable<(Tone, Icon)> = StyleTable {
    entries: &[
        ("muito alta", (Tone::Red, Icon::AlertTriangle)),
        ("alta", (Tone::Orange, Icon::ArrowUp)),
        ("média", (Tone::Yellow, Icon::Minus)),
        ("baixa", (Tone::Blue, Icon::ArrowDown)),
        ("muito baixa", (Tone::Gray, Icon::ArrowDown)),
    ],
    default: (Tone::Gray, Icon::AlertCircle),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityBadge {
    pub label: String,
    pub tone: Tone,
    pub icon: Icon,
    pub show_icon: bool,
}

impl PriorityBadge {
    pub fn new(priority: &str) -> Self {
        let (tone, icon) = PRIORITY_STYLES.lookup(priority);
        Self {
            label: priority.to_string(),
            tone,
            icon,
            show_icon: true,
        }
    }

    pub fn without_icon(mut self) -> Self {
        self.show_icon = false;
        self
    }

    pub fn class(&self) -> &'static str {
        self.tone.badge_class()
    }

    pub fn render(&self) -> String {
        render_badge(&self.label, self.show_icon.then_some(self.icon))
    }
}
