use crate::ui::components::style::{render_badge, StyleTable, Tone};

pub const LEVEL_TONES: StyleTable<Tone> = StyleTable {
    entries: &[
        ("senior", Tone::Purple),
        ("pleno", Tone::Blue),
        ("junior", Tone::Green),
    ],
    default: Tone::Gray,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelBadge {
    pub label: String,
    pub tone: Tone,
}

impl LevelBadge {
    pub fn new(level: &str) -> Self {
        Self {
            label: level.to_string(),
            tone: LEVEL_TONES.lookup(level),
        }
    }

    pub fn class(&self) -> &'static str {
        self.tone.badge_class()
    }

    pub fn render(&self) -> String {
        render_badge(&self.label, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senior_in_any_case_is_purple() {
        for level in ["Senior", "SENIOR", "senior"] {
            assert_eq!(
                LevelBadge::new(level).class(),
                "bg-purple-100 text-purple-800 border-purple-200"
            );
        }
    }

    #[test]
    fn unmapped_level_is_gray() {
        assert_eq!(
            LevelBadge::new("intern").class(),
            "bg-gray-100 text-gray-800 border-gray-200"
        );
    }

    #[test]
    fn padded_level_is_not_matched() {
        assert_eq!(
            LevelBadge::new(" Senior ").class(),
            "bg-gray-100 text-gray-800 border-gray-200"
        );
    }
}
