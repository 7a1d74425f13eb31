use crate::ui::components::style::{Icon, Tone};

const SKELETON: &str = "░░░░";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeType {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl ChangeType {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Positive => Tone::Green,
            Self::Negative => Tone::Red,
            Self::Neutral => Tone::Gray,
        }
    }
}

/// Single headline number with an optional change indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
    pub change_type: ChangeType,
    pub icon: Icon,
    pub icon_tone: Tone,
    pub loading: bool,
}

impl MetricCard {
    pub fn new(title: impl Into<String>, value: impl ToString, icon: Icon) -> Self {
        Self {
            title: title.into(),
            value: value.to_string(),
            change: None,
            change_type: ChangeType::Neutral,
            icon,
            icon_tone: Tone::Blue,
            loading: false,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.icon_tone = tone;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn change(mut self, change: impl Into<String>, change_type: ChangeType) -> Self {
        self.change = Some(change.into());
        self.change_type = change_type;
        self
    }

    /// Arrow derived from the sign prefix of `change`, not from `change_type`.
    pub fn change_icon(&self) -> Option<Icon> {
        let change = self.change.as_deref()?;
        if change.starts_with('+') {
            Some(Icon::ArrowUp)
        } else if change.starts_with('-') {
            Some(Icon::ArrowDown)
        } else {
            None
        }
    }

    pub fn render(&self) -> String {
        let value: &str = if self.loading { SKELETON } else { &self.value };
        let mut line = format!("{} {}: {}", self.icon.glyph(), self.title, value);

        if let (Some(change), false) = (&self.change, self.loading) {
            match self.change_icon() {
                Some(icon) => line.push_str(&format!(" ({} {})", icon.glyph(), change)),
                None => line.push_str(&format!(" ({})", change)),
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_card_shows_skeleton_and_hides_change() {
        let card = MetricCard::new("Total de Tickets", 120, Icon::Ticket)
            .change("+5.2%", ChangeType::Positive)
            .loading(true);
        assert_eq!(card.render(), "🎫 Total de Tickets: ░░░░");
    }

    #[test]
    fn change_arrow_follows_sign_prefix() {
        let up = MetricCard::new("Novos", 3, Icon::AlertTriangle).change("+5.2%", ChangeType::Positive);
        let down = MetricCard::new("Pendentes", 3, Icon::XCircle).change("-2.1%", ChangeType::Positive);
        let flat = MetricCard::new("Fechados", 3, Icon::CheckCircle).change("0%", ChangeType::Neutral);

        assert_eq!(up.change_icon(), Some(Icon::ArrowUp));
        assert_eq!(down.change_icon(), Some(Icon::ArrowDown));
        assert_eq!(flat.change_icon(), None);
        assert_eq!(down.change_type.tone(), Tone::Green);
        assert_eq!(flat.render(), "✔ Fechados: 3 (0%)");
    }
}
