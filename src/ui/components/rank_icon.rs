use crate::ui::components::style::{Icon, Tone};

/// Podium icon for the top three, `#n` text for everyone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankIcon {
    Podium { icon: Icon, tone: Tone },
    Position(u32),
}

impl RankIcon {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Podium {
                icon: Icon::Trophy,
                tone: Tone::Yellow,
            },
            2 => Self::Podium {
                icon: Icon::Award,
                tone: Tone::Gray,
            },
            3 => Self::Podium {
                icon: Icon::Star,
                tone: Tone::Orange,
            },
            n => Self::Position(n),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Podium { icon, .. } => icon.glyph().to_string(),
            Self::Position(n) => format!("#{}", n),
        }
    }
}
