//! Static style descriptors shared by badges, cards and charts.

/// Colour family of a badge or indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Blue,
    Yellow,
    Orange,
    Green,
    Gray,
    Red,
    Purple,
}

impl Tone {
    /// Badge classes, e.g. `bg-gray-100 text-gray-800 border-gray-200`.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-800 border-blue-200",
            Self::Yellow => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Self::Orange => "bg-orange-100 text-orange-800 border-orange-200",
            Self::Green => "bg-green-100 text-green-800 border-green-200",
            Self::Gray => "bg-gray-100 text-gray-800 border-gray-200",
            Self::Red => "bg-red-100 text-red-800 border-red-200",
            Self::Purple => "bg-purple-100 text-purple-800 border-purple-200",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Self::Blue => "text-blue-600",
            Self::Yellow => "text-yellow-600",
            Self::Orange => "text-orange-600",
            Self::Green => "text-green-600",
            Self::Gray => "text-gray-600",
            Self::Red => "text-red-600",
            Self::Purple => "text-purple-600",
        }
    }
}

/// Icons the components can show, rendered as single glyphs in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertTriangle,
    AlertCircle,
    ArrowUp,
    ArrowDown,
    Minus,
    Trophy,
    Award,
    Star,
    CheckCircle,
    XCircle,
    Clock,
    Ticket,
    TrendingUp,
    RefreshCw,
    Calendar,
    Users,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::AlertTriangle => "⚠",
            Self::AlertCircle => "ⓘ",
            Self::ArrowUp => "↑",
            Self::ArrowDown => "↓",
            Self::Minus => "−",
            Self::Trophy => "🏆",
            Self::Award => "🥈",
            Self::Star => "★",
            Self::CheckCircle => "✔",
            Self::XCircle => "✖",
            Self::Clock => "⏱",
            Self::Ticket => "🎫",
            Self::TrendingUp => "↗",
            Self::RefreshCw => "↻",
            Self::Calendar => "📅",
            Self::Users => "👥",
        }
    }
}

/// A case-insensitive label → value table with an explicit fallback.
pub struct StyleTable<V: Copy + 'static> {
    pub entries: &'static [(&'static str, V)],
    pub default: V,
}

impl<V: Copy + 'static> StyleTable<V> {
    /// Entries are stored lowercase; lookup lowercases `label` and nothing else.
    pub fn lookup(&self, label: &str) -> V {
        let key = label.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(self.default)
    }
}

/// Text rendering of a badge: `[label]` or `[icon label]`.
pub fn render_badge(label: &str, icon: Option<Icon>) -> String {
    match icon {
        Some(icon) => format!("[{} {}]", icon.glyph(), label),
        None => format!("[{}]", label),
    }
}
