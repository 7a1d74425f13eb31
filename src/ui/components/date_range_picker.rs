use chrono::NaiveDate;

use crate::core::util::format_util::FormatUtil;
use crate::domain::dashboard::dto::filter_set::FilterSet;
use crate::ui::components::style::Icon;

/// `📅 Período: 2024-01-01 até 2024-01-31`; unset ends show `—`.
pub fn render_date_range(filters: &FilterSet) -> String {
    format!(
        "{} Período: {} até {}",
        Icon::Calendar.glyph(),
        filters.start_date.as_deref().unwrap_or("—"),
        filters.end_date.as_deref().unwrap_or("—"),
    )
}

/// Parses a user-typed `YYYY-MM-DD`; blank input clears the bound.
pub fn parse_date_input(raw: &str) -> Result<Option<NaiveDate>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    FormatUtil::parse_iso_date(raw)
        .map(Some)
        .ok_or_else(|| format!("Data inválida: {:?} (use AAAA-MM-DD)", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_ends() {
        let filters = FilterSet::with_date_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert_eq!(render_date_range(&filters), "📅 Período: 2024-01-01 até 2024-01-31");
    }

    #[test]
    fn parses_and_rejects_input() {
        assert_eq!(
            parse_date_input("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date_input("  ").unwrap(), None);
        assert!(parse_date_input("29/02/2024").is_err());
    }
}
