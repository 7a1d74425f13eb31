use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct FormatUtil;

impl FormatUtil {
    /// One decimal and a percent sign: `87.34` → `87.3%`.
    #[inline]
    pub fn percent(value: f64) -> String {
        format!("{:.1}%", value)
    }

    /// One decimal and an hour suffix: `4.25` → `4.2h`.
    #[inline]
    pub fn hours(value: f64) -> String {
        format!("{:.1}h", value)
    }

    /// `text` cut to `max_chars` characters plus `...` when longer.
    pub fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() > max_chars {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        }
    }

    /// `dd/mm/yyyy HH:MM` in the timestamp's own wall clock. Unparseable
    /// input is returned unchanged.
    pub fn date_time(raw: &str) -> String {
        Self::parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string())
    }

    /// `dd/mm/yyyy HH:MM:SS`, same parsing rules as [`FormatUtil::date_time`].
    pub fn date_time_seconds(raw: &str) -> String {
        Self::parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
            .unwrap_or_else(|| raw.to_string())
    }

    pub fn iso_date(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
    }

    fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}
