pub mod format_util;
pub mod query_util;
