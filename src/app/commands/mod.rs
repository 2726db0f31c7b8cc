pub mod list;
pub mod show;

/// Medium-style date rendering for petition timestamps.
pub(crate) const DATE_FORMAT: &str = "%b %-d, %Y";
