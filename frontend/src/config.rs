//! Build-time settings for the console.

use log::LevelFilter;

/// Origin prefixed to every API path. Empty means the page's own origin,
/// which is how the promotions service serves this UI.
pub const API_BASE: &str = "";

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
