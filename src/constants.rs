// ============================================================================
// Time Conversion Constants
// ============================================================================

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3600;
pub const SECONDS_PER_DAY: u32 = 86400;
pub const SECONDS_PER_WEEK: u32 = 604800;
