// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TICKS_PER_SECOND: u8 = 10;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Sampler retry budget: random draws allowed per requested distractor
pub const SAMPLER_RETRY_FACTOR: usize = 30;

// Profile management
pub const PROFILE_NAME_MAX_LENGTH: usize = 16;
pub const PROFILE_FILE_VERSION: u32 = 1;

// Match history file
pub const HISTORY_VERSION_MAGIC: u64 = 0x41544C4153484930; // "ATLASHI0"

// Home screen message log
pub const MESSAGE_LOG_CAPACITY: usize = 10;
