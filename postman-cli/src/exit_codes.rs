/// Exit codes for CI/automation.
pub const SUCCESS: i32 = 0;
pub const VALIDATION_FAILED: i32 = 2;
pub const CONFIG_ERROR: i32 = 3;
pub const API_ERROR: i32 = 4;
pub const RUNTIME_ERROR: i32 = 5;
