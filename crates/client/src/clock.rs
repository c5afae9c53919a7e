use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock milliseconds for the core operations, which never read a
/// clock themselves.
pub fn wall_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
