//! Environment-driven defaults
//!
//! Each knob is read once on first use and cached. Explicit arguments
//! (builder methods, CLI flags) always take precedence over these.

use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static STRICT_CHECKSUM: OnceLock<bool> = OnceLock::new();

/// `EAN_STRICT_CHECKSUM=1` makes strict check-digit validation the default.
pub fn strict_checksum() -> bool {
    *STRICT_CHECKSUM.get_or_init(|| parse_env_bool_u8("EAN_STRICT_CHECKSUM", false))
}

static MODULE_WIDTH: OnceLock<u32> = OnceLock::new();

/// Pixels per module (`EAN_MODULE_WIDTH`, default 3).
pub fn module_width() -> u32 {
    *MODULE_WIDTH.get_or_init(|| parse_env_u32("EAN_MODULE_WIDTH", 3).clamp(1, 32))
}

static BAR_HEIGHT: OnceLock<u32> = OnceLock::new();

/// Full bar height in pixels (`EAN_BAR_HEIGHT`, default 120).
pub fn bar_height() -> u32 {
    *BAR_HEIGHT.get_or_init(|| parse_env_u32("EAN_BAR_HEIGHT", 120).clamp(8, 2048))
}

static GUARD_EXTENSION: OnceLock<u32> = OnceLock::new();

/// How much taller guard bars are than data bars (`EAN_GUARD_EXTENSION`, default 20).
pub fn guard_extension() -> u32 {
    *GUARD_EXTENSION.get_or_init(|| {
        let ext = parse_env_u32("EAN_GUARD_EXTENSION", 20);
        // keep at least one pixel of data bar
        ext.min(bar_height().saturating_sub(1))
    })
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `EAN_DEBUG` set to anything turns on verbose CLI output.
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("EAN_DEBUG").is_ok())
}
