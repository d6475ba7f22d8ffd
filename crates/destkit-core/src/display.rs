//! Process-wide display mode for destination addresses.

use std::sync::atomic::{AtomicBool, Ordering};

/// Textual form used when a [`crate::Destination`] is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Short `<52 chars>.b32.i2p` hash form (the default).
    Base32,
    /// Full base64 address text.
    Base64,
}

static BASE64_DISPLAY: AtomicBool = AtomicBool::new(false);

/// Set the process-wide display mode.
///
/// Intended to be called once at startup; concurrent readers see either
/// the old or the new mode, never anything else.
pub fn set_display_mode(mode: DisplayMode) {
    BASE64_DISPLAY.store(mode == DisplayMode::Base64, Ordering::Relaxed);
}

/// Current process-wide display mode.
pub fn display_mode() -> DisplayMode {
    if BASE64_DISPLAY.load(Ordering::Relaxed) {
        DisplayMode::Base64
    } else {
        DisplayMode::Base32
    }
}
