//! Haptic feedback service
//!
//! The card only asks for a pulse; what a pulse means is up to the
//! implementation. In a terminal the closest thing is the bell.

use std::io::{self, Write};

/// Notification style, mirroring the usual success/warning/error trio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

/// Something that can produce a haptic pulse
pub trait HapticFeedback {
    fn notify(&self, kind: FeedbackKind);
}

/// Discards every pulse
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl HapticFeedback for NoFeedback {
    fn notify(&self, _kind: FeedbackKind) {}
}

/// Rings the terminal bell on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl HapticFeedback for TerminalBell {
    fn notify(&self, kind: FeedbackKind) {
        tracing::debug!("bell feedback: {:?}", kind);
        let mut stderr = io::stderr();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            tracing::warn!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Resolve a feedback backend by name (`bell`, `none`)
pub fn from_name(name: &str) -> Option<Box<dyn HapticFeedback>> {
    match name.to_lowercase().as_str() {
        "bell" | "terminal" => Some(Box::new(TerminalBell)),
        "none" | "off" => Some(Box::new(NoFeedback)),
        _ => None,
    }
}
