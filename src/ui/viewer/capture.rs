// SPDX-License-Identifier: MPL-2.0
//! Exclusive pointer capture provided by the hosting window.

/// Host side of pointer capture.
///
/// While captured, move and release events keep reaching the viewport even
/// when the pointer leaves its bounds.
pub trait PointerCapture {
    fn has_capture(&self) -> bool;

    /// Claims the pointer. Only called when not already held.
    fn capture(&mut self);

    /// Gives the pointer back. Only called while held.
    fn release(&mut self);
}

/// Capture for hosts that already deliver pointer events globally and only
/// need the flag.
#[derive(Debug, Clone, Default)]
pub struct CaptureFlag {
    held: bool,
}

impl CaptureFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the capture from outside, as a window manager would.
    pub fn revoke(&mut self) {
        self.held = false;
    }
}

impl PointerCapture for CaptureFlag {
    fn has_capture(&self) -> bool {
        self.held
    }

    fn capture(&mut self) {
        self.held = true;
    }

    fn release(&mut self) {
        self.held = false;
    }
}
