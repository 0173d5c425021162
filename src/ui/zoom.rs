// SPDX-License-Identifier: MPL-2.0
//! Zoom state for the lightbox image.
//!
//! The factor is a clamped float; zoom controls move it by a fixed
//! step and every lightbox transition resets it to the default.

use crate::config::{clamp_zoom_step, DEFAULT_ZOOM_STEP};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const DEFAULT_ZOOM: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    /// Current scale factor, always within `[MIN_ZOOM, MAX_ZOOM]`.
    pub factor: f32,
    /// Increment applied per zoom-in/out press.
    step: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            factor: DEFAULT_ZOOM,
            step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl ZoomState {
    pub fn zoom_in(&mut self) {
        self.adjust(self.step);
    }

    pub fn zoom_out(&mut self) {
        self.adjust(-self.step);
    }

    pub fn reset(&mut self) {
        self.factor = DEFAULT_ZOOM;
    }

    /// Overrides the step with a clamped user preference.
    pub fn set_step(&mut self, step: f32) {
        self.step = clamp_zoom_step(step);
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    fn adjust(&mut self, delta: f32) {
        self.factor = (self.factor + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}
