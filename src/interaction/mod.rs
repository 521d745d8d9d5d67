use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, ZOOM_FACTOR_PER_LEVEL};
use crate::error::{PlotError, PlotResult};

/// Wheel delta reported for one notch.
pub const WHEEL_STEP_UNITS: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Pointer-drag bookkeeping for pan gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    last_pointer: Option<PixelPoint>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            last_pointer: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    pub fn on_pan_start(&mut self, pointer: PixelPoint) {
        self.mode = InteractionMode::Panning;
        self.last_pointer = Some(pointer);
    }

    /// Returns the pan delta for a drag step: previous minus current pointer,
    /// so dragging right reveals earlier samples.
    ///
    /// `None` when no pan is in progress.
    pub fn on_pan_move(&mut self, pointer: PixelPoint) -> Option<(f64, f64)> {
        if self.mode != InteractionMode::Panning {
            return None;
        }
        let last = self.last_pointer.replace(pointer)?;
        Some((last.x - pointer.x, last.y - pointer.y))
    }

    pub fn on_pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
        self.last_pointer = None;
    }
}

/// Zoom amount for a wheel delta; negative deltas (scroll up) zoom in.
///
/// Returns `None` for a zero delta.
pub fn resolve_wheel_zoom_amount(wheel_delta_y: f64) -> PlotResult<Option<f64>> {
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let amount = ZOOM_FACTOR_PER_LEVEL.powf(-wheel_delta_y / WHEEL_STEP_UNITS);
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PlotError::InvalidConfig(
            "computed wheel zoom amount must be finite and > 0".to_owned(),
        ));
    }
    Ok(Some(amount))
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, InteractionState, resolve_wheel_zoom_amount};
    use crate::core::PixelPoint;

    #[test]
    fn zero_wheel_delta_returns_none() {
        assert!(resolve_wheel_zoom_amount(0.0).expect("amount").is_none());
    }

    #[test]
    fn one_notch_up_zooms_in_by_one_level() {
        let amount = resolve_wheel_zoom_amount(-120.0)
            .expect("amount")
            .expect("some");
        assert!((amount - 1.5).abs() <= 1e-12);
    }

    #[test]
    fn huge_wheel_delta_is_rejected() {
        let err = resolve_wheel_zoom_amount(-1.0e6).expect_err("overflow must fail");
        assert!(format!("{err}").contains("wheel zoom amount"));
    }

    #[test]
    fn pan_gesture_reports_drag_deltas() {
        let mut state = InteractionState::default();
        assert_eq!(state.on_pan_move(PixelPoint::new(5.0, 5.0)), None);

        state.on_pan_start(PixelPoint::new(100.0, 50.0));
        assert_eq!(state.mode(), InteractionMode::Panning);
        assert_eq!(
            state.on_pan_move(PixelPoint::new(110.0, 45.0)),
            Some((-10.0, 5.0))
        );
        assert_eq!(
            state.on_pan_move(PixelPoint::new(115.0, 45.0)),
            Some((-5.0, 0.0))
        );

        state.on_pan_end();
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert_eq!(state.on_pan_move(PixelPoint::new(0.0, 0.0)), None);
    }
}
