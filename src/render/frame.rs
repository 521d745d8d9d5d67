use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one plot draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidDimensions {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::error::PlotError;
    use crate::render::{Color, LinePrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn rejects_non_finite_line_and_empty_label() {
        let mut frame = RenderFrame::new(Viewport::new(100, 50));
        frame
            .lines
            .push(LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 1.0, Color::ECG_RED));
        frame.validate().expect("valid frame");

        frame
            .lines
            .push(LinePrimitive::new(0.0, f64::NAN, 10.0, 10.0, 1.0, Color::ECG_RED));
        assert!(matches!(frame.validate(), Err(PlotError::InvalidFrame(_))));

        frame.lines.pop();
        frame.texts.push(TextPrimitive::new(
            "",
            5.0,
            5.0,
            10.0,
            Color::BLACK,
            TextHAlign::Center,
        ));
        assert!(matches!(frame.validate(), Err(PlotError::InvalidFrame(_))));
    }
}
