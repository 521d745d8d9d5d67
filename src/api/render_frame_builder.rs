use crate::core::{GridAxis, PlotView, Sample, Viewport};
use crate::render::{Color, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::axis_ticks::{amplitude_axis_ticks, time_axis_ticks};
use super::{EcgPlot, GridMarking, PlotLayout, PlotOptions};

pub const AXIS_COLOR: Color = Color::rgb(0.33, 0.33, 0.33);
pub const AXIS_LINE_WIDTH: f64 = 1.0;
pub const LABEL_FONT_SIZE_PX: f64 = 10.0;
const LABEL_GAP_PX: f64 = 4.0;

impl<R: Renderer> EcgPlot<R> {
    /// Materializes the current view as a frame without rendering it.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        build_render_frame(
            self.viewport,
            self.state.layout,
            &self.state.view,
            &self.state.options,
            self.state.resolved.series.samples(),
        )
    }
}

/// Builds the draw commands for one pass, back to front: grid markings, the
/// ECG trace, plot border, then axis ticks and labels.
#[must_use]
pub fn build_render_frame(
    viewport: Viewport,
    layout: PlotLayout,
    view: &PlotView,
    options: &PlotOptions,
    samples: &[Sample],
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    push_grid_markings(&mut frame, layout, view, options);
    push_series(&mut frame, layout, view, options, samples);
    push_border(&mut frame, layout);
    if layout.labels_visible {
        push_axis_labels(&mut frame, layout, view, options);
    }
    frame
}

fn push_grid_markings(
    frame: &mut RenderFrame,
    layout: PlotLayout,
    view: &PlotView,
    options: &PlotOptions,
) {
    let grid = &options.grid;
    // Normal lines first so bold lines stay on top where they cross.
    let (bold, normal): (Vec<&GridMarking>, Vec<&GridMarking>) =
        grid.markings.iter().partition(|marking| marking.line.is_bold());

    for marking in normal.into_iter().chain(bold) {
        let position = marking.line.position;
        let width = grid.stroke_width(marking);
        let line = match marking.line.axis {
            GridAxis::Time => {
                if position < view.time.min || position > view.time.max {
                    continue;
                }
                let x = layout.time_to_x(position, &view.time);
                LinePrimitive::new(x, layout.top, x, layout.bottom(), width, marking.color)
            }
            GridAxis::Amplitude => {
                if position < view.amplitude.min || position > view.amplitude.max {
                    continue;
                }
                let y = layout.amplitude_to_y(position, &view.amplitude);
                LinePrimitive::new(layout.left, y, layout.right(), y, width, marking.color)
            }
        };
        frame.lines.push(line);
    }
}

fn push_series(
    frame: &mut RenderFrame,
    layout: PlotLayout,
    view: &PlotView,
    options: &PlotOptions,
    samples: &[Sample],
) {
    let style = options.series;
    if !style.show_lines {
        return;
    }

    for pair in samples.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let (t0, t1) = (start.timestamp_ms as f64, end.timestamp_ms as f64);
        if t1 < view.time.min || t0 > view.time.max {
            continue;
        }

        let p0 = (
            layout.time_to_x(t0, &view.time),
            layout.amplitude_to_y(start.amplitude_mv, &view.amplitude),
        );
        let p1 = (
            layout.time_to_x(t1, &view.time),
            layout.amplitude_to_y(end.amplitude_mv, &view.amplitude),
        );
        if let Some(((x1, y1), (x2, y2))) = clip_segment(p0, p1, layout) {
            frame
                .lines
                .push(LinePrimitive::new(x1, y1, x2, y2, style.line_width, style.color));
        }
    }
}

fn push_border(frame: &mut RenderFrame, layout: PlotLayout) {
    let (left, top, right, bottom) = (layout.left, layout.top, layout.right(), layout.bottom());
    for (x1, y1, x2, y2) in [
        (left, top, right, top),
        (right, top, right, bottom),
        (right, bottom, left, bottom),
        (left, bottom, left, top),
    ] {
        frame
            .lines
            .push(LinePrimitive::new(x1, y1, x2, y2, AXIS_LINE_WIDTH, AXIS_COLOR));
    }
}

fn push_axis_labels(
    frame: &mut RenderFrame,
    layout: PlotLayout,
    view: &PlotView,
    options: &PlotOptions,
) {
    let tick_length = options.x_axis.tick_length_px.min(layout.height);
    for tick in time_axis_ticks(&view.time, layout.width, &options.x_axis.time_format) {
        let x = layout.time_to_x(tick.value, &view.time);
        frame.lines.push(LinePrimitive::new(
            x,
            layout.bottom(),
            x,
            layout.bottom() - tick_length,
            AXIS_LINE_WIDTH,
            AXIS_COLOR,
        ));
        if tick.label.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            tick.label,
            x,
            layout.bottom() + LABEL_GAP_PX,
            LABEL_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }

    let y_axis = &options.y_axis;
    for tick in amplitude_axis_ticks(
        &view.amplitude,
        layout.height,
        y_axis.tick_size.max(y_axis.min_tick_size),
        y_axis.tick_decimals,
    ) {
        let y = layout.amplitude_to_y(tick.value, &view.amplitude);
        frame.texts.push(TextPrimitive::new(
            tick.label,
            layout.left - LABEL_GAP_PX,
            y - LABEL_FONT_SIZE_PX / 2.0,
            LABEL_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
}

type Point = (f64, f64);

/// Liang-Barsky clip of a segment against the plot rectangle.
fn clip_segment(p0: Point, p1: Point, layout: PlotLayout) -> Option<(Point, Point)> {
    let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for (p, q) in [
        (-dx, p0.0 - layout.left),
        (dx, layout.right() - p0.0),
        (-dy, p0.1 - layout.top),
        (dy, layout.bottom() - p0.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }

    Some((
        (p0.0 + t_enter * dx, p0.1 + t_enter * dy),
        (p0.0 + t_exit * dx, p0.1 + t_exit * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::clip_segment;
    use crate::api::PlotLayout;

    fn layout() -> PlotLayout {
        PlotLayout {
            left: 10.0,
            top: 10.0,
            width: 100.0,
            height: 50.0,
            labels_visible: false,
        }
    }

    #[test]
    fn inside_segment_is_unchanged() {
        let clipped = clip_segment((20.0, 20.0), (30.0, 40.0), layout());
        assert_eq!(clipped, Some(((20.0, 20.0), (30.0, 40.0))));
    }

    #[test]
    fn crossing_segment_is_cut_at_edges() {
        let ((x1, y1), (x2, y2)) =
            clip_segment((0.0, 30.0), (120.0, 30.0), layout()).expect("visible");
        assert!((x1 - 10.0).abs() <= 1e-9 && (x2 - 110.0).abs() <= 1e-9);
        assert_eq!((y1, y2), (30.0, 30.0));
    }

    #[test]
    fn outside_segment_is_dropped() {
        assert_eq!(clip_segment((0.0, 0.0), (5.0, 100.0), layout()), None);
        assert_eq!(clip_segment((20.0, 0.0), (30.0, 5.0), layout()), None);
    }
}
