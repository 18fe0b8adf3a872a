//! Line chart of minutes per stage, drawn with tiny-skia.
//!
//! Gridlines every 6 stages along x (1..=103) and every 5 minutes along y
//! (0..=40, extended when a stage ran longer).

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::ChartError;
use crate::game_data::StageNumber;

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;

const MARGIN_LEFT: f32 = 60.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_TOP: f32 = 30.0;
const MARGIN_BOTTOM: f32 = 50.0;

const X_MIN: f32 = 1.0;
const X_MAX: f32 = 103.0;
const X_TICK: usize = 6;
const Y_TICK: f32 = 5.0;
const Y_MIN_TOP: f32 = 40.0;

/// Maps data coordinates onto the plot area
struct Plot {
    y_max: f32,
}

impl Plot {
    fn width() -> f32 {
        CHART_WIDTH as f32 - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn height() -> f32 {
        CHART_HEIGHT as f32 - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn x(&self, stage: f32) -> f32 {
        MARGIN_LEFT + (stage - X_MIN) / (X_MAX - X_MIN) * Self::width()
    }

    fn y(&self, minutes: f32) -> f32 {
        MARGIN_TOP + Self::height() - (minutes / self.y_max) * Self::height()
    }
}

fn paint(r: u8, g: u8, b: u8, a: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn stroke_line(pixmap: &mut Pixmap, from: (f32, f32), to: (f32, f32), paint: &Paint, width: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.0, from.1);
    pb.line_to(to.0, to.1);
    if let Some(path) = pb.finish() {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), None);
    }
}

/// Render `(stage, minutes)` points. An empty slice yields just the axes.
pub fn render(points: &[(StageNumber, f32)]) -> Result<Pixmap, ChartError> {
    let mut pixmap = Pixmap::new(CHART_WIDTH, CHART_HEIGHT).ok_or(ChartError::Canvas {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
    })?;
    pixmap.fill(Color::WHITE);

    let longest = points.iter().map(|(_, m)| *m).fold(0.0f32, f32::max);
    let plot = Plot {
        y_max: (longest / Y_TICK).ceil().max(Y_MIN_TOP / Y_TICK) * Y_TICK,
    };

    let grid = paint(220, 220, 220, 255);
    let axis = paint(40, 40, 40, 255);
    let line = paint(0, 0, 255, 255);

    let (left, right) = (plot.x(X_MIN), plot.x(X_MAX));
    let (top, bottom) = (plot.y(plot.y_max), plot.y(0.0));

    for stage in (X_MIN as usize..=X_MAX as usize).step_by(X_TICK) {
        let x = plot.x(stage as f32);
        stroke_line(&mut pixmap, (x, top), (x, bottom), &grid, 1.0);
    }
    let mut minutes = 0.0;
    while minutes <= plot.y_max {
        let y = plot.y(minutes);
        stroke_line(&mut pixmap, (left, y), (right, y), &grid, 1.0);
        minutes += Y_TICK;
    }

    stroke_line(&mut pixmap, (left, bottom), (right, bottom), &axis, 1.5);
    stroke_line(&mut pixmap, (left, top), (left, bottom), &axis, 1.5);

    match points {
        [] => {}
        [(stage, minutes)] => {
            if let Some(dot) = Rect::from_xywh(
                plot.x(*stage as f32) - 2.0,
                plot.y(*minutes) - 2.0,
                4.0,
                4.0,
            ) {
                pixmap.fill_rect(dot, &line, Transform::identity(), None);
            }
        }
        [(first_stage, first_minutes), rest @ ..] => {
            let mut pb = PathBuilder::new();
            pb.move_to(plot.x(*first_stage as f32), plot.y(*first_minutes));
            for (stage, minutes) in rest {
                pb.line_to(plot.x(*stage as f32), plot.y(*minutes));
            }
            if let Some(path) = pb.finish() {
                let stroke = Stroke {
                    width: 2.0,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, &line, &stroke, Transform::identity(), None);
            }
        }
    }

    Ok(pixmap)
}
