use super::surface::DrawSurface;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    StrokeColor(String),
    FillColor(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    Font(String),
    TextAlign(String),
    TextBaseline(String),
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    StrokeCircle { x: f64, y: f64, radius: f64 },
    FillCircle { x: f64, y: f64, radius: f64 },
    StrokeLine { x1: f64, y1: f64, x2: f64, y2: f64 },
    FillText { text: String, x: f64, y: f64 },
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
}

/// A [`DrawSurface`] that records every call instead of rasterizing.
///
/// Headless hosts and tests use it to inspect exactly which primitives a
/// render emitted, in order; equal renders produce equal op vectors.
#[derive(Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl DrawSurface for RecordingSurface {
    fn set_stroke_color(&mut self, color: &str) {
        self.ops.push(DrawOp::StrokeColor(color.to_string()));
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(DrawOp::FillColor(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.ops.push(DrawOp::LineDash(segments.to_vec()));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: &str) {
        self.ops.push(DrawOp::TextAlign(align.to_string()));
    }

    fn set_text_baseline(&mut self, baseline: &str) {
        self.ops.push(DrawOp::TextBaseline(baseline.to_string()));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::StrokeRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::FillRect { x, y, w, h });
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::StrokeCircle { x, y, radius });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::FillCircle { x, y, radius });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(DrawOp::StrokeLine { x1, y1, x2, y2 });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::ClearRect { x, y, w, h });
    }
}
