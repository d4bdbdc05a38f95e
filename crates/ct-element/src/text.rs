//! Text element: style + laid-out glyphs + caret outputs.
//!
//! Layout itself happens elsewhere; the element is handed the resulting
//! glyph run and answers hit requests by writing the caret position into
//! its `cursor-x` / `cursor-y` outputs.

use ct_core::{GlyphRun, LayoutMetrics, TextStyle, locate};
use kurbo::Point;

#[derive(Debug, Clone, Default)]
pub struct TextElement {
    style: TextStyle,
    glyphs: GlyphRun,
    line_count: u32,

    /// Pending hit x; consumed when hit y arrives.
    hit_x: f64,
    cursor: Option<Point>,
}

impl TextElement {
    pub fn new(style: TextStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Build an element from `(name, value)` declarations, stopping at the
    /// first one that fails.
    pub fn from_declarations<'a>(
        declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, String> {
        let mut element = Self::default();
        for (name, value) in declarations {
            element.set_style(name, value)?;
        }
        Ok(element)
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn set_style(&mut self, name: &str, value: &str) -> Result<(), String> {
        self.style.apply(name, value).inspect_err(|err| {
            log::warn!("text: rejected style {name}={value:?}: {err}");
        })
    }

    /// Store the layout result. `line_count` includes trailing empty lines
    /// and is never less than what the glyphs themselves span.
    pub fn set_layout(&mut self, glyphs: GlyphRun, line_count: u32) {
        self.line_count = line_count.max(glyphs.line_count());
        log::debug!(
            "text layout: {} glyphs on {} lines",
            glyphs.len(),
            self.line_count
        );
        self.glyphs = glyphs;
    }

    pub fn glyphs(&self) -> &GlyphRun {
        &self.glyphs
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.style.metrics(self.line_count)
    }

    pub fn set_hit_x(&mut self, x: f64) {
        self.hit_x = x;
    }

    /// Setting the hit y completes a hit request and updates the cursor.
    pub fn set_hit_y(&mut self, y: f64) -> Point {
        self.handle_hit(self.hit_x, y)
    }

    pub fn handle_hit(&mut self, x: f64, y: f64) -> Point {
        let pos = locate(Point::new(x, y), &self.glyphs, &self.metrics());
        log::trace!("text hit ({x}, {y}) -> cursor ({}, {})", pos.x, pos.y);
        self.cursor = Some(pos);
        pos
    }

    pub fn cursor_x(&self) -> Option<f64> {
        self.cursor.map(|p| p.x)
    }

    pub fn cursor_y(&self) -> Option<f64> {
        self.cursor.map(|p| p.y)
    }
}
