use serde::{Deserialize, Serialize};

/// Layout constants shared by every glyph of one text block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub character_height: f64,
    /// Extra gap between consecutive lines.
    pub line_spacing: f64,
    /// Character width / character height.
    pub aspect_ratio: f64,
    /// Lines produced by layout, including trailing empty ones.
    pub line_count: u32,
}

impl LayoutMetrics {
    /// Distance between the tops of two consecutive lines. Must be positive.
    pub fn line_height(&self) -> f64 {
        self.character_height + self.line_spacing
    }

    pub fn character_width(&self) -> f64 {
        self.character_height * self.aspect_ratio
    }

    /// Vertical center of `line`.
    pub fn line_center(&self, line: u32) -> f64 {
        (f64::from(line) + 0.5) * self.line_height()
    }

    /// y where line 0 starts: half the line spacing above the origin.
    pub fn first_line_y(&self) -> f64 {
        -0.5 * self.line_spacing
    }

    /// Line under `y`. Points above the first line resolve to line 0.
    pub fn line_at(&self, y: f64) -> u32 {
        // NaN and negatives saturate to 0
        ((y - self.first_line_y()) / self.line_height()).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: LayoutMetrics = LayoutMetrics {
        character_height: 10.0,
        line_spacing: 2.0,
        aspect_ratio: 0.5,
        line_count: 3,
    };

    #[test]
    fn derived_sizes() {
        assert_eq!(METRICS.line_height(), 12.0);
        assert_eq!(METRICS.character_width(), 5.0);
        assert_eq!(METRICS.line_center(1), 18.0);
    }

    #[test]
    fn line_at_clamps_above_first_line() {
        assert_eq!(METRICS.line_at(-50.0), 0);
        assert_eq!(METRICS.line_at(-1.0), 0);
        assert_eq!(METRICS.line_at(f64::NAN), 0);
    }

    #[test]
    fn line_at_offsets_by_half_spacing() {
        // line 1 spans [11, 23)
        assert_eq!(METRICS.line_at(10.9), 0);
        assert_eq!(METRICS.line_at(11.0), 1);
        assert_eq!(METRICS.line_at(22.9), 1);
        assert_eq!(METRICS.line_at(23.0), 2);
    }
}
