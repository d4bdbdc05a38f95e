//! Caret hit testing: pointer position → caret position.
//!
//! Resolves a point in layout space to the caret location between the
//! glyphs of a laid-out run. The returned y is always the vertical center
//! of the resolved line, never the raw query y.

use crate::glyph::GlyphRun;
use crate::metrics::LayoutMetrics;
use kurbo::Point;

/// Fraction of a glyph's width before which a hit places the caret in
/// front of the glyph rather than behind it.
pub const HIT_FRACTION: f64 = 0.6;

/// Returned when the run has no glyphs.
pub const NO_CONTENT: Point = Point::new(-1.0, -1.0);

/// Find the caret position for a hit at `query`.
///
/// Single forward scan over the run. Lines above the target are skipped;
/// the first glyph on the target line whose hit threshold lies at or past
/// `query.x` places the caret in front of it. Walking off the end of the
/// target line places the caret after its last glyph. An empty target line
/// yields x = 0.
///
/// A query past the end of the whole run lands after the last glyph on the
/// *last* line, whichever line was targeted.
pub fn locate(query: Point, run: &GlyphRun, metrics: &LayoutMetrics) -> Point {
    let glyphs = run.glyphs();
    let Some(last) = glyphs.last() else {
        return NO_CONTENT;
    };

    let line = metrics.line_at(query.y);
    let y = metrics.line_center(line);
    let character_width = metrics.character_width();

    let mut line_found = false;
    for (i, glyph) in glyphs.iter().enumerate() {
        if glyph.line != line {
            if !line_found {
                if glyph.line < line {
                    continue;
                }
                // Passed the target line without seeing it -> it is empty
                return Point::new(0.0, y);
            }
            // Left the target line without a hit -> after its last glyph
            return Point::new(glyphs[i - 1].right(), y);
        }

        line_found = true;

        let threshold = glyph.left() + HIT_FRACTION * glyph.advance * character_width;
        if query.x <= threshold {
            let x = match i.checked_sub(1).map(|p| &glyphs[p]) {
                Some(prev) if prev.line == line && !prev.is_zero_width() => {
                    0.5 * (prev.right() + glyph.left())
                }
                // First glyph of the line, or previous glyph has no extent
                _ => glyph.left(),
            };
            log::trace!("caret hit ({}, {}) -> glyph {i} on line {line}", query.x, query.y);
            return Point::new(x, y);
        }
    }

    let last_line_y = (f64::from(metrics.line_count) - 0.5) * metrics.line_height();
    Point::new(last.right(), last_line_y)
}
