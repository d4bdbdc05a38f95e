//! Laid-out glyph geometry.
//!
//! A `GlyphRun` is the output of an external text layout pass: one `Glyph`
//! per rendered character, in reading order, each tagged with the line it
//! was placed on. Line numbers never decrease along the run.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Glyph ───────────────────────────────────────────────────────────────

/// Corner coordinates of one glyph's rectangle in layout space.
/// y grows downward, so `top_*` corners have the smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphQuad {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl GlyphQuad {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top_left: Point::new(rect.x0, rect.y0),
            top_right: Point::new(rect.x1, rect.y0),
            bottom_right: Point::new(rect.x1, rect.y1),
            bottom_left: Point::new(rect.x0, rect.y1),
        }
    }
}

/// One rendered character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Line this glyph was placed on (0 = first line).
    pub line: u32,
    /// Horizontal advance in font units (fraction of the character width).
    pub advance: f64,
    pub quad: GlyphQuad,
}

impl Glyph {
    pub fn new(line: u32, advance: f64, rect: Rect) -> Self {
        Self {
            line,
            advance,
            quad: GlyphQuad::from_rect(rect),
        }
    }

    /// Leading edge x (top-left corner).
    #[inline]
    pub fn left(&self) -> f64 {
        self.quad.top_left.x
    }

    /// Trailing edge x (top-right corner).
    #[inline]
    pub fn right(&self) -> f64 {
        self.quad.top_right.x
    }

    /// Glyphs without visible extent, e.g. spaces in some fonts.
    pub fn is_zero_width(&self) -> bool {
        self.left() == self.right()
    }
}

// ─── GlyphRun ────────────────────────────────────────────────────────────

/// Ordered, line-monotonic sequence of glyphs.
///
/// Serializes as a plain array; deserializing re-checks the line ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Glyph>", into = "Vec<Glyph>")]
pub struct GlyphRun {
    glyphs: SmallVec<[Glyph; 16]>,
}

impl GlyphRun {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a run, rejecting glyphs whose line number goes backwards.
    pub fn new(glyphs: impl IntoIterator<Item = Glyph>) -> Result<Self, String> {
        let glyphs: SmallVec<[Glyph; 16]> = glyphs.into_iter().collect();

        if let Some(i) = glyphs.windows(2).position(|w| w[1].line < w[0].line) {
            return Err(format!(
                "glyph {} is on line {} but follows a glyph on line {}",
                i + 1,
                glyphs[i + 1].line,
                glyphs[i].line
            ));
        }

        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of lines touched by at least the last glyph (highest line + 1).
    /// Trailing empty lines are invisible here; the layout pass knows them.
    pub fn line_count(&self) -> u32 {
        self.glyphs.last().map_or(0, |g| g.line + 1)
    }

    /// Glyphs placed on `line`, in reading order.
    pub fn line(&self, line: u32) -> &[Glyph] {
        let start = self.glyphs.partition_point(|g| g.line < line);
        let end = self.glyphs.partition_point(|g| g.line <= line);
        &self.glyphs[start..end]
    }
}

impl TryFrom<Vec<Glyph>> for GlyphRun {
    type Error = String;

    fn try_from(glyphs: Vec<Glyph>) -> Result<Self, Self::Error> {
        Self::new(glyphs)
    }
}

impl From<GlyphRun> for Vec<Glyph> {
    fn from(run: GlyphRun) -> Self {
        run.glyphs.into_vec()
    }
}
