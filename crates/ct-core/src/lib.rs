pub mod caret;
pub mod glyph;
pub mod metrics;
pub mod style;

pub use caret::{HIT_FRACTION, NO_CONTENT, locate};
pub use glyph::{Glyph, GlyphQuad, GlyphRun};
pub use metrics::LayoutMetrics;
pub use style::{Alignment, DrawMode, TextStyle};

// Re-export kurbo geometry so downstream crates share one point type
pub use kurbo::{Point, Rect};
