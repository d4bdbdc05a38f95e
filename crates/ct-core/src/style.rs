//! Declarative text style values.
//!
//! A text element is configured through `(name, value)` string pairs, e.g.
//! `("character-size", "24")` or `("alignment", "center-top")`.
//! `TextStyle::apply` validates each pair and stores the typed value.

use crate::metrics::LayoutMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Alignment ───────────────────────────────────────────────────────────

/// Anchor of the text block relative to the element origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    LeftTop,
    LeftCenter,
    LeftBottom,
    CenterTop,
    CenterCenter,
    CenterBottom,
    RightTop,
    RightCenter,
    RightBottom,
    #[default]
    LeftBaseLine,
    CenterBaseLine,
    RightBaseLine,
    LeftBottomBaseLine,
    CenterBottomBaseLine,
    RightBottomBaseLine,
}

impl Alignment {
    pub const ALL: [Alignment; 15] = [
        Alignment::LeftTop,
        Alignment::LeftCenter,
        Alignment::LeftBottom,
        Alignment::CenterTop,
        Alignment::CenterCenter,
        Alignment::CenterBottom,
        Alignment::RightTop,
        Alignment::RightCenter,
        Alignment::RightBottom,
        Alignment::LeftBaseLine,
        Alignment::CenterBaseLine,
        Alignment::RightBaseLine,
        Alignment::LeftBottomBaseLine,
        Alignment::CenterBottomBaseLine,
        Alignment::RightBottomBaseLine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::LeftTop => "left-top",
            Alignment::LeftCenter => "left-center",
            Alignment::LeftBottom => "left-bottom",
            Alignment::CenterTop => "center-top",
            Alignment::CenterCenter => "center-center",
            Alignment::CenterBottom => "center-bottom",
            Alignment::RightTop => "right-top",
            Alignment::RightCenter => "right-center",
            Alignment::RightBottom => "right-bottom",
            Alignment::LeftBaseLine => "left-baseline",
            Alignment::CenterBaseLine => "center-baseline",
            Alignment::RightBaseLine => "right-baseline",
            Alignment::LeftBottomBaseLine => "left-bottom-baseline",
            Alignment::CenterBottomBaseLine => "center-bottom-baseline",
            Alignment::RightBottomBaseLine => "right-bottom-baseline",
        }
    }

    /// Lenient parse used for style declarations: unknown names fall back
    /// to `left-baseline`, with a warning unless the value is empty.
    pub fn from_style(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: String| {
            if !value.is_empty() {
                log::warn!("text: {err}");
            }
            Alignment::default()
        })
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alignment::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown alignment '{s}'"))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── DrawMode ────────────────────────────────────────────────────────────

/// Which parts of the element the renderer draws. Bits combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawMode(u8);

impl DrawMode {
    pub const TEXT: DrawMode = DrawMode(1);
    pub const BOUNDING_BOX: DrawMode = DrawMode(2);
    pub const FILLED_BOUNDING_BOX: DrawMode = DrawMode(4);
    pub const ALIGNMENT: DrawMode = DrawMode(8);

    const MASK: u8 = 0b1111;

    pub fn from_bits(bits: i64) -> Result<Self, String> {
        u8::try_from(bits)
            .ok()
            .filter(|b| b & !Self::MASK == 0)
            .map(DrawMode)
            .ok_or_else(|| format!("invalid draw-mode {bits}"))
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: DrawMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for DrawMode {
    fn default() -> Self {
        DrawMode::TEXT
    }
}

impl std::ops::BitOr for DrawMode {
    type Output = DrawMode;

    fn bitor(self, rhs: DrawMode) -> DrawMode {
        DrawMode(self.0 | rhs.0)
    }
}

// ─── TextStyle ───────────────────────────────────────────────────────────

/// Typed style of one text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub text: String,
    /// Font name; resolving it to a font file is the renderer's business.
    pub font: Option<String>,
    /// Fill and background colors, kept verbatim for the renderer.
    pub fill: Option<String>,
    pub background: Option<String>,
    /// Character height in layout units.
    pub character_size: f64,
    pub aspect_ratio: f64,
    pub line_spacing: f64,
    /// Margin around the text inside its bounding box.
    pub padding: f64,
    pub draw_mode: DrawMode,
    pub max_width: Option<f64>,
    pub alignment: Alignment,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: None,
            fill: None,
            background: None,
            character_size: 32.0,
            aspect_ratio: 1.0,
            line_spacing: 0.0,
            padding: 0.0,
            draw_mode: DrawMode::default(),
            max_width: None,
            alignment: Alignment::default(),
        }
    }
}

impl TextStyle {
    /// Apply one style declaration.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name {
            "text" => self.text = value.to_string(),
            "font" => self.font = non_empty(value),
            "fill" => self.fill = non_empty(value),
            "background" => self.background = non_empty(value),
            "character-size" => self.character_size = parse_positive(name, value)?,
            "character-aspect-ratio" => self.aspect_ratio = parse_positive(name, value)?,
            "line-spacing" => self.line_spacing = parse_number(name, value)?,
            "padding" => self.padding = parse_number(name, value)?,
            "draw-mode" => {
                let bits = value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| format!("{name}: expected integer, got '{value}'"))?;
                self.draw_mode = DrawMode::from_bits(bits)?;
            }
            "max-width" => {
                // 0 or negative disables wrapping
                let w = parse_number(name, value)?;
                self.max_width = (w > 0.0).then_some(w);
            }
            "alignment" => self.alignment = Alignment::from_style(value.trim()),
            _ => return Err(format!("unknown text style '{name}'")),
        }
        log::debug!("text style {name} = {value:?}");
        Ok(())
    }

    /// Metrics for a layout of `line_count` lines in this style.
    pub fn metrics(&self, line_count: u32) -> LayoutMetrics {
        LayoutMetrics {
            character_height: self.character_size,
            line_spacing: self.line_spacing,
            aspect_ratio: self.aspect_ratio,
            line_count,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_number(name: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{name}: expected number, got '{value}'"))
}

fn parse_positive(name: &str, value: &str) -> Result<f64, String> {
    let v = parse_number(name, value)?;
    if v <= 0.0 {
        return Err(format!("{name}: must be positive, got {v}"));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alignment_names_roundtrip() {
        for a in Alignment::ALL {
            assert_eq!(a.as_str().parse::<Alignment>(), Ok(a));
        }
    }

    #[test]
    fn unknown_alignment_falls_back_to_left_baseline() {
        assert_eq!(Alignment::from_style("middle"), Alignment::LeftBaseLine);
        assert_eq!(Alignment::from_style(""), Alignment::LeftBaseLine);
        assert!("middle".parse::<Alignment>().is_err());
    }

    #[test]
    fn draw_mode_bits() {
        let mode = DrawMode::from_bits(3).unwrap();
        assert!(mode.contains(DrawMode::TEXT));
        assert!(mode.contains(DrawMode::BOUNDING_BOX));
        assert!(!mode.contains(DrawMode::ALIGNMENT));
        assert_eq!(mode, DrawMode::TEXT | DrawMode::BOUNDING_BOX);
        assert!(DrawMode::from_bits(16).is_err());
        assert!(DrawMode::from_bits(-1).is_err());
    }

    #[test]
    fn apply_numeric_declarations() {
        let mut style = TextStyle::default();
        style.apply("character-size", "24").unwrap();
        style.apply("character-aspect-ratio", "0.5").unwrap();
        style.apply("line-spacing", " 4 ").unwrap();
        style.apply("draw-mode", "9").unwrap();
        style.apply("max-width", "0").unwrap();

        assert_eq!(style.character_size, 24.0);
        assert_eq!(style.aspect_ratio, 0.5);
        assert_eq!(style.line_spacing, 4.0);
        assert_eq!(style.draw_mode, DrawMode::TEXT | DrawMode::ALIGNMENT);
        assert_eq!(style.max_width, None);

        let m = style.metrics(2);
        assert_eq!(m.line_height(), 28.0);
        assert_eq!(m.character_width(), 12.0);
    }

    #[test]
    fn apply_rejects_bad_values() {
        let mut style = TextStyle::default();
        assert!(style.apply("character-size", "big").is_err());
        assert!(style.apply("character-size", "-2").is_err());
        assert!(style.apply("padding", "NaN").is_err());
        assert!(style.apply("draw-mode", "1.5").is_err());
        assert!(style.apply("stroke", "red").is_err());
        // failed declarations leave the style untouched
        assert_eq!(style, TextStyle::default());
    }

    #[test]
    fn apply_string_declarations() {
        let mut style = TextStyle::default();
        style.apply("text", "Hello\nworld").unwrap();
        style.apply("font", "LiberationFonts/LiberationSans-Regular.ttf").unwrap();
        style.apply("fill", "#ff0000").unwrap();
        style.apply("background", "").unwrap();
        style.apply("alignment", "center-top").unwrap();

        assert_eq!(style.text, "Hello\nworld");
        assert_eq!(
            style.font.as_deref(),
            Some("LiberationFonts/LiberationSans-Regular.ttf")
        );
        assert_eq!(style.fill.as_deref(), Some("#ff0000"));
        assert_eq!(style.background, None);
        assert_eq!(style.alignment, Alignment::CenterTop);
    }
}
