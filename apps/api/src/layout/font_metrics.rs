//! Static font-metric tables for the two builtin PDF faces used by the renderer.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard AFM metrics for the builtin Type 1 faces. Static tables are exact
//! for these faces over ASCII; non-ASCII codepoints fall back to an average
//! width after sanitization has replaced the common typographic characters.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font face enum
// ────────────────────────────────────────────────────────────────────────────

/// The builtin faces the renderer draws with. Both ship with every PDF
/// viewer, so no font files are embedded or loaded from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    /// Body text.
    Helvetica,
    /// Title and heading lines.
    HelveticaBold,
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

const PT_PER_MM: f32 = 72.0 / 25.4;
const MM_PER_PT: f32 = 25.4 / 72.0;

/// Layout parameters for a rendered page.
///
/// Geometry: US letter (8.5" x 11") with 1" margins all around. Sizes are
/// points; positions and distances elsewhere in the layout are millimetres
/// because that is the unit the PDF backend takes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub title_size_pt: f32,
    pub body_size_pt: f32,
    pub footer_size_pt: f32,
    /// Baseline-to-baseline distance as a multiple of font size.
    pub line_height: f32,
}

/// Returns the default page config: US letter, 1" margins, 18pt bold title,
/// 11pt body, 9pt footer.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_mm: 215.9,
        page_height_mm: 279.4,
        margin_mm: 25.4,
        title_size_pt: 18.0,
        body_size_pt: 11.0,
        footer_size_pt: 9.0,
        line_height: 1.4,
    }
}

impl PageConfig {
    /// Usable text width between the left and right margins.
    pub fn usable_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Usable text width in em units at the given font size.
    /// US letter, 1" margins, 11pt: 165.1mm x (2.8346pt/mm / 11pt) ≈ 42.5em.
    pub fn usable_width_em(&self, font_size_pt: f32) -> f32 {
        self.usable_width_mm() * PT_PER_MM / font_size_pt
    }

    /// Baseline advance for one line at the given font size.
    pub fn line_advance_mm(&self, font_size_pt: f32) -> f32 {
        font_size_pt * self.line_height * MM_PER_PT
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// All widths are in em units at 1em (i.e., at the configured font size).
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space)
/// through 0x7E (~).
pub struct FontMetricTable {
    pub face: FontFace,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Width of a single character in em units.
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica — standard AFM widths / 1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.53,
    space_width: 0.278,
};

/// Helvetica-Bold — standard AFM widths / 1000.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.56,
    space_width: 0.278,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let metrics = get_metrics(FontFace::Helvetica);
        let width = metrics.measure_str(" ");
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space width should be 0.278, got {width}"
        );
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFace::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFace::Helvetica);
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_bold_face_wider_than_regular() {
        let text = "Business Proposal";
        let regular = get_metrics(FontFace::Helvetica);
        let bold = get_metrics(FontFace::HelveticaBold);
        assert!(
            bold.measure_str(text) > regular.measure_str(text),
            "bold should measure wider than regular"
        );
    }

    #[test]
    fn test_default_page_config_sanity() {
        let config = default_page_config();
        assert!((config.usable_width_mm() - 165.1).abs() < 1e-3);
        // 165.1mm at 11pt is ~42.5em of usable width
        let em = config.usable_width_em(config.body_size_pt);
        assert!(em > 40.0 && em < 45.0, "usable width should be ~42.5em, got {em}");
        assert!(config.line_advance_mm(11.0) > 0.0);
    }

    #[test]
    fn test_larger_font_means_fewer_ems_per_line() {
        let config = default_page_config();
        assert!(
            config.usable_width_em(config.title_size_pt)
                < config.usable_width_em(config.body_size_pt),
            "a larger font fits fewer em units on the same line"
        );
    }
}
