//! Shared widget-settings primitives: fonts, color rules, backgrounds and
//! date formats, plus the CSS-like style computed from a font.

use serde::{Deserialize, Serialize};

/// Color used by constant rules when nothing else is configured.
pub const DEFAULT_TEXT_COLOR: &str = "rgba(0, 0, 0, 0.87)";

// ---------------------------------------------------------------------------
// Font
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub size_unit: String,
    pub style: String,
    pub weight: String,
    pub line_height: String,
}

impl Font {
    /// Roboto font with the given size in pixels.
    pub fn roboto(size: f64, weight: &str, line_height: &str) -> Self {
        Self {
            family: "Roboto".to_string(),
            size,
            size_unit: "px".to_string(),
            style: "normal".to_string(),
            weight: weight.to_string(),
            line_height: line_height.to_string(),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::roboto(12.0, "400", "1")
    }
}

// ---------------------------------------------------------------------------
// ComponentStyle
// ---------------------------------------------------------------------------

/// Text style derived from a [`Font`], keyed by CSS property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyle {
    pub letter_spacing: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl ComponentStyle {
    /// Render as an inline CSS declaration list.
    ///
    /// Only properties that are set are emitted, in a stable order:
    /// `letter-spacing; font-style; font-weight; line-height; font-size; font-family`.
    pub fn to_css(&self) -> String {
        let mut parts = vec![format!("letter-spacing: {}", self.letter_spacing)];
        let optional = [
            ("font-style", &self.font_style),
            ("font-weight", &self.font_weight),
            ("line-height", &self.line_height),
            ("font-size", &self.font_size),
            ("font-family", &self.font_family),
        ];
        for (name, value) in optional {
            if let Some(v) = value {
                parts.push(format!("{}: {}", name, v));
            }
        }
        parts.join("; ")
    }
}

/// Build a text style from an optional font.
///
/// Empty font fields and a non-positive size are left unset. Non-Roboto
/// families get Roboto appended as a fallback.
pub fn text_style(font: Option<&Font>, letter_spacing: &str) -> ComponentStyle {
    let mut style = ComponentStyle {
        letter_spacing: letter_spacing.to_string(),
        ..Default::default()
    };
    let Some(font) = font else {
        return style;
    };
    if !font.style.is_empty() {
        style.font_style = Some(font.style.clone());
    }
    if !font.weight.is_empty() {
        style.font_weight = Some(font.weight.clone());
    }
    if !font.line_height.is_empty() {
        style.line_height = Some(font.line_height.clone());
    }
    if font.size > 0.0 {
        let unit = if font.size_unit.is_empty() {
            "px"
        } else {
            font.size_unit.as_str()
        };
        style.font_size = Some(format!("{}{}", font.size, unit));
    }
    if !font.family.is_empty() {
        let family = if font.family == "Roboto" {
            font.family.clone()
        } else {
            format!("{}, Roboto", font.family)
        };
        style.font_family = Some(family);
    }
    style
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorType {
    #[default]
    Constant,
    Range,
    Function,
}

/// One band of a range color rule. An unset bound is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    pub color: String,
}

impl ColorRange {
    pub fn new(from: Option<f64>, to: Option<f64>, color: &str) -> Self {
        Self {
            from,
            to,
            color: color.to_string(),
        }
    }

    /// A band whose bounds are both set and equal matches a single value.
    pub fn is_constant(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from == to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSettings {
    #[serde(rename = "type")]
    pub color_type: ColorType,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_list: Option<Vec<ColorRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_function: Option<String>,
}

impl Default for ColorSettings {
    fn default() -> Self {
        constant_color(DEFAULT_TEXT_COLOR)
    }
}

/// A rule that always yields `color`.
pub fn constant_color(color: &str) -> ColorSettings {
    ColorSettings {
        color_type: ColorType::Constant,
        color: color.to_string(),
        range_list: None,
        color_function: None,
    }
}

/// A rule that picks a band color by value, falling back to `color`.
pub fn range_color(color: &str, range_list: Vec<ColorRange>) -> ColorSettings {
    ColorSettings {
        color_type: ColorType::Range,
        color: color.to_string(),
        range_list: Some(range_list),
        color_function: Some(String::new()),
    }
}

// ---------------------------------------------------------------------------
// Background
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundType {
    Image,
    ImageUrl,
    #[default]
    Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlaySettings {
    pub enabled: bool,
    pub color: String,
    pub blur: f64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "rgba(255,255,255,0.72)".to_string(),
            blur: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundSettings {
    #[serde(rename = "type")]
    pub background_type: BackgroundType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub overlay: OverlaySettings,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            background_type: BackgroundType::Color,
            image_base64: None,
            image_url: None,
            color: Some("#fff".to_string()),
            overlay: OverlaySettings::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Date format
// ---------------------------------------------------------------------------

/// How a sample timestamp is shown. Patterns are strftime strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateFormatSettings {
    pub format: Option<String>,
    pub last_update_ago: bool,
    pub custom: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_last_update_prefix: bool,
}

pub fn simple_date_format(format: &str) -> DateFormatSettings {
    DateFormatSettings {
        format: Some(format.to_string()),
        last_update_ago: false,
        custom: false,
        hide_last_update_prefix: false,
    }
}

pub fn last_update_ago_date_format() -> DateFormatSettings {
    DateFormatSettings {
        format: None,
        last_update_ago: true,
        custom: false,
        hide_last_update_prefix: false,
    }
}

pub fn custom_date_format(format: &str) -> DateFormatSettings {
    DateFormatSettings {
        format: Some(format.to_string()),
        last_update_ago: false,
        custom: true,
        hide_last_update_prefix: false,
    }
}
