//! Resolved visual style back to style codes.
//!
//! Matching is exact: a color that is not one of the registry colors for
//! its category yields no code at all.

use crate::style::{entries, Effect, Rgb, StyleCode, StyleSet, StyleState};

/// The four rendered properties the decoder understands.
///
/// Values are kept as the raw strings a renderer reports (`"#DC322F"`,
/// `"rgb(220, 50, 47)"`, `"bold"`, `"underline dotted"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisualStyle {
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub font_weight: Option<String>,
    pub text_decoration: Option<String>,
}

impl VisualStyle {
    /// Parse an inline CSS declaration list such as
    /// `color: #dc322f; font-weight: bold`.
    ///
    /// Unknown properties and declarations without a colon are skipped.
    /// A later declaration of the same property wins.
    pub fn parse_css(declarations: &str) -> Self {
        let mut style = Self::default();
        for declaration in declarations.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let value = value.trim().to_string();
            match property.trim().to_ascii_lowercase().as_str() {
                "color" => style.color = Some(value),
                "background-color" | "background" => style.background_color = Some(value),
                "font-weight" => style.font_weight = Some(value),
                "text-decoration" | "text-decoration-line" => style.text_decoration = Some(value),
                _ => {}
            }
        }
        style
    }

    /// The rendered form of a state, using the palette colors.
    pub fn from_state(state: &StyleState) -> Self {
        let color_of = |code: Option<StyleCode>| {
            code.and_then(|c| c.entry().color())
                .map(|rgb| rgb.hex())
        };
        Self {
            color: color_of(state.foreground()),
            background_color: color_of(state.background()),
            font_weight: state.bold().then(|| "bold".to_string()),
            text_decoration: state.underline().then(|| "underline".to_string()),
        }
    }

    /// Inline CSS for this style, properties in a fixed order.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(color) = &self.color {
            declarations.push(format!("color: {color}"));
        }
        if let Some(background) = &self.background_color {
            declarations.push(format!("background-color: {background}"));
        }
        if let Some(weight) = &self.font_weight {
            declarations.push(format!("font-weight: {weight}"));
        }
        if let Some(decoration) = &self.text_decoration {
            declarations.push(format!("text-decoration: {decoration}"));
        }
        declarations.join("; ")
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Recover the style codes that would render as `style`.
pub fn decode(style: &VisualStyle) -> StyleSet {
    let mut codes = StyleSet::new();

    if let Some(code) = style.color.as_deref().and_then(match_foreground) {
        codes.insert(code);
    }
    if let Some(code) = style
        .background_color
        .as_deref()
        .and_then(match_background)
    {
        codes.insert(code);
    }
    if style.font_weight.as_deref().is_some_and(is_bold_weight) {
        codes.insert(StyleCode::Bold);
    }
    if style
        .text_decoration
        .as_deref()
        .is_some_and(|d| d.to_ascii_lowercase().contains("underline"))
    {
        codes.insert(StyleCode::Underline);
    }

    codes
}

/// [`decode`] folded into a state.
pub fn decode_state(style: &VisualStyle) -> StyleState {
    StyleState::from_codes(decode(style))
}

fn is_bold_weight(weight: &str) -> bool {
    let weight = weight.trim();
    weight.eq_ignore_ascii_case("bold") || weight == "700"
}

fn match_foreground(value: &str) -> Option<StyleCode> {
    let rgb = Rgb::parse(value)?;
    entries().iter().find_map(|entry| match entry.effect {
        Effect::Foreground(color) if color == rgb => Some(entry.code),
        _ => None,
    })
}

fn match_background(value: &str) -> Option<StyleCode> {
    let rgb = Rgb::parse(value)?;
    entries().iter().find_map(|entry| match entry.effect {
        Effect::Background(color) if color == rgb => Some(entry.code),
        _ => None,
    })
}
