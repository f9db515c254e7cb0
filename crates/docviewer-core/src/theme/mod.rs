//! Theme settings for the embedded renderer.
//!
//! The renderer reads a `theme-settings.json` document at startup and maps
//! it onto CSS custom properties. These types mirror that document:
//! everything is optional, `None` fields are omitted from the encoded
//! JSON, and border keys use the renderer's kebab-case spelling.

mod colors;

pub use colors::ColorVar;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of the theme-settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub theme: Theme,
    pub features: Features,
    pub typography: Typography,
}

/// Visual styling of renderer components.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub aside: BorderAttributes,
    pub badge: BorderAttributes,
    /// Global CSS `border-radius` for elements like code listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    pub button: BorderAttributes,
    pub code: CodeAttributes,
    pub color: ColorScheme,
}

/// Border styling for one element family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BorderAttributes {
    #[serde(rename = "border-radius", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(rename = "border-style", skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(rename = "border-width", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
}

/// Styling for code listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeAttributes {
    /// Spaces used to indent multi-parameter symbol declarations.
    #[serde(rename = "indentationWidth", skip_serializing_if = "Option::is_none")]
    pub indentation_width: Option<u32>,
    #[serde(rename = "border-radius", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(rename = "border-style", skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(rename = "border-width", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
}

/// Color variable overrides.
///
/// Each key names a renderer color variable; the renderer creates or
/// overwrites the CSS property `--color-<key>` with the value. Keys are
/// kept sorted so the encoded document is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorScheme(BTreeMap<String, ThemeColor>);

impl ColorScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, var: ColorVar, color: ThemeColor) {
        self.0.insert(var.as_str().to_string(), color);
    }

    /// Set a color by raw variable name, for names outside the well-known
    /// [`ColorVar`] set.
    pub fn set_raw(&mut self, name: impl Into<String>, color: ThemeColor) {
        self.0.insert(name.into(), color);
    }

    pub fn get(&self, var: ColorVar) -> Option<&ThemeColor> {
        self.0.get(var.as_str())
    }

    pub fn remove(&mut self, var: ColorVar) -> Option<ThemeColor> {
        self.0.remove(var.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A CSS color value, either one value for both appearances or a
/// light/dark pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Single(String),
    Pair { light: String, dark: String },
}

impl ThemeColor {
    pub fn single(value: impl Into<String>) -> Self {
        ThemeColor::Single(value.into())
    }

    pub fn pair(light: impl Into<String>, dark: impl Into<String>) -> Self {
        ThemeColor::Pair {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Reference another CSS variable by name.
    pub fn variable(name: &str) -> Self {
        ThemeColor::Single(format!("var({name})"))
    }
}

/// Feature flags for the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Features {
    pub docs: DocsFeatures,
}

/// Flags for `/documentation` page features.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_navigation: Option<EnableFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_this_page_navigator: Option<DisableFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<EnableFeature>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnableFeature {
    pub enable: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisableFeature {
    pub disable: bool,
}

/// Typography settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// CSS `font-family` for documentation body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_font: Option<String>,
    /// CSS `font-family` for monospaced code-voice text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_font_mono: Option<String>,
}
