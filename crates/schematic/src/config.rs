//! Configuration types for Schematic diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and style settings.
//! - [`RenderConfig`] - Output format, Graphviz layout engine, rank direction and output location.
//! - [`StyleConfig`] - Fonts, colors and edge routing.
//!
//! # Example
//!
//! ```
//! # use schematic::config::{AppConfig, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.render().format(), OutputFormat::Png);
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use graphviz_rust::cmd::{Format, Layout};
use serde::Deserialize;

use schematic_core::{category::Category, color::Color};

/// Top-level application configuration combining render and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the render configuration.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

/// Image formats the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
    Svg,
    Pdf,
    /// The DOT source itself; produced without running Graphviz.
    Dot,
}

impl OutputFormat {
    const ALL: [OutputFormat; 5] = [
        OutputFormat::Png,
        OutputFormat::Jpg,
        OutputFormat::Svg,
        OutputFormat::Pdf,
        OutputFormat::Dot,
    ];

    /// File extension of the format, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
        }
    }

    /// The matching Graphviz output format, `None` for [`OutputFormat::Dot`].
    pub(crate) fn graphviz_format(self) -> Option<Format> {
        match self {
            OutputFormat::Png => Some(Format::Png),
            OutputFormat::Jpg => Some(Format::Jpg),
            OutputFormat::Svg => Some(Format::Svg),
            OutputFormat::Pdf => Some(Format::Pdf),
            OutputFormat::Dot => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = if wanted == "jpeg" {
            "jpg".to_string()
        } else {
            wanted
        };
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.extension() == wanted)
            .ok_or_else(|| {
                format!("unsupported output format `{s}`, expected one of: png, jpg, svg, pdf, dot")
            })
    }
}

/// Graphviz layout engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Hierarchical layout, the best fit for dependency diagrams.
    #[default]
    Dot,
    Neato,
    Fdp,
    Sfdp,
    Circo,
    Twopi,
}

impl LayoutEngine {
    const ALL: [LayoutEngine; 6] = [
        LayoutEngine::Dot,
        LayoutEngine::Neato,
        LayoutEngine::Fdp,
        LayoutEngine::Sfdp,
        LayoutEngine::Circo,
        LayoutEngine::Twopi,
    ];

    /// Name of the Graphviz program implementing the engine.
    pub fn name(self) -> &'static str {
        match self {
            LayoutEngine::Dot => "dot",
            LayoutEngine::Neato => "neato",
            LayoutEngine::Fdp => "fdp",
            LayoutEngine::Sfdp => "sfdp",
            LayoutEngine::Circo => "circo",
            LayoutEngine::Twopi => "twopi",
        }
    }

    pub(crate) fn graphviz_layout(self) -> Layout {
        match self {
            LayoutEngine::Dot => Layout::Dot,
            LayoutEngine::Neato => Layout::Neato,
            LayoutEngine::Fdp => Layout::Fdp,
            LayoutEngine::Sfdp => Layout::Sfdp,
            LayoutEngine::Circo => Layout::Circo,
            LayoutEngine::Twopi => Layout::Twopi,
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LayoutEngine::ALL
            .into_iter()
            .find(|engine| engine.name() == wanted)
            .ok_or_else(|| format!("unsupported layout engine `{s}`"))
    }
}

/// Direction in which ranks of the graph are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum RankDirection {
    #[default]
    #[serde(rename = "LR", alias = "lr")]
    LeftToRight,
    #[serde(rename = "TB", alias = "tb")]
    TopToBottom,
    #[serde(rename = "BT", alias = "bt")]
    BottomToTop,
    #[serde(rename = "RL", alias = "rl")]
    RightToLeft,
}

impl RankDirection {
    /// Value of the Graphviz `rankdir` attribute.
    pub fn as_rankdir(self) -> &'static str {
        match self {
            RankDirection::LeftToRight => "LR",
            RankDirection::TopToBottom => "TB",
            RankDirection::BottomToTop => "BT",
            RankDirection::RightToLeft => "RL",
        }
    }
}

impl fmt::Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_rankdir())
    }
}

impl FromStr for RankDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LR" => Ok(RankDirection::LeftToRight),
            "TB" => Ok(RankDirection::TopToBottom),
            "BT" => Ok(RankDirection::BottomToTop),
            "RL" => Ok(RankDirection::RightToLeft),
            _ => Err(format!(
                "unsupported rank direction `{s}`, expected one of: LR, TB, BT, RL"
            )),
        }
    }
}

/// Output and layout settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    format: OutputFormat,

    #[serde(default)]
    layout: LayoutEngine,

    #[serde(default)]
    direction: RankDirection,

    /// Directory the image is written to; the working directory when unset.
    #[serde(default)]
    output_dir: Option<PathBuf>,

    /// File name stem; derived from the diagram title when unset.
    #[serde(default)]
    file_name: Option<String>,
}

impl RenderConfig {
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn layout(&self) -> LayoutEngine {
        self.layout
    }

    pub fn direction(&self) -> RankDirection {
        self.direction
    }

    /// Returns the output directory, defaulting to the current directory.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_layout(mut self, layout: LayoutEngine) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_direction(mut self, direction: RankDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<Color>,

    #[serde(default)]
    font_name: Option<String>,

    #[serde(default)]
    edge_color: Option<Color>,

    /// Graphviz `splines` setting, e.g. `ortho`, `spline`, `polyline`.
    #[serde(default)]
    splines: Option<String>,

    #[serde(default)]
    categories: CategoryStyles,
}

impl StyleConfig {
    /// Background color, `None` keeps the renderer default.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn font_name(&self) -> &str {
        self.font_name.as_deref().unwrap_or("Sans-Serif")
    }

    pub fn edge_color(&self) -> Color {
        self.edge_color.unwrap_or_else(|| {
            Color::new("#7B8894").expect("default edge color is a valid CSS color")
        })
    }

    pub fn splines(&self) -> &str {
        self.splines.as_deref().unwrap_or("ortho")
    }

    /// Fill color for nodes of `category`.
    pub fn fill(&self, category: Category) -> Color {
        self.categories.fill(category)
    }
}

/// Per-category fill color overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryStyles {
    #[serde(default)]
    frontend: Option<Color>,

    #[serde(default)]
    backend: Option<Color>,

    #[serde(default)]
    datastore: Option<Color>,
}

impl CategoryStyles {
    fn fill(&self, category: Category) -> Color {
        let configured = match category {
            Category::Frontend => self.frontend,
            Category::Backend => self.backend,
            Category::Datastore => self.datastore,
        };
        configured.unwrap_or_else(|| category.default_fill())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.render().format(), OutputFormat::Png);
        assert_eq!(config.render().layout(), LayoutEngine::Dot);
        assert_eq!(config.render().direction().as_rankdir(), "LR");
        assert_eq!(config.render().output_dir(), Path::new("."));
        assert_eq!(config.style().font_name(), "Sans-Serif");
        assert_eq!(config.style().edge_color().to_hex(), "#7b8894");
        assert_eq!(
            config.style().fill(Category::Datastore),
            Category::Datastore.default_fill()
        );
    }

    #[test]
    fn test_deserialize_full_config() {
        let source = r##"
            [render]
            format = "svg"
            layout = "neato"
            direction = "TB"
            output_dir = "docs/diagrams"
            file_name = "overview"

            [style]
            background_color = "white"
            font_name = "Helvetica"
            splines = "spline"

            [style.categories]
            backend = "#ff0000"
        "##;

        let config: AppConfig = toml::from_str(source).expect("valid config");
        assert_eq!(config.render().format(), OutputFormat::Svg);
        assert_eq!(config.render().layout(), LayoutEngine::Neato);
        assert_eq!(config.render().direction(), RankDirection::TopToBottom);
        assert_eq!(config.render().output_dir(), Path::new("docs/diagrams"));
        assert_eq!(config.render().file_name(), Some("overview"));
        assert_eq!(
            config.style().background_color().unwrap().to_hex(),
            "#ffffff"
        );
        assert_eq!(config.style().splines(), "spline");
        assert_eq!(config.style().fill(Category::Backend).to_hex(), "#ff0000");
        assert_eq!(
            config.style().fill(Category::Frontend),
            Category::Frontend.default_fill()
        );
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let source = r#"
            [style]
            edge_color = "definitely-not-a-color"
        "#;

        assert!(toml::from_str::<AppConfig>(source).is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("PNG".parse::<OutputFormat>(), Ok(OutputFormat::Png));
        assert_eq!("jpeg".parse::<OutputFormat>(), Ok(OutputFormat::Jpg));
        assert_eq!("dot".parse::<OutputFormat>(), Ok(OutputFormat::Dot));
        assert!("gif".parse::<OutputFormat>().is_err());
        assert!(OutputFormat::Dot.graphviz_format().is_none());
    }

    #[test]
    fn test_layout_and_direction_from_str() {
        assert_eq!("Neato".parse::<LayoutEngine>(), Ok(LayoutEngine::Neato));
        assert_eq!(LayoutEngine::Twopi.to_string(), "twopi");
        assert!("spring".parse::<LayoutEngine>().is_err());

        assert_eq!(
            "tb".parse::<RankDirection>(),
            Ok(RankDirection::TopToBottom)
        );
        assert_eq!(RankDirection::RightToLeft.to_string(), "RL");
        assert!("up".parse::<RankDirection>().is_err());
    }

    #[test]
    fn test_render_overrides() {
        let render = RenderConfig::default()
            .with_format(OutputFormat::Dot)
            .with_output_dir("out")
            .with_layout(LayoutEngine::Circo)
            .with_direction(RankDirection::RightToLeft)
            .with_file_name("overview");

        assert_eq!(render.format(), OutputFormat::Dot);
        assert_eq!(render.output_dir(), Path::new("out"));
        assert_eq!(render.layout(), LayoutEngine::Circo);
        assert_eq!(render.direction().as_rankdir(), "RL");
        assert_eq!(render.file_name(), Some("overview"));
    }
}
