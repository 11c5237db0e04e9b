//! Schematic - declarative architecture diagrams rendered through Graphviz.
//!
//! A diagram is described with plain Rust calls: nodes tagged with a
//! [`Category`](category::Category), nested clusters, and edges between them.
//! When the description is complete it is validated, converted to DOT and
//! handed to Graphviz, which lays it out and writes the image.

pub mod config;
pub mod export;

mod error;
mod output;
mod structure;

pub use schematic_core::{category, color, identifier, semantic};

pub use error::SchematicError;
pub use output::{Rendered, file_name};
pub use structure::DiagramStats;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, dot::DotBuilder, graphviz::GraphvizExporter};
use semantic::{Diagram, Scope};

/// Builder for describing and rendering Schematic diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use schematic::{DiagramBuilder, category::Category};
///
/// let rendered = DiagramBuilder::default()
///     .draw("Architecture", |root| {
///         let db = root.node("MariaDB", Category::Datastore);
///         root.cluster("Server", |server| {
///             let main = server.node("main.rs", Category::Backend);
///             server.connect(main, db);
///         });
///     })
///     .expect("Failed to render");
///
/// println!("written to {}", rendered.path().display());
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Describes a diagram inside `build` and renders it once `build` returns.
    ///
    /// This is the scoped form of [`DiagramBuilder::render`]: the diagram only
    /// exists for the duration of the call.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render`].
    pub fn draw(
        &self,
        title: &str,
        build: impl FnOnce(&mut Scope<'_>),
    ) -> Result<Rendered, SchematicError> {
        let mut exporter = GraphvizExporter::new(self.config.render().layout());
        self.draw_with(title, &mut exporter, build)
    }

    /// Like [`DiagramBuilder::draw`], rendering through `exporter`.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render`].
    pub fn draw_with(
        &self,
        title: &str,
        exporter: &mut dyn Exporter,
        build: impl FnOnce(&mut Scope<'_>),
    ) -> Result<Rendered, SchematicError> {
        let mut diagram = Diagram::new(title);
        build(&mut diagram.root());
        self.render_with(diagram, exporter)
    }

    /// Renders a finished diagram with Graphviz and writes the image.
    ///
    /// The diagram is consumed: once rendered it cannot be extended.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::Graph`] for invalid edges,
    /// [`SchematicError::Export`] if Graphviz is missing or fails, and
    /// [`SchematicError::Io`] if the output cannot be written. No output file
    /// is created on error.
    pub fn render(&self, diagram: Diagram) -> Result<Rendered, SchematicError> {
        let mut exporter = GraphvizExporter::new(self.config.render().layout());
        self.render_with(diagram, &mut exporter)
    }

    /// Like [`DiagramBuilder::render`], rendering through `exporter`.
    ///
    /// # Errors
    ///
    /// See [`DiagramBuilder::render`].
    pub fn render_with(
        &self,
        diagram: Diagram,
        exporter: &mut dyn Exporter,
    ) -> Result<Rendered, SchematicError> {
        info!(title = diagram.title(); "Rendering diagram");

        let stats = self.stats(&diagram)?;
        debug!(stats:?; "Diagram structure analyzed");

        let graph = DotBuilder::new(&self.config).build(&diagram)?;
        trace!(dot = export::dot::print(&graph); "DOT source");

        let render = self.config.render();
        let format = render.format();
        let bytes = exporter.export(graph, format)?;

        let name = match render.file_name() {
            Some(stem) => format!("{stem}.{}", format.extension()),
            None => file_name(diagram.title(), format),
        };
        let rendered = output::write(render.output_dir(), &name, &bytes, format)?;

        info!(
            output_path = rendered.path().display().to_string(),
            size = rendered.size();
            "Diagram rendered"
        );
        Ok(rendered)
    }

    /// Converts a diagram to DOT text without rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::Graph`] for invalid edges.
    pub fn to_dot(&self, diagram: &Diagram) -> Result<String, SchematicError> {
        let graph = DotBuilder::new(&self.config).build(diagram)?;
        Ok(export::dot::print(&graph))
    }

    /// Validates a diagram and summarizes its structure.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::Graph`] for invalid edges.
    pub fn stats(&self, diagram: &Diagram) -> Result<DiagramStats, SchematicError> {
        diagram.validate()?;
        let stats = structure::analyze(diagram)?;
        if stats.cyclic {
            info!(title = diagram.title(); "Diagram contains a dependency cycle");
        }
        Ok(stats)
    }
}
