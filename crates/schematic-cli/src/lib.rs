//! CLI logic for the Schematic diagram tool.
//!
//! Renders the web application architecture diagram described in
//! [`architecture`] with the configured format and output directory.

pub mod architecture;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::io::{self, Write};

use log::info;

use schematic::{DiagramBuilder, SchematicError, semantic::Diagram};

/// Run the Schematic CLI application
///
/// Loads the configuration, applies the command-line overrides and renders
/// the architecture diagram. With `--emit-dot` the DOT source is printed to
/// stdout and no file is written.
///
/// # Errors
///
/// Returns `SchematicError` for:
/// - Configuration loading errors
/// - Invalid diagram edges
/// - Graphviz being unavailable or failing
/// - Output write errors, including a closed stdout with `--emit-dot`
pub fn run(args: &Args) -> Result<(), SchematicError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args);

    let builder = DiagramBuilder::new(app_config);

    if args.emit_dot {
        return emit_dot(&builder, &mut io::stdout().lock());
    }

    let rendered = builder.draw(architecture::TITLE, architecture::describe)?;

    info!(
        output_path = rendered.path().display().to_string(),
        format:% = rendered.format();
        "Architecture diagram exported successfully"
    );

    Ok(())
}

/// Writes the DOT source of the architecture diagram to `out`.
fn emit_dot(builder: &DiagramBuilder, out: &mut impl Write) -> Result<(), SchematicError> {
    let mut diagram = Diagram::new(architecture::TITLE);
    architecture::describe(&mut diagram.root());

    writeln!(out, "{}", builder.to_dot(&diagram)?)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer standing in for a pipe whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_dot_writes_digraph() {
        let mut out = Vec::new();
        emit_dot(&DiagramBuilder::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("digraph"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_emit_dot_reports_closed_stdout() {
        let err = emit_dot(&DiagramBuilder::default(), &mut ClosedPipe).unwrap_err();

        match err {
            SchematicError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }
}
