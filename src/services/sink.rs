//! Output destinations for generated shapes.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::config::SinkKind;
use crate::shape::geometry::fmt_num;
use crate::shape::ShapeResult;

/// Where a rendered shape is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// System clipboard
    Clipboard,
    /// Standard output; the dimensions line goes to stderr
    Stdout,
    /// A file on disk
    File(PathBuf),
}

impl From<SinkKind> for Sink {
    fn from(kind: SinkKind) -> Self {
        match kind {
            SinkKind::Clipboard => Self::Clipboard,
            SinkKind::Stdout => Self::Stdout,
        }
    }
}

impl Sink {
    /// Writes the markup and reports the shape dimensions.
    pub fn deliver(&self, shape: &ShapeResult) -> Result<()> {
        match self {
            Self::Clipboard => {
                let mut clipboard =
                    arboard::Clipboard::new().context("Failed to open clipboard")?;
                clipboard
                    .set_text(shape.markup.clone())
                    .context("Failed to copy shape to clipboard")?;
                println!("{}", self.report(shape));
                if Self::holds_clipboard() {
                    serve_clipboard(&mut clipboard, &shape.markup)?;
                }
            }
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(shape.markup.as_bytes())
                    .and_then(|()| stdout.flush())
                    .context("Failed to write shape to stdout")?;
                eprintln!("{}", self.report(shape));
            }
            Self::File(path) => {
                fs::write(path, &shape.markup)
                    .context(format!("Failed to write shape to {}", path.display()))?;
                println!("{}", self.report(shape));
            }
        }
        info!(sink = ?self, "delivered shape");
        Ok(())
    }

    /// Whether the clipboard contents live only as long as this process.
    ///
    /// X11 and Wayland selections are owned by the copying client, so the
    /// process has to keep serving them until another client takes over.
    #[must_use]
    pub const fn holds_clipboard() -> bool {
        cfg!(target_os = "linux")
    }

    /// Human-readable summary line for a delivered shape.
    #[must_use]
    pub fn report(&self, shape: &ShapeResult) -> String {
        let size = format!(
            "width: {}, height: {}",
            fmt_num(shape.width),
            fmt_num(shape.height)
        );
        match self {
            Self::Clipboard => format!("copied to clipboard - {size}"),
            Self::Stdout => size,
            Self::File(path) => format!("wrote shape to {} - {size}", path.display()),
        }
    }
}

/// Blocks until another application replaces the clipboard contents.
#[cfg(target_os = "linux")]
fn serve_clipboard(clipboard: &mut arboard::Clipboard, markup: &str) -> Result<()> {
    use arboard::SetExtLinux;

    info!("serving clipboard until the shape is pasted or replaced");
    eprintln!("Holding the shape on the clipboard until something else is copied (Ctrl-C to stop).");
    clipboard
        .set()
        .wait()
        .text(markup.to_owned())
        .context("Failed to keep shape on clipboard")
}

#[cfg(not(target_os = "linux"))]
fn serve_clipboard(_clipboard: &mut arboard::Clipboard, _markup: &str) -> Result<()> {
    Ok(())
}
