mod session;

pub use session::run_session;

use crate::archive::{Category, ContentSource};
use crate::config::RenderFormat;
use crate::view::{self, ArchiveView};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::info;

pub struct App {
    pub source: Arc<dyn ContentSource>,
    pub format: RenderFormat,
    pub output: Option<PathBuf>,
    pub discard_stale: bool,
}

impl App {
    /// Loads one tab and renders it.
    pub async fn run_once(&self, category: Category) -> Result<()> {
        let mut view = ArchiveView::new(self.discard_stale);
        view.refresh(self.source.as_ref(), category).await;
        self.emit(&view)
    }

    /// Tab switching driven by category keys on stdin.
    pub async fn run_interactive(&self, initial: Category) -> Result<()> {
        info!("Type a category (releases, mixes, interviews) to switch tabs, 'quit' to leave");
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        run_session(
            stdin,
            Arc::clone(&self.source),
            initial,
            self.discard_stale,
            |view| self.emit(view),
        )
        .await?;
        Ok(())
    }

    fn emit(&self, view: &ArchiveView) -> Result<()> {
        let page = view::render(view, self.format);
        match &self.output {
            Some(path) => write_atomically(path, &page),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(page.as_bytes())
                    .context("Failed to write to stdout")?;
                stdout.flush().context("Failed to flush stdout")
            }
        }
    }
}

/// Writes through a sibling temp file so readers never see a partial page.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .context("Failed to write rendered page")?;
    file.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
