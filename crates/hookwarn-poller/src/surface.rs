//! Render surfaces: where banner text lands.
//!
//! The original overwrote a DOM element's content; here a surface is
//! anything whose whole content can be replaced with the latest text.
//! The text is written verbatim — the endpoint is trusted to return
//! safe content.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to write surface {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// A render target whose entire content is replaced on change.
pub trait Surface: Send {
    /// Replace the surface content with `text`.
    fn replace(&mut self, text: &str) -> Result<(), SurfaceError>;
}

/// File-backed surface: the file content mirrors the banner content.
/// An empty body yields an empty file (banner hidden).
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    /// Surface for `target_id` under `dir`.
    pub fn new(dir: &Path, target_id: &str) -> Self {
        Self {
            path: dir.join(target_id),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for FileSurface {
    fn replace(&mut self, text: &str) -> Result<(), SurfaceError> {
        fs::write(&self.path, text).map_err(|source| SurfaceError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// In-memory surface for tests and one-shot commands.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    content: String,
    replaced: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of times the content was replaced.
    pub fn replaced(&self) -> usize {
        self.replaced
    }
}

impl Surface for MemorySurface {
    fn replace(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.content = text.to_string();
        self.replaced += 1;
        Ok(())
    }
}
