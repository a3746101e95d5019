//! Texture bookkeeping
//!
//! The core never uploads or samples pixels; it only needs each texture's
//! native dimensions (entity size is fixed at load time) and a handle the
//! draw surface can resolve. The store owns the handles so no global
//! texture state exists anywhere.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Opaque handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

/// A loaded texture's metadata
#[derive(Debug, Clone)]
pub struct Texture {
    /// Handle for draw calls
    pub id: TextureId,
    /// Source file the texture was read from
    pub path: PathBuf,
    /// Native width in pixels
    pub width: u32,
    /// Native height in pixels
    pub height: u32,
}

/// Owns every texture handle for the process lifetime
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: Vec<Texture>,
}

impl TextureStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture, recording its native dimensions
    ///
    /// Textures are required media: a missing or corrupt file is a fatal
    /// setup error for the caller.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<TextureId, AssetError> {
        let path = path.as_ref();
        let (width, height) =
            image::image_dimensions(path).map_err(|source| AssetError::Image {
                path: path.to_path_buf(),
                source,
            })?;
        if width == 0 || height == 0 {
            return Err(AssetError::EmptyImage {
                path: path.to_path_buf(),
            });
        }

        let id = TextureId(self.textures.len());
        log::info!(
            "Loaded texture {} ({}x{})",
            path.display(),
            width,
            height
        );
        self.textures.push(Texture {
            id,
            path: path.to_path_buf(),
            width,
            height,
        });
        Ok(id)
    }

    /// Look up a loaded texture
    ///
    /// Handles are only minted by [`Self::load`], so a lookup cannot miss.
    #[must_use]
    pub fn get(&self, id: TextureId) -> &Texture {
        &self.textures[id.0]
    }
}

/// Texture fixture for unit tests, bypassing file I/O
#[cfg(test)]
pub(crate) fn test_texture(width: u32, height: u32) -> Texture {
    Texture {
        id: TextureId(0),
        path: PathBuf::new(),
        width,
        height,
    }
}

/// Texture loading failures (fatal tier)
#[derive(Error, Debug)]
pub enum AssetError {
    /// The image file could not be read or decoded
    #[error("failed to read texture {path}: {source}")]
    Image {
        /// Offending file
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },

    /// The image decoded to zero size
    #[error("texture {path} has zero width or height")]
    EmptyImage {
        /// Offending file
        path: PathBuf,
    },
}
