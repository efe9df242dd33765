//! Texture loading seam
//!
//! The game never touches pixel data; it only asks a loader for opaque handles
//! and hands them to the renderer.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Failure to produce a texture handle
#[derive(Debug)]
pub enum AssetError {
    /// No file at the path
    NotFound(PathBuf),
    /// The file exists but could not be decoded
    Decode { path: PathBuf, reason: String },
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "texture not found: {}", path.display()),
            AssetError::Decode { path, reason } => {
                write!(f, "failed to decode {}: {}", path.display(), reason)
            }
            AssetError::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Something that turns an image path into a texture handle
pub trait AssetLoader {
    fn load(&mut self, path: &Path) -> Result<TextureHandle, AssetError>;
}

impl<F> AssetLoader for F
where
    F: FnMut(&Path) -> Result<TextureHandle, AssetError>,
{
    fn load(&mut self, path: &Path) -> Result<TextureHandle, AssetError> {
        self(path)
    }
}

/// Texture slots the renderer draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Background,
    Base,
    Pipe,
    Bird,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 4] = [
        TextureSlot::Background,
        TextureSlot::Base,
        TextureSlot::Pipe,
        TextureSlot::Bird,
    ];

    /// Image file name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TextureSlot::Background => "background-day.png",
            TextureSlot::Base => "base.png",
            TextureSlot::Pipe => "pipe-green.png",
            TextureSlot::Bird => "yellow-bird.png",
        }
    }
}

/// Every texture the game draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Textures {
    pub background: TextureHandle,
    pub base: TextureHandle,
    pub pipe: TextureHandle,
    pub bird: TextureHandle,
}

impl Textures {
    /// Load all textures from `dir`; the first failure aborts the load
    pub fn load(loader: &mut impl AssetLoader, dir: &Path) -> Result<Self, AssetError> {
        let mut load = |slot: TextureSlot| {
            let path = dir.join(slot.file_name());
            let handle = loader.load(&path)?;
            log::debug!("Loaded {} as {:?}", path.display(), handle);
            Ok::<_, AssetError>(handle)
        };

        Ok(Self {
            background: load(TextureSlot::Background)?,
            base: load(TextureSlot::Base)?,
            pipe: load(TextureSlot::Pipe)?,
            bird: load(TextureSlot::Bird)?,
        })
    }

    pub fn handle(&self, slot: TextureSlot) -> TextureHandle {
        match slot {
            TextureSlot::Background => self.background,
            TextureSlot::Base => self.base,
            TextureSlot::Pipe => self.pipe,
            TextureSlot::Bird => self.bird,
        }
    }
}

/// Loader for the headless host: checks the file exists and hands out
/// sequential handles without decoding anything.
#[derive(Debug)]
pub struct HeadlessAssets {
    next: u32,
    /// Skip the existence check (no asset directory shipped)
    pub virtual_files: bool,
}

impl HeadlessAssets {
    pub fn new(virtual_files: bool) -> Self {
        Self {
            next: 1,
            virtual_files,
        }
    }
}

impl AssetLoader for HeadlessAssets {
    fn load(&mut self, path: &Path) -> Result<TextureHandle, AssetError> {
        if !self.virtual_files {
            let meta = std::fs::metadata(path).map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => AssetError::NotFound(path.to_path_buf()),
                _ => AssetError::Io {
                    path: path.to_path_buf(),
                    source,
                },
            })?;
            if !meta.is_file() {
                return Err(AssetError::Decode {
                    path: path.to_path_buf(),
                    reason: "not a regular file".to_string(),
                });
            }
        }

        let handle = TextureHandle(self.next);
        self.next += 1;
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_all_slots_in_order() {
        let mut assets = HeadlessAssets::new(true);
        let textures = Textures::load(&mut assets, Path::new("assets")).unwrap();
        assert_eq!(textures.background, TextureHandle(1));
        assert_eq!(textures.bird, TextureHandle(4));
        assert_eq!(textures.handle(TextureSlot::Pipe), TextureHandle(3));
    }

    #[test]
    fn test_first_failure_aborts() {
        let mut calls = Vec::new();
        let mut loader = |path: &Path| {
            calls.push(path.to_path_buf());
            if path.ends_with("pipe-green.png") {
                Err(AssetError::Decode {
                    path: path.to_path_buf(),
                    reason: "bad header".to_string(),
                })
            } else {
                Ok(TextureHandle(calls.len() as u32))
            }
        };

        let err = Textures::load(&mut loader, Path::new("assets")).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("bad header"));
        drop(loader);
        // Bird is never requested
        assert_eq!(calls.len(), 3);
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let mut assets = HeadlessAssets::new(false);
        let err = assets
            .load(Path::new("definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }
}
