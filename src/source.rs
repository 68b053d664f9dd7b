//! Lyric sources.
//!
//! The parser itself never performs I/O; a source hands it complete song
//! texts. Filesystem sources live here; a catalog-backed source would
//! implement the same trait.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::source::LYRIC_EXTENSIONS;
use crate::error::{Error, Result};

/// One song's complete lyric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongText {
    /// Display title, taken from the file stem.
    pub title: String,
    /// Raw text as loaded.
    pub text: String,
    /// Whether the text is HTML and should be sanitized first.
    pub html: bool,
}

impl SongText {
    /// Create a song text.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { title: title.into(), text: text.into(), html: false }
    }
}

/// Trait for anything that can produce song texts.
pub trait LyricsSource: Send + Sync {
    /// Load every song this source knows about.
    fn load(&self) -> Result<Vec<SongText>>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &'static str;
}

fn is_lyric_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| LYRIC_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

fn read_song(path: &Path) -> Result<SongText> {
    let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string();
    Ok(SongText { title, text, html: is_html(path) })
}

/// A single lyric file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for one file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LyricsSource for FileSource {
    fn load(&self) -> Result<Vec<SongText>> {
        Ok(vec![read_song(&self.path)?])
    }

    fn name(&self) -> &'static str {
        "FileSource"
    }
}

/// Every lyric file under a directory, sorted by path.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source scanning `root` recursively.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl LyricsSource for DirectorySource {
    fn load(&self) -> Result<Vec<SongText>> {
        if !self.root.is_dir() {
            return Err(Error::lyrics_source(format!(
                "Lyrics path does not exist or is not a directory: {}",
                self.root.display()
            )));
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && is_lyric_file(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        paths.sort();

        let songs: Vec<SongText> = paths
            .iter()
            .filter_map(|path| match read_song(path) {
                Ok(song) => Some(song),
                Err(e) => {
                    tracing::warn!("Skipping unreadable lyrics file: {e}");
                    None
                }
            })
            .collect();

        tracing::info!("Loaded {} songs from {}", songs.len(), self.root.display());
        Ok(songs)
    }

    fn name(&self) -> &'static str {
        "DirectorySource"
    }
}

/// Pick a file or directory source for `path`.
pub fn source_for(path: &Path) -> Box<dyn LyricsSource> {
    if path.is_dir() {
        Box::new(DirectorySource::new(path))
    } else {
        Box::new(FileSource::new(path))
    }
}
