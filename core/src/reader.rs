//! Sources of instrument data for the softsynth backends.
//!
//! A reader is handed to a backend config for one instrument load. The
//! config only keeps a shared handle to it.

use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO Error")]
    IOError(#[from] io::Error),
}

pub type ReaderStream = Box<dyn Read + Send>;

pub trait SoundFontReader: Send + Sync + fmt::Debug {
    /// Identity of the instrument set, compared against the cached set's
    /// `loaded_config`.
    fn name(&self) -> &str;

    /// Directory that relative patch names are resolved against.
    fn base_path(&self) -> Option<&Path> {
        None
    }

    /// Opens the main file (the config file or the SoundFont itself).
    fn open_main(&self) -> Result<ReaderStream, ReaderError>;

    /// Opens a file referenced from the main file.
    fn open_file(&self, name: &str) -> Result<ReaderStream, ReaderError>;
}

/// Reads instrument data from the file system.
///
/// Relative names are looked up in the main file's directory first and then
/// in each search path, in the order they were added.
#[derive(Debug, Clone)]
pub struct FileSystemReader {
    name: String,
    main_file: PathBuf,
    base_path: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
}

impl FileSystemReader {
    pub fn new(main_file: impl Into<PathBuf>) -> Self {
        let main_file: PathBuf = main_file.into();
        let base_path = main_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);

        Self {
            name: main_file.to_string_lossy().into_owned(),
            main_file,
            base_path,
            search_paths: Vec::new(),
        }
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_search_path(path);
        self
    }

    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }

        self.base_path
            .iter()
            .chain(self.search_paths.iter())
            .map(|dir| dir.join(path))
            .find(|candidate| candidate.is_file())
    }
}

impl SoundFontReader for FileSystemReader {
    fn name(&self) -> &str {
        &self.name
    }

    fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    fn open_main(&self) -> Result<ReaderStream, ReaderError> {
        match File::open(&self.main_file) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ReaderError::NotFound(self.name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn open_file(&self, name: &str) -> Result<ReaderStream, ReaderError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| ReaderError::NotFound(name.to_owned()))?;
        log::trace!("Opening {} for {}", path.display(), self.name);
        Ok(Box::new(File::open(path)?))
    }
}

/// Serves instrument data from memory, e.g. from an embedded resource.
#[derive(Clone)]
pub struct MemoryReader {
    name: String,
    main: Arc<[u8]>,
    files: HashMap<String, Arc<[u8]>>,
}

impl MemoryReader {
    pub fn new(name: impl Into<String>, main: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            main: main.into(),
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        self.files.insert(name.into(), data.into());
        self
    }
}

impl fmt::Debug for MemoryReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryReader")
            .field("name", &self.name)
            .field("main_len", &self.main.len())
            .field("files", &self.files.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SoundFontReader for MemoryReader {
    fn name(&self) -> &str {
        &self.name
    }

    fn open_main(&self) -> Result<ReaderStream, ReaderError> {
        Ok(Box::new(Cursor::new(self.main.clone())))
    }

    fn open_file(&self, name: &str) -> Result<ReaderStream, ReaderError> {
        self.files
            .get(name)
            .map(|data| Box::new(Cursor::new(data.clone())) as ReaderStream)
            .ok_or_else(|| ReaderError::NotFound(name.to_owned()))
    }
}
