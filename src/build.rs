//! Exports the [`Generator`], which collects the posts of a site into a
//! [`FileList`] sorted by date. The generator reads candidate files through a
//! [`Source`], skips files that are not posts (see [`Generator::is_valid`]),
//! extracts each post's front matter ([`crate::frontmatter`]), and sorts the
//! result once every file has been seen.

use crate::config::Config;
use crate::filelist::FileList;
use crate::frontmatter;
use crate::metadata::Metadata;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The extension of post source files.
pub const HTML_EXTENSION: &str = ".html";

/// Supplies the names and contents of candidate post files.
pub trait Source {
    /// Lists the candidate file names. Failing here fails the whole build.
    fn names(&self) -> io::Result<Vec<String>>;

    /// Reads the contents of the file called `name`.
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// A [`Source`] backed by the regular files directly inside a directory.
/// Subdirectories are ignored.
pub struct DirSource {
    directory: PathBuf,
}

impl DirSource {
    pub fn new<P: Into<PathBuf>>(directory: P) -> DirSource {
        DirSource {
            directory: directory.into(),
        }
    }
}

impl Source for DirSource {
    fn names(&self) -> io::Result<Vec<String>> {
        let annotate = |e: io::Error| {
            let message = format!("{}: {}", self.directory.display(), e);
            io::Error::new(e.kind(), message)
        };

        let mut names = Vec::new();
        for result in std::fs::read_dir(&self.directory).map_err(annotate)? {
            let entry = result.map_err(annotate)?;
            if entry.file_type().map_err(annotate)?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.directory.join(name))
    }
}

/// Builds the [`FileList`] for a site.
pub struct Generator {
    config: Config,

    /// The structural template files that live next to the posts but are not
    /// posts themselves, keyed by role (`archive`, `layout`, `post`).
    meta_files: HashMap<String, String>,
}

impl Generator {
    /// Loads the configuration at `config_path` and returns a generator with
    /// the default meta files.
    pub fn new(config_path: &Path) -> anyhow::Result<Generator> {
        Ok(Generator::with_config(Config::from_file(config_path)?))
    }

    pub fn with_config(config: Config) -> Generator {
        let meta_files = vec![
            ("archive", "archive.html"),
            ("layout", "layout.html"),
            ("post", "post.html"),
        ]
        .into_iter()
        .map(|(role, file_name)| (role.to_owned(), file_name.to_owned()))
        .collect();
        Generator { config, meta_files }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the file name registered for a meta file role (e.g.,
    /// `layout`).
    pub fn meta_file(&self, role: &str) -> Option<&str> {
        self.meta_files.get(role).map(String::as_str)
    }

    /// Returns whether `file_name` is one of the structural template files.
    pub fn is_meta_file(&self, file_name: &str) -> bool {
        self.meta_files.values().any(|v| v == file_name)
    }

    /// Returns whether `file_name` is a post: it must end with `.html` and not
    /// be a meta file.
    pub fn is_valid(&self, file_name: &str) -> bool {
        file_name.ends_with(HTML_EXTENSION) && !self.is_meta_file(file_name)
    }

    /// Collects every post in `source` into a [`FileList`] sorted by date.
    /// Only failing to list the candidates is fatal; a file that can't be
    /// read or whose front matter is broken is logged and left out. Files
    /// without front matter are kept with empty [`Metadata`].
    pub fn build<S: Source + ?Sized>(&self, source: &S) -> Result<FileList> {
        let mut names = source.names().map_err(Error::Enumerate)?;
        // Visit in a fixed order so that posts with equal dates sort the same
        // way on every platform.
        names.sort();

        let mut list = FileList::new();
        for name in names.iter().filter(|name| self.is_valid(name)) {
            let content = match source.read(name) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping {}: {}", name, e);
                    continue;
                }
            };
            match frontmatter::extract(&content) {
                Ok((tail, Some(metadata))) => {
                    debug!("Collected {} ({:?})", name, metadata.title);
                    list.append(metadata, tail.to_vec());
                }
                Ok((tail, None)) => {
                    debug!("Collected {} (no front matter)", name);
                    list.append(Metadata::default(), tail.to_vec());
                }
                Err(e) => {
                    warn!("Failed to extract metadata from {}: {}", name, e)
                }
            }
        }

        list.sort_by_date();
        info!("Collected {} posts", list.len());
        Ok(list)
    }

    /// Collects the posts from the files directly inside `directory`.
    pub fn collect_files(&self, directory: &Path) -> Result<FileList> {
        self.build(&DirSource::new(directory))
    }
}

/// The result of building a [`FileList`].
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for building a [`FileList`]. Only problems with the
/// [`Source`] as a whole are errors; problems with single files are not.
#[derive(Debug)]
pub enum Error {
    /// Returned when the candidate files can't be listed.
    Enumerate(io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Enumerate(err) => write!(f, "Listing source files: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Enumerate(err) => Some(err),
        }
    }
}
