use std::io::Error as IoError;
use std::path::{Path, PathBuf};

use snafu::prelude::*;
use xdg::{BaseDirectories, BaseDirectoriesError};

/// Helper for resolving the configuration file in XDG base directories.
/// All file system operations are performed in a subdirectory named prefix.
pub struct Xdg {
    base: BaseDirectories,
}

impl Xdg {
    /// Create a [`Xdg`].
    ///
    /// # Errors
    ///
    /// This function will return an error if XDG settings is missing.
    pub fn new<P: AsRef<Path>>(prefix: P) -> Result<Self, XdgError> {
        let base = BaseDirectories::with_prefix(prefix).context(InitSnafu)?;
        Ok(Self { base })
    }

    /// Resolve the absolute path for a configuration file and create the
    /// leading directories if they didn't exist before.
    ///
    /// # Errors
    ///
    /// This function will return an error if creating directories fails.
    pub fn place_config<P: AsRef<Path>>(&self, file: P) -> Result<PathBuf, XdgError> {
        self.base.place_config_file(file).context(FileSystemSnafu {
            message: "Could not create configuration directory for application",
        })
    }
}

/// An error type for XDG base directory operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum XdgError {
    #[snafu(display("Could not read XDG settings"))]
    Init { source: BaseDirectoriesError },
    #[snafu(display("{message}"))]
    FileSystem { message: String, source: IoError },
}
