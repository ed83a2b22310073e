use std::fs;
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};

use snafu::prelude::*;

pub const DEFAULT_CONTENT: &str = r#"
# This configuration file is generated automatically. Feel free to do some
# modification.

# The `duration` section specifies the length of each interval in minutes.
[duration]
work = 25
break = 5

# The `cycle` section specifies how many work/break pairs to run.
[cycle]
count = 4

# The `notification.<interval>` section specifies the message announced
# when it is time to enter that interval. `body` is optional.
[notification.work]
summary = "It is time to work"

[notification.break]
summary = "It is time to take a break"
"#;

/// A reader which reads the configuration content and creates a default
/// configuration file if it is missing.
pub struct ContentReader {
    path: PathBuf,
    create_new: bool,
}

impl ContentReader {
    /// Creates a new [`ContentReader`].
    pub fn new<P: AsRef<Path>>(path: P, create_new: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            create_new,
        }
    }

    /// Read content from the file.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file doesn't exist and may
    /// not be created, or if reading or creating it fails.
    pub fn read(self) -> Result<String, ReadContentError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if self.create_new {
                    self.create_default()
                } else {
                    NotFoundSnafu { path: self.path }.fail()
                }
            }
            Err(err) => Err(err).context(FileSystemSnafu {
                when: "Reading configuration",
            }),
        }
    }

    /// Write the default template to the path and hand its content back.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file could not be written.
    fn create_default(&self) -> Result<String, ReadContentError> {
        fs::write(&self.path, DEFAULT_CONTENT).context(FileSystemSnafu {
            when: "Writing default configuration content",
        })?;
        Ok(DEFAULT_CONTENT.to_owned())
    }
}

/// An error type for reading content from the configuration file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadContentError {
    #[snafu(display("Could not open inexistent file {}", path.display()))]
    NotFound { path: PathBuf },
    #[snafu(display("Could not access the configuration: {when}"))]
    FileSystem { when: String, source: IoError },
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use predicates::path as path_pred;

    #[test]
    fn read_configuration() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        let content = "content for testing";
        file.write_str(content).unwrap();

        let reader = ContentReader::new(file.to_path_buf(), false);
        assert_eq!(reader.read().unwrap(), content);
    }

    #[test]
    fn read_configuration_not_found() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        file.assert(path_pred::missing());

        let reader = ContentReader::new(file.to_path_buf(), false);
        assert!(matches!(
            reader.read(),
            Err(ReadContentError::NotFound { .. })
        ));
    }

    #[test]
    fn read_configuration_creates_default() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        file.assert(path_pred::missing());

        let reader = ContentReader::new(file.to_path_buf(), true);
        assert_eq!(reader.read().unwrap(), DEFAULT_CONTENT);
        file.assert(DEFAULT_CONTENT);
    }

    #[test]
    fn default_content_parses() {
        use crate::config::Configuration;

        let configuration: Configuration = toml::from_str(DEFAULT_CONTENT).unwrap();
        assert_eq!(configuration.duration.work, 25);
        assert_eq!(configuration.duration.rest, 5);
        assert_eq!(configuration.cycle.count, 4);
    }
}
