mod content;
mod reader;

use std::path::Path;

pub use content::{Configuration, CycleSection, DurationSection, MessageSection, NotificationSection};
pub use reader::ReadContentError;

use snafu::prelude::*;
use toml::de::Error as DeError;

use crate::utils::xdg::{Xdg, XdgError};

use reader::ContentReader;

/// An error type for loading configuration from files.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum LoadConfigurationError {
    #[snafu(display("Could not resolve XDG configuration directory"))]
    XdgConfig { source: XdgError },
    #[snafu(display("Could not read content from file"))]
    Read { source: ReadContentError },
    #[snafu(display("Could not parse invalid configurations"))]
    Parse { source: DeError },
}

/// Read configuration from the given path. Optionally create one from the
/// default template if it doesn't exist.
///
/// # Errors
///
/// This function will return an error if reading content from file fails or
/// parsing configuration fails.
pub fn load<P: AsRef<Path>>(
    path: P,
    create_new: bool,
) -> Result<Configuration, LoadConfigurationError> {
    let content = ContentReader::new(path.as_ref(), create_new)
        .read()
        .context(ReadSnafu)?;
    toml::from_str(&content).context(ParseSnafu)
}

/// Read configuration from a custom path. This won't create any new file.
///
/// # Errors
///
/// This function will return an error if reading content from file fails or
/// parsing configuration fails.
pub fn load_with_path<P: AsRef<Path>>(path: P) -> Result<Configuration, LoadConfigurationError> {
    load(path, false)
}

/// Read configuration from the XDG configuration directory. Create one from
/// the default template if it doesn't exist.
///
/// # Errors
///
/// This function will return an error if reading content from file fails or
/// parsing configuration fails.
pub fn load_with_xdg(app_name: String) -> Result<Configuration, LoadConfigurationError> {
    let path = Xdg::new(Path::new(&app_name))
        .and_then(|xdg| xdg.place_config("config.toml"))
        .context(XdgConfigSnafu)?;
    load(path, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn load_with_path_reads_existing_file() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        file.write_str("[duration]\nwork = 50\n").unwrap();

        let configuration = load_with_path(file.to_path_buf()).unwrap();
        assert_eq!(configuration.duration.work, 50);
        assert_eq!(configuration.duration.rest, 5);
    }

    #[test]
    fn load_with_path_requires_the_file() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");

        assert!(matches!(
            load_with_path(file.to_path_buf()),
            Err(LoadConfigurationError::Read { .. })
        ));
    }

    #[test]
    fn load_rejects_malformed_content() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("config.toml");
        file.write_str("[duration]\nwork = \"soon\"\n").unwrap();

        assert!(matches!(
            load(file.to_path_buf(), false),
            Err(LoadConfigurationError::Parse { .. })
        ));
    }
}
