//! Optional RON settings file for the document source.
//!
//! Every field may be left out; missing ones keep the built-in defaults.
//!
//! ```ron
//! (
//!     origin: "https://mangafire.to",
//!     request_timeout_secs: 15,
//!     accept_language: "fr-FR,fr;q=0.8",
//! )
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use catalog_engine::SourceSettings;
use catalog_logging::catalog_info;
use ron::extensions::Extensions;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    origin: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    redirect_limit: Option<usize>,
    max_bytes: Option<u64>,
    user_agent: Option<String>,
    accept_language: Option<String>,
}

/// Defaults, overridden by `path` when one is given.
pub fn load(path: Option<&Path>) -> Result<SourceSettings> {
    let Some(path) = path else {
        return Ok(SourceSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings =
        parse(&text).with_context(|| format!("parsing settings from {}", path.display()))?;
    catalog_info!("Loaded source settings from {:?}", path);
    Ok(settings)
}

pub fn parse(text: &str) -> Result<SourceSettings> {
    let file: SettingsFile = ron::Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(text)?;

    let mut settings = SourceSettings::default();
    if let Some(origin) = file.origin {
        settings.origin = origin;
    }
    if let Some(secs) = file.connect_timeout_secs {
        settings.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.request_timeout_secs {
        settings.request_timeout = Duration::from_secs(secs);
    }
    if let Some(limit) = file.redirect_limit {
        settings.redirect_limit = limit;
    }
    if let Some(max_bytes) = file.max_bytes {
        settings.max_bytes = max_bytes;
    }
    if let Some(user_agent) = file.user_agent {
        settings.user_agent = user_agent;
    }
    if let Some(accept_language) = file.accept_language {
        settings.accept_language = accept_language;
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::{load, parse};

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = parse("(origin: \"http://localhost:8080\", request_timeout_secs: 3)").unwrap();
        assert_eq!(settings.origin, "http://localhost:8080");
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.redirect_limit, 5);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(parse("(retries: 3)").is_err());
    }

    #[test]
    fn no_path_means_defaults() {
        let settings = load(None).unwrap();
        assert_eq!(settings.origin, "https://mangafire.to");
    }

    #[test]
    fn reads_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(max_bytes: 1024, accept_language: \"fr\")").unwrap();

        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.max_bytes, 1024);
        assert_eq!(settings.accept_language, "fr");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("absent.ron");
        assert!(load(Some(missing.as_path())).is_err());
    }
}
