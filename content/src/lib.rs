//! Configuration and site content loading for Folio.
//!
//! Two inputs live on disk, both TOML:
//!
//! - `~/.folio/config.toml` — appearance, simulated-submission latency,
//!   and an optional path to replacement site content. Missing file
//!   means defaults.
//! - `site.toml` — the hand-authored portfolio content. A default copy
//!   ships embedded in the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use folio_types::Site;
use folio_types::ui::UiOptions;

const BUILTIN_SITE: &str = include_str!("../site.toml");

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// The embedded default site content.
#[must_use]
pub fn builtin_site() -> Site {
    // The embedded copy is authored alongside this crate; failing to
    // parse it is a build defect, not a runtime condition.
    toml::from_str(BUILTIN_SITE).expect("embedded site.toml is valid")
}

/// Load replacement site content from a user-supplied path.
pub fn load_site(path: &Path) -> Result<Site, ContentError> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub appearance: Option<AppearanceConfig>,
    pub submission: Option<SubmissionConfig>,
    pub site: Option<SiteConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppearanceConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable animations and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmissionConfig {
    /// Simulated delivery latency in milliseconds.
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SiteConfig {
    /// Path to a site.toml replacing the embedded content.
    pub path: Option<PathBuf>,
}

impl FolioConfig {
    /// Resolve the config file path: `$FOLIO_CONFIG` if set, otherwise
    /// `~/.folio/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
    }

    /// Load the config file. A missing file yields defaults; an
    /// unreadable or malformed file is an error.
    pub fn load() -> Result<Self, ContentError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path).map_err(|source| ContentError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ContentError::Parse { path, source })
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let appearance = self.appearance.as_ref();
        UiOptions {
            ascii_only: appearance.is_some_and(|a| a.ascii_only),
            high_contrast: appearance.is_some_and(|a| a.high_contrast),
            reduced_motion: appearance.is_some_and(|a| a.reduced_motion),
        }
    }

    #[must_use]
    pub fn submission_latency(&self) -> Duration {
        self.submission
            .as_ref()
            .and_then(|s| s.latency_ms)
            .map_or(DEFAULT_LATENCY, Duration::from_millis)
    }

    /// The site content this config selects: an override file when
    /// `[site] path` is set, otherwise the embedded default.
    pub fn resolve_site(&self) -> Result<Site, ContentError> {
        match self.site.as_ref().and_then(|s| s.path.as_ref()) {
            Some(path) => {
                debug!(path = %path.display(), "Loading site content override");
                load_site(path)
            }
            None => Ok(builtin_site()),
        }
    }
}
