//! Site configuration.
//!
//! Configuration is layered. Stock defaults are overridden by an optional
//! `quranweb.toml`, which is in turn overridden by command-line flags and
//! their environment variables:
//!
//! ```text
//! stock defaults  →  quranweb.toml  →  --flags / QURANWEB_* env
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! corpus_dir = "quran-json"        # required, QURAN_JSON_DIR
//! output_dir = "build/public"      # required
//! template_dir = "templates"       # required
//! base_url = "https://quranweb.id" # required, no trailing slash needed
//! assets_dir = "public"            # copied verbatim into output_dir
//!
//! lang_id = "id"
//! begin_chapter = 1
//! end_chapter = 114
//! app_name = "QuranWeb"
//! about_slug = "tentang"
//! project_url = ""
//! audio_base_url = ""
//! # analytics_id = "UA-XXXXX-Y"
//! # og_image_url = "https://quranweb.id/images/og.png"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Missing required keys
//! abort before anything is rendered.

use crate::reference::{self, CHAPTER_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Missing config \"{0}\"")]
    Missing(&'static str),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Raw configuration as read from defaults, file, and flags.
///
/// Required values are `Option`s here so that each layer can leave them out;
/// [`SiteConfig::into_site`] checks they were supplied by some layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Root of the quran-json corpus (contains `surah/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus_dir: Option<PathBuf>,
    /// Where the generated site is written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Directory holding the `*-layout.html` templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Static assets copied verbatim into the output root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    /// Absolute site URL used for every link, sitemap and meta tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Translation and tafsir language key in the corpus.
    pub lang_id: String,
    pub begin_chapter: u16,
    pub end_chapter: u16,
    pub app_name: String,
    /// Google Analytics id. When set, the gtag snippet goes into every page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    /// Social preview image for `og:image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_url: Option<String>,
    /// Project link shown in the menu.
    pub project_url: String,
    /// Base URL of the murottal audio files, used by the footer player.
    pub audio_base_url: String,
    /// Directory name of the about page.
    pub about_slug: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            corpus_dir: None,
            output_dir: None,
            template_dir: None,
            assets_dir: None,
            base_url: None,
            lang_id: "id".to_string(),
            begin_chapter: 1,
            end_chapter: CHAPTER_COUNT,
            app_name: "QuranWeb".to_string(),
            analytics_id: None,
            og_image_url: None,
            project_url: String::new(),
            audio_base_url: String::new(),
            about_slug: "tentang".to_string(),
        }
    }
}

/// Fully validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Site {
    pub corpus_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_dir: PathBuf,
    pub assets_dir: Option<PathBuf>,
    /// Without trailing slash.
    pub base_url: String,
    pub lang_id: String,
    pub chapters: RangeInclusive<u16>,
    pub app_name: String,
    pub analytics_id: Option<String>,
    pub og_image_url: Option<String>,
    pub project_url: String,
    pub audio_base_url: String,
    pub about_slug: String,
}

impl SiteConfig {
    /// Check required keys and value ranges, producing a [`Site`].
    pub fn into_site(self) -> Result<Site, ConfigError> {
        let corpus_dir = self.corpus_dir.ok_or(ConfigError::Missing("corpus_dir"))?;
        let output_dir = self.output_dir.ok_or(ConfigError::Missing("output_dir"))?;
        let template_dir = self
            .template_dir
            .ok_or(ConfigError::Missing("template_dir"))?;
        let base_url = self
            .base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::Missing("base_url"))?;

        if !reference::is_valid_chapter(self.begin_chapter)
            || !reference::is_valid_chapter(self.end_chapter)
        {
            return Err(ConfigError::Validation(format!(
                "begin_chapter and end_chapter must be 1-{CHAPTER_COUNT}"
            )));
        }
        if self.begin_chapter > self.end_chapter {
            return Err(ConfigError::Validation(format!(
                "begin_chapter ({}) is after end_chapter ({})",
                self.begin_chapter, self.end_chapter
            )));
        }
        if self.lang_id.trim().is_empty() {
            return Err(ConfigError::Validation("lang_id must not be empty".into()));
        }
        if self.about_slug.is_empty() || self.about_slug.contains('/') {
            return Err(ConfigError::Validation(
                "about_slug must be a single path segment".into(),
            ));
        }

        Ok(Site {
            corpus_dir,
            output_dir,
            template_dir,
            assets_dir: self.assets_dir,
            base_url,
            lang_id: self.lang_id,
            chapters: self.begin_chapter..=self.end_chapter,
            app_name: self.app_name,
            analytics_id: self.analytics_id.filter(|id| !id.is_empty()),
            og_image_url: self.og_image_url.filter(|url| !url.is_empty()),
            project_url: self.project_url,
            audio_base_url: self.audio_base_url,
            about_slug: self.about_slug,
        })
    }
}

impl Site {
    /// `{base_url}/`
    pub fn home_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// `{base_url}/{chapter}/`
    pub fn chapter_url(&self, chapter: u16) -> String {
        format!("{}/{}/", self.base_url, chapter)
    }

    /// `{base_url}/{chapter}/{verse}/`
    pub fn verse_url(&self, chapter: u16, verse: u16) -> String {
        format!("{}/{}/{}/", self.base_url, chapter, verse)
    }

    /// `{base_url}/{about_slug}/`
    pub fn about_url(&self) -> String {
        format!("{}/{}/", self.base_url, self.about_slug)
    }
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Stack `layers` on top of the stock defaults, then deserialize and validate.
pub fn resolve_config(
    layers: impl IntoIterator<Item = toml::Value>,
) -> Result<Site, ConfigError> {
    let merged = layers
        .into_iter()
        .fold(stock_defaults_value(), merge_toml);
    let config: SiteConfig = merged.try_into()?;
    config.into_site()
}

/// Load `config_file` (if present) and apply `overrides` on top.
pub fn load_config(config_file: &Path, overrides: toml::Table) -> Result<Site, ConfigError> {
    let file = load_raw_config(config_file)?;
    let layers = file
        .into_iter()
        .chain(std::iter::once(toml::Value::Table(overrides)));
    resolve_config(layers)
}

/// Returns a fully-commented stock `quranweb.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# QuranWeb Configuration
# ======================
# Every key can also be given as a command-line flag or environment
# variable; those win over this file. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Required
# ---------------------------------------------------------------------------

# Root of the quran-json corpus; surah files live in <corpus_dir>/surah/.
# Env: QURAN_JSON_DIR
# corpus_dir = "quran-json"

# Output directory for the generated site.
# Env: QURANWEB_OUTPUT_DIR
# output_dir = "build/public"

# Directory holding header/footer/menu/surah/tafsir/index/about layouts.
# Env: QURANWEB_TEMPLATE_DIR
# template_dir = "templates"

# Absolute URL of the site, used in every link, the sitemap and meta tags.
# Env: QURANWEB_BASE_URL
# base_url = "https://quranweb.id"

# ---------------------------------------------------------------------------
# Optional
# ---------------------------------------------------------------------------

# Static files (css, js, images) copied verbatim into output_dir.
# Env: QURANWEB_ASSETS_DIR
# assets_dir = "public"

# Language key for translation and tafsir in the corpus.
lang_id = "id"

# Range of surah to render (inclusive, 1-114).
begin_chapter = 1
end_chapter = 114

# Application name shown in the menu, footer and about page.
app_name = "QuranWeb"

# Directory name of the about page.
about_slug = "tentang"

# Project link shown in the menu.
project_url = ""

# Base URL of murottal audio files for the player.
audio_base_url = ""

# Google Analytics id; adds the gtag snippet to every page when set.
# analytics_id = "UA-XXXXX-Y"

# Image used for social previews (og:image).
# og_image_url = "https://quranweb.id/images/og.png"
"##
}
