//! Site generation.
//!
//! Walks the configured surah range in order, loads each surah from the
//! corpus, and writes its pages. The home page, about page, robots.txt and
//! sitemap are written once the loop is done.
//!
//! ## Output Structure
//!
//! ```text
//! build/public/
//! ├── index.html              # Surah list
//! ├── robots.txt
//! ├── sitemap.xml
//! ├── tentang/
//! │   └── index.html          # About page
//! ├── 1/
//! │   ├── index.html          # Surah page (all ayah)
//! │   ├── 1/index.html        # Ayah page with tafsir
//! │   └── ...
//! ├── ...
//! └── css/, js/, ...          # Copied from the assets directory
//! ```
//!
//! Every file name is a function of the surah and ayah number, so a run
//! always overwrites the previous one in full. A failure stops the run at the
//! failing surah and leaves already written files in place.

use crate::config::Site;
use crate::corpus::{Chapter, Corpus, CorpusError};
use crate::pages::{Chrome, HomeIndex, PageBuilder};
use crate::sitemap;
use crate::template::{TemplateError, Templates};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("Can not find assets directory: {0}")]
    AssetsMissing(PathBuf),
    #[error("Can not copy assets: {0}")]
    Assets(#[from] walkdir::Error),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What one surah contributed to a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub number: u16,
    pub name: String,
    pub verse_count: u16,
}

impl From<&Chapter> for ChapterSummary {
    fn from(chapter: &Chapter) -> Self {
        Self {
            number: chapter.number,
            name: chapter.name_latin.clone(),
            verse_count: chapter.verse_count,
        }
    }
}

/// Result of a full run, for CLI output.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub chapters: Vec<ChapterSummary>,
    pub assets_copied: usize,
    pub about_slug: String,
}

impl BuildReport {
    pub fn verse_pages(&self) -> usize {
        self.chapters
            .iter()
            .map(|c| usize::from(c.verse_count))
            .sum()
    }
}

/// Render the whole site described by `site`, stamping the sitemap with
/// `build_date`.
pub fn generate(site: &Site, build_date: NaiveDate) -> Result<BuildReport, GenerateError> {
    let corpus = Corpus::open(&site.corpus_dir, &site.lang_id)?;
    let templates = Templates::load(&site.template_dir)?;
    let chrome = Chrome::render(&templates, site);
    let builder = PageBuilder::new(site, &templates, &chrome);

    create_dir(&site.output_dir)?;
    let assets_copied = match &site.assets_dir {
        Some(dir) => copy_assets(dir, &site.output_dir)?,
        None => 0,
    };
    tracing::info!(files = assets_copied, "copied assets");

    let mut chapters = Vec::new();
    let index = site
        .chapters
        .clone()
        .try_fold(HomeIndex::default(), |index, number| -> Result<_, GenerateError> {
            let chapter = corpus.load_chapter(number)?;
            write_chapter(&builder, &chapter)?;
            tracing::info!(
                surah = chapter.number,
                name = %chapter.name_latin,
                ayah = chapter.verse_count,
                "rendered surah"
            );
            chapters.push(ChapterSummary::from(&chapter));
            Ok(index.with_row(site, &chapter))
        })?;

    write_page(&site.output_dir.join("index.html"), &builder.home_page(&index))?;

    let about_dir = site.output_dir.join(&site.about_slug);
    create_dir(&about_dir)?;
    write_page(&about_dir.join("index.html"), &builder.about_page())?;

    write_page(
        &site.output_dir.join("robots.txt"),
        &sitemap::build_robots(site),
    )?;
    write_page(
        &site.output_dir.join("sitemap.xml"),
        &sitemap::build_sitemap(site, build_date),
    )?;

    Ok(BuildReport {
        output_dir: site.output_dir.clone(),
        chapters,
        assets_copied,
        about_slug: site.about_slug.clone(),
    })
}

/// Load and validate every surah in range without writing anything.
pub fn check(site: &Site) -> Result<Vec<ChapterSummary>, GenerateError> {
    let corpus = Corpus::open(&site.corpus_dir, &site.lang_id)?;
    Templates::load(&site.template_dir)?;
    site.chapters
        .clone()
        .map(|number| -> Result<_, GenerateError> {
            let chapter = corpus.load_chapter(number)?;
            Ok(ChapterSummary::from(&chapter))
        })
        .collect()
}

/// Write `/{surah}/index.html` and every `/{surah}/{ayah}/index.html`.
fn write_chapter(builder: &PageBuilder<'_>, chapter: &Chapter) -> Result<(), GenerateError> {
    let chapter_dir = builder.site.output_dir.join(chapter.number.to_string());
    create_dir(&chapter_dir)?;

    for verse in chapter.verses() {
        let verse_dir = chapter_dir.join(verse.number.to_string());
        create_dir(&verse_dir)?;
        write_page(
            &verse_dir.join("index.html"),
            &builder.verse_page(chapter, verse),
        )?;
    }

    write_page(
        &chapter_dir.join("index.html"),
        &builder.chapter_page(chapter),
    )
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_page(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote");
    Ok(())
}

/// Copy the assets tree into the output root, returning the file count.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Err(GenerateError::AssetsMissing(src.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|source| GenerateError::Io {
                path: target.clone(),
                source,
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}
