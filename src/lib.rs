//! # QuranWeb
//!
//! A static site generator for Quran translation and tafsir pages. The input
//! is a [quran-json](https://github.com/rioastamal/quran-json) corpus, one
//! JSON file per surah; the output is a directory of plain HTML that any
//! static host can serve.
//!
//! # Pipeline
//!
//! ```text
//! config      quranweb.toml + flags  →  Site
//! corpus      surah/<n>.json         →  Chapter        (one at a time)
//! pages       Chapter + templates    →  HTML strings
//! generate    HTML strings           →  output_dir/
//! ```
//!
//! Each surah is loaded, rendered and written before the next one is read, so
//! memory use is bounded by the largest surah (Al-Baqarah with its tafsir).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Layered `quranweb.toml` loading, validation, URL helpers |
//! | [`reference`] | Built-in table of the 114 surah names and ayah counts |
//! | [`navigation`] | Previous/next targets for surah and ayah pages, with wraparound |
//! | [`corpus`] | Typed loading of the per-surah JSON files |
//! | [`template`] | `{{NAME}}` placeholder substitution and layout loading |
//! | [`pages`] | Fragment rendering with Maud and page assembly from layouts |
//! | [`sitemap`] | `sitemap.xml` and `robots.txt` |
//! | [`generate`] | The site driver: walks the range and writes every file |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Layout Files Plus Maud
//!
//! The page skeletons live in plain HTML files in the template directory, so
//! the look of the site can change without rebuilding the binary. The
//! repeated parts inside them (ayah blocks, tafsir blocks, index rows, select
//! options) are generated with [Maud](https://maud.lambda.xyz/), which keeps
//! attribute escaping out of string concatenation.
//!
//! ## Reference Table Over Corpus Scanning
//!
//! Navigation and the sitemap never look at the corpus. Surah names and ayah
//! counts come from [`reference::CHAPTERS`], so link targets are valid even
//! when only part of the corpus is rendered, and every loaded file is checked
//! against the table.
//!
//! ## Deterministic Output
//!
//! Files are written in a fixed order and the only input besides the corpus,
//! templates and config is the sitemap date. Two runs on the same day produce
//! byte-identical trees.

pub mod config;
pub mod corpus;
pub mod generate;
pub mod navigation;
pub mod output;
pub mod pages;
pub mod reference;
pub mod sitemap;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
