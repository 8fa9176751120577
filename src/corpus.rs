//! Typed access to the per-surah corpus files.
//!
//! The corpus is a directory in the [quran-json] layout, one file per surah:
//!
//! ```text
//! quran-json/
//! └── surah/
//!     ├── 1.json
//!     ├── 2.json
//!     └── ...
//! ```
//!
//! Each file holds a single record keyed by the surah number:
//!
//! ```json
//! {"1": {
//!   "number": "1", "name": "الفاتحة", "name_latin": "Al-Fatihah",
//!   "number_of_ayah": "7",
//!   "text": {"1": "...", "2": "..."},
//!   "translations": {"id": {"name": "Pembukaan", "text": {"1": "..."}}},
//!   "tafsir": {"id": {"kemenag": {"name": "Kemenag", "source": "...", "text": {"1": "..."}}}}
//! }}
//! ```
//!
//! Numbers may appear as JSON numbers or numeric strings. Tafsir sources keep
//! the order they have in the file.
//!
//! [quran-json]: https://github.com/rioastamal/quran-json

use crate::reference;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Can not find quran-json directory: {0}")]
    DirectoryMissing(PathBuf),
    #[error("Can not find json file: {0}")]
    NotFound(PathBuf),
    #[error("Can not decode JSON file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One surah, validated against the reference table.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub number: u16,
    pub name_latin: String,
    /// Name in Arabic script.
    pub name_native: String,
    pub verse_count: u16,
    /// Ayah texts, index 0 holds ayah 1.
    pub texts: Vec<String>,
    pub translation: Translation,
    pub commentaries: Vec<Commentary>,
}

#[derive(Debug, Clone)]
pub struct Translation {
    /// Meaning of the surah name in the translation language.
    pub name: String,
    pub texts: Vec<String>,
}

/// One tafsir source for a whole surah.
#[derive(Debug, Clone)]
pub struct Commentary {
    pub name: String,
    /// Citation of where the tafsir text comes from.
    pub source: String,
    pub texts: Vec<String>,
}

/// Borrowed view of a single ayah.
#[derive(Debug, Clone, Copy)]
pub struct Verse<'a> {
    pub number: u16,
    pub text: &'a str,
    pub translation: &'a str,
}

/// One tafsir entry for a single ayah.
#[derive(Debug, Clone, Copy)]
pub struct CommentaryEntry<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub text: &'a str,
}

impl Chapter {
    /// The ayah at 1-based `number`, if it exists.
    pub fn verse(&self, number: u16) -> Option<Verse<'_>> {
        let idx = usize::from(number).checked_sub(1)?;
        Some(Verse {
            number,
            text: self.texts.get(idx)?,
            translation: self.translation.texts.get(idx)?,
        })
    }

    /// All ayah in order.
    pub fn verses(&self) -> impl Iterator<Item = Verse<'_>> {
        (1..=self.verse_count).filter_map(|n| self.verse(n))
    }

    /// Every tafsir entry for ayah `number`, in corpus order.
    pub fn commentary_for(&self, number: u16) -> Vec<CommentaryEntry<'_>> {
        let Some(idx) = usize::from(number).checked_sub(1) else {
            return Vec::new();
        };
        self.commentaries
            .iter()
            .filter_map(|c| {
                Some(CommentaryEntry {
                    name: &c.name,
                    source: &c.source,
                    text: c.texts.get(idx)?,
                })
            })
            .collect()
    }
}

/// Handle on a corpus directory for one language.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    lang: String,
}

impl Corpus {
    /// Open the corpus at `root`. Fails if the directory does not exist.
    pub fn open(root: &Path, lang: &str) -> Result<Self, CorpusError> {
        if !root.is_dir() {
            return Err(CorpusError::DirectoryMissing(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            lang: lang.to_string(),
        })
    }

    /// Path of the file holding surah `number`.
    pub fn chapter_path(&self, number: u16) -> PathBuf {
        self.root.join("surah").join(format!("{number}.json"))
    }

    /// Load and validate surah `number`.
    pub fn load_chapter(&self, number: u16) -> Result<Chapter, CorpusError> {
        let path = self.chapter_path(number);
        if !reference::is_valid_chapter(number) || !path.is_file() {
            return Err(CorpusError::NotFound(path));
        }
        let content = fs::read_to_string(&path).map_err(|source| CorpusError::Io {
            path: path.clone(),
            source,
        })?;
        parse_chapter(&content, number, &self.lang).map_err(|reason| CorpusError::Malformed {
            path,
            reason,
        })
    }
}

/// Parse one corpus file's contents into a [`Chapter`].
///
/// Errors are plain reasons; the caller attaches the file path.
pub fn parse_chapter(content: &str, number: u16, lang: &str) -> Result<Chapter, String> {
    let mut records: HashMap<String, RawChapter> =
        serde_json::from_str(content).map_err(|e| e.to_string())?;
    let raw = records
        .remove(&number.to_string())
        .ok_or_else(|| format!("no record for surah {number}"))?;
    raw.into_chapter(number, lang)
}

// ============================================================================
// Raw file shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawChapter {
    #[serde(deserialize_with = "number_like")]
    number: u16,
    name: String,
    name_latin: String,
    #[serde(deserialize_with = "number_like")]
    number_of_ayah: u16,
    text: HashMap<String, String>,
    translations: HashMap<String, RawTranslation>,
    #[serde(default)]
    tafsir: HashMap<String, Ordered<RawCommentary>>,
}

#[derive(Debug, Deserialize)]
struct RawTranslation {
    name: String,
    text: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawCommentary {
    name: String,
    source: String,
    text: HashMap<String, String>,
}

impl RawChapter {
    fn into_chapter(mut self, number: u16, lang: &str) -> Result<Chapter, String> {
        if self.number != number {
            return Err(format!(
                "record for surah {number} claims number {}",
                self.number
            ));
        }
        let expected = reference::chapter(number).verse_count;
        if self.number_of_ayah != expected {
            return Err(format!(
                "number_of_ayah is {}, expected {expected}",
                self.number_of_ayah
            ));
        }
        let count = self.number_of_ayah;

        let texts = ordered_texts(self.text, count, "text")?;
        let translation = self
            .translations
            .remove(lang)
            .ok_or_else(|| format!("no translation for language \"{lang}\""))?;
        let translation = Translation {
            name: translation.name,
            texts: ordered_texts(translation.text, count, "translation")?,
        };

        let commentaries = self
            .tafsir
            .remove(lang)
            .map(|sources| {
                sources
                    .0
                    .into_iter()
                    .map(|(key, raw)| {
                        Ok(Commentary {
                            name: raw.name,
                            source: raw.source,
                            texts: ordered_texts(raw.text, count, &format!("tafsir {key}"))?,
                        })
                    })
                    .collect::<Result<Vec<_>, String>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Chapter {
            number,
            name_latin: self.name_latin,
            name_native: self.name,
            verse_count: count,
            texts,
            translation,
            commentaries,
        })
    }
}

/// Turn a `{"1": .., "2": ..}` map into a vector, requiring every ayah.
fn ordered_texts(
    mut map: HashMap<String, String>,
    count: u16,
    what: &str,
) -> Result<Vec<String>, String> {
    (1..=count)
        .map(|n| {
            map.remove(&n.to_string())
                .ok_or_else(|| format!("{what} missing for ayah {n}"))
        })
        .collect()
}

/// Accepts `7` as well as `"7"`.
fn number_like<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberLike {
        Number(u16),
        Text(String),
    }

    match NumberLike::deserialize(deserializer)? {
        NumberLike::Number(n) => Ok(n),
        NumberLike::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got \"{s}\""))),
    }
}

/// A JSON object deserialized as key/value pairs in document order.
#[derive(Debug)]
struct Ordered<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}
