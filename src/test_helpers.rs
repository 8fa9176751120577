//! Shared test utilities.
//!
//! Two kinds of corpus are available: the hand-written Al-Fatihah fixture in
//! `fixtures/corpus/`, with real text and two tafsir sources, and synthetic
//! surah files generated from the reference table for any surah number.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_corpus();                         // surah 1 only
//! write_chapter(tmp.path(), 2, &[("kemenag", "Kemenag")]);
//!
//! let mut site = test_site(tmp.path());
//! site.chapters = 1..=2;
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::Site;
use crate::corpus::{Chapter, Corpus};
use crate::reference;
use crate::template::Templates;

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/corpus/` to a temp directory and return it.
///
/// Tests get an isolated copy they can add surah files to.
pub fn setup_corpus() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&manifest_dir().join("fixtures/corpus"), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Al-Fatihah, loaded straight from the fixture corpus.
pub fn fixture_chapter() -> Chapter {
    Corpus::open(&manifest_dir().join("fixtures/corpus"), "id")
        .unwrap()
        .load_chapter(1)
        .unwrap()
}

/// The layouts shipped in `templates/`.
pub fn test_templates() -> Templates {
    Templates::load(&manifest_dir().join("templates")).unwrap()
}

/// A site reading its corpus from `corpus_root` and writing to
/// `corpus_root/public`, with the shipped templates.
pub fn test_site(corpus_root: impl AsRef<Path>) -> Site {
    let root = corpus_root.as_ref();
    Site {
        corpus_dir: root.to_path_buf(),
        output_dir: root.join("public"),
        template_dir: manifest_dir().join("templates"),
        assets_dir: None,
        base_url: "https://example.org".to_string(),
        lang_id: "id".to_string(),
        chapters: 1..=reference::CHAPTER_COUNT,
        app_name: "QuranWeb".to_string(),
        analytics_id: None,
        og_image_url: None,
        project_url: "https://example.org/source".to_string(),
        audio_base_url: "https://audio.example.org".to_string(),
        about_slug: "tentang".to_string(),
    }
}

// =========================================================================
// Synthetic surah files
// =========================================================================

/// A surah file for `number` with placeholder text, the ayah count from the
/// reference table, and one tafsir source per `(key, name)` pair.
pub fn chapter_json(number: u16, sources: &[(&str, &str)]) -> String {
    let entry = reference::chapter(number);
    let numbered = |f: &dyn Fn(u16) -> String| -> serde_json::Map<String, serde_json::Value> {
        (1..=entry.verse_count)
            .map(|n| (n.to_string(), serde_json::Value::String(f(n))))
            .collect()
    };

    let mut record = serde_json::json!({
        "number": number,
        "name": format!("سورة {number}"),
        "name_latin": entry.name,
        "number_of_ayah": entry.verse_count,
        "text": numbered(&|n| format!("نص {number}:{n}")),
        "translations": {
            "id": {
                "name": format!("Terjemahan {}", entry.name),
                "text": numbered(&|n| format!("Terjemahan {number}:{n}")),
            }
        },
    });

    if !sources.is_empty() {
        let tafsir: serde_json::Map<String, serde_json::Value> = sources
            .iter()
            .map(|(key, name)| {
                let value = serde_json::json!({
                    "name": name,
                    "source": format!("Sumber {name}"),
                    "text": numbered(&|n| format!("{name} {number}:{n}")),
                });
                (key.to_string(), value)
            })
            .collect();
        record["tafsir"] = serde_json::json!({ "id": tafsir });
    }

    let mut root = serde_json::Map::new();
    root.insert(number.to_string(), record);
    serde_json::to_string(&root).unwrap()
}

/// Write [`chapter_json`] to `<corpus_root>/surah/<number>.json`.
pub fn write_chapter(corpus_root: &Path, number: u16, sources: &[(&str, &str)]) -> PathBuf {
    let dir = corpus_root.join("surah");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{number}.json"));
    fs::write(&path, chapter_json(number, sources)).unwrap();
    path
}
