//! Placeholder substitution and the layout template store.
//!
//! Layout files are plain HTML containing `{{NAME}}` tokens. There is no
//! template language: [`render`] swaps tokens for bound values in a single
//! left-to-right scan, and anything it does not know about is left in place.
//! Nesting is done by the caller, rendering an inner fragment first and
//! binding the result whole into an outer template:
//!
//! ```
//! use quranweb::template::{Bindings, render};
//!
//! let header = render("<title>{{TITLE}}</title>{{META}}", &Bindings::new().bind("TITLE", "Yasin"));
//! assert_eq!(header, "<title>Yasin</title>{{META}}");
//!
//! let page = render("{{HEADER}}<main></main>", &Bindings::new().bind("HEADER", header));
//! assert_eq!(page, "<title>Yasin</title>{{META}}<main></main>");
//! ```
//!
//! Replacement values are never re-scanned within one call, so a value that
//! happens to contain `{{...}}` is copied through verbatim.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Can not read template {name}: {path}: {source}")]
    Unreadable {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered placeholder → value pairs for one [`render`] call.
///
/// Names are given without braces. When a name is bound twice the first
/// binding wins.
#[derive(Debug, Clone, Default)]
pub struct Bindings<'a> {
    entries: Vec<(&'a str, Cow<'a, str>)>,
}

impl<'a> Bindings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        self.entries.push((name, value.into()));
        self
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_ref())
    }
}

/// Substitute every bound `{{NAME}}` in `template`.
pub fn render(template: &str, bindings: &Bindings<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let token = &rest[start..];
        let value = token[OPEN.len()..]
            .find(CLOSE)
            .map(|end| &token[OPEN.len()..OPEN.len() + end])
            .and_then(|name| bindings.lookup(name).map(|v| (name, v)));

        match value {
            Some((name, v)) => {
                out.push_str(v);
                rest = &token[OPEN.len() + name.len() + CLOSE.len()..];
            }
            None => {
                // Not ours: emit one brace so `{{{NAME}}` still finds `{{NAME}}`.
                out.push('{');
                rest = &token[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// The layout templates, read once per run.
#[derive(Debug, Clone)]
pub struct Templates {
    pub header: String,
    pub footer: String,
    pub menu: String,
    pub chapter: String,
    pub verse: String,
    pub index: String,
    pub about: String,
}

impl Templates {
    /// Read all layout files from `dir`. Any missing file aborts the load.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let read = |name: &'static str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| TemplateError::Unreadable {
                name,
                path,
                source,
            })
        };

        Ok(Self {
            header: read("header-layout.html")?,
            footer: read("footer-layout.html")?,
            menu: read("menu-layout.html")?,
            chapter: read("surah-layout.html")?,
            verse: read("tafsir-layout.html")?,
            index: read("index-layout.html")?,
            about: read("about-layout.html")?,
        })
    }
}
