//! Page builders.
//!
//! Every output document is assembled the same way: small fragments are
//! rendered with [maud](https://maud.lambda.xyz/), the layout files from the
//! template directory are filled with [`template::render`], and the results
//! are nested into each other from the inside out.
//!
//! ```text
//! header-layout ── TITLE, META ──┐
//! menu-layout ───────────────────┤
//! footer-layout ─────────────────┤
//! verse fragments (maud) ────────┼──▶ surah-layout ──▶ /{surah}/index.html
//! goto options (maud) ───────────┘
//! ```
//!
//! The chrome (header, menu, footer) is rendered once per run by
//! [`Chrome::render`]; only `TITLE` and `META` differ per page.
//!
//! Corpus text (ayah, translation, tafsir) is trusted and inserted as-is.
//! Everything else interpolated by maud is escaped.

use crate::config::Site;
use crate::corpus::{Chapter, CommentaryEntry, Verse};
use crate::navigation::{self, VerseLinks};
use crate::template::{self, Bindings, Templates};
use maud::{Markup, PreEscaped, html};

/// Site version stamped into the header and footer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Surah that do not open with the basmalah: Al-Fatihah (where it is ayah 1)
/// and At-Taubah.
const CHAPTERS_WITHOUT_BASMALAH: [u16; 2] = [1, 9];

/// Escape plain text for use inside a layout.
fn text(value: &str) -> String {
    html! { (value) }.into_string()
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

// ============================================================================
// Chrome and meta tags
// ============================================================================

/// Header, menu and footer, rendered once per run.
#[derive(Debug, Clone)]
pub struct Chrome {
    /// Still contains `{{TITLE}}` and `{{META}}`.
    header: String,
    pub menu: String,
    pub footer: String,
}

impl Chrome {
    pub fn render(templates: &Templates, site: &Site) -> Self {
        let header = template::render(
            &templates.header,
            &Bindings::new()
                .bind("BASE_URL", site.base_url.as_str())
                .bind("LANG_ID", text(&site.lang_id))
                .bind("VERSION", VERSION),
        );
        let menu = template::render(
            &templates.menu,
            &Bindings::new()
                .bind("APP_NAME", text(&site.app_name))
                .bind("BASE_URL", site.base_url.as_str())
                .bind("ABOUT_URL", site.about_url())
                .bind("GITHUB_PROJECT_URL", site.project_url.as_str()),
        );
        let footer = template::render(
            &templates.footer,
            &Bindings::new()
                .bind("APP_NAME", text(&site.app_name))
                .bind("VERSION", VERSION)
                .bind("BASE_URL", site.base_url.as_str())
                .bind("BASE_MUROTTAL_URL", site.audio_base_url.as_str()),
        );
        Self {
            header,
            menu,
            footer,
        }
    }

    /// The header for one page.
    pub fn header(&self, site: &Site, meta: &PageMeta) -> String {
        template::render(
            &self.header,
            &Bindings::new()
                .bind("TITLE", text(&meta.title))
                .bind("META", meta_tags(site, meta).into_string()),
        )
    }
}

/// Title and SEO fields of one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Canonical absolute URL, used for `og:url`.
    pub url: String,
}

/// Open Graph and classic meta tags, plus the analytics snippet if enabled.
pub fn meta_tags(site: &Site, meta: &PageMeta) -> Markup {
    html! {
        meta property="og:title" content=(meta.title);
        meta property="og:description" content=(meta.description);
        meta property="og:url" content=(meta.url);
        @if let Some(image) = &site.og_image_url {
            meta property="og:image" content=(image);
        }
        meta name="keywords" content=(meta.keywords);
        meta name="description" content=(meta.description);
        @if let Some(id) = &site.analytics_id {
            (analytics_snippet(id))
        }
    }
}

fn analytics_snippet(id: &str) -> Markup {
    let id = text(id);
    PreEscaped(format!(
        r#"
<!-- Global site tag (gtag.js) - Google Analytics -->
<script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){{dataLayer.push(arguments);}}
  gtag('js', new Date());

  gtag('config', '{id}');
</script>
"#
    ))
}

// ============================================================================
// Fragments
// ============================================================================

/// The opening formula shown above every surah except 1 and 9.
fn basmalah() -> Markup {
    html! {
        div.ayah {
            div.ayah-text dir="rtl" { p { "بِسْمِ اللّٰهِ الرَّحْمٰنِ الرَّحِيْمِ" } }
            div.ayah-translation { p { "Dengan nama Allah Yang Maha Pengasih, Maha Penyayang." } }
        }
    }
}

/// Whether surah `number` opens with the basmalah fragment.
pub fn has_basmalah(number: u16) -> bool {
    !CHAPTERS_WITHOUT_BASMALAH.contains(&number)
}

/// One ayah on the surah page, with its toolbar and audio player metadata.
pub fn verse_fragment(site: &Site, chapter: &Chapter, verse: Verse<'_>) -> Markup {
    let links = navigation::verse_links(chapter.number, verse.number);

    html! {
        div.ayah
            id={ "no" (verse.number) }
            title={ (chapter.name_latin) "," (chapter.number) "," (verse.number) } {
            div.ayah-text dir="rtl" {
                p {
                    (PreEscaped(verse.text))
                    span.ayah-number dir="ltr" { (verse.number) }
                }
            }
            div.ayah-toolbar {
                a.icon-ayah-toolbar.icon-back-to-top title="Kembali ke atas" href="#" {
                    span.icon-content { "\u{21e7}" }
                }
                a.icon-ayah-toolbar.icon-mark-ayah.link-mark-ayah title="Tandai terakhir dibaca" href="#" {
                    span.icon-content { "\u{2713}" }
                }
                a.icon-ayah-toolbar.icon-tafsir-ayah title="Tafsir Ayat"
                    href=(site.verse_url(chapter.number, verse.number)) {
                    span.icon-content { "\u{273c}" }
                }
                (audio_button(chapter.number, verse.number, &links, false))
            }
            div.ayah-translation { p { (PreEscaped(verse.translation)) } }
        }
    }
}

/// Murottal play button. The data attributes let the player continue with the
/// next ayah, across surah boundaries, without knowing the corpus layout.
fn audio_button(chapter: u16, verse: u16, links: &VerseLinks, from_verse_page: bool) -> Markup {
    html! {
        a.icon-ayah-toolbar.icon-play-audio.murottal-audio-player title="Audio Ayat"
            data-surah-number=(chapter)
            data-ayah-number=(verse)
            data-next-ayah-number=(links.next.verse)
            data-next-surah-number=(links.next.chapter)
            data-is-last-ayah=(flag(links.is_last_of_corpus))
            data-crosses-surah=(flag(links.crosses_chapter))
            data-from-tafsir-page=(flag(from_verse_page))
            id={ "audio-" (chapter) "-" (verse) } {
            span.icon-content { "\u{25b6}" }
        }
    }
}

/// One block per tafsir source, in corpus order. Line breaks become `<br>`.
pub fn commentary_blocks(entries: &[CommentaryEntry<'_>]) -> Markup {
    html! {
        @for entry in entries {
            h3.ayah-tafsir-title { "Tafsir " (entry.name) }
            div.ayah-tafsir { (PreEscaped(entry.text.replace('\n', "<br>"))) }
            div.ayah-tafsir-source {
                "Sumber:" br; (entry.source)
            }
        }
    }
}

/// `<option>`s jumping to each ayah anchor on the surah page.
fn goto_anchor_options(verse_count: u16) -> Markup {
    html! {
        @for n in 1..=verse_count {
            option value={ "#no" (n) } { (n) }
        }
    }
}

/// `<option>`s jumping to each ayah's tafsir page.
fn goto_verse_options(site: &Site, chapter: u16, verse_count: u16, current: u16) -> Markup {
    html! {
        @for n in 1..=verse_count {
            option value=(site.verse_url(chapter, n)) selected[n == current] { (n) }
        }
    }
}

/// Search keywords for the home index filter: the name as-is, with
/// apostrophes dropped and dashes as spaces, and with both dropped.
///
/// `"Al-Mu'minun"` → `"Al-Mu'minun, Al Muminun, AlMuminun"`
pub fn search_keywords(name_latin: &str) -> String {
    let spaced = name_latin.replace('\'', "").replace('-', " ");
    let squashed = name_latin.replace(['\'', '-'], "");
    [name_latin.to_string(), spaced, squashed].join(", ")
}

/// One row of the home page surah list.
pub fn index_row(site: &Site, chapter: &Chapter) -> Markup {
    html! {
        li.surah-index {
            a.surah-index-link
                href=(site.chapter_url(chapter.number))
                title={ "Surah " (chapter.name_latin) }
                data-keywords=(search_keywords(&chapter.name_latin)) {
                span.surah-index-name { (chapter.name_latin) " - " (chapter.name_native) }
                span.surah-index-ayah { (chapter.verse_count) " Ayat" }
                span.surah-index-number { (chapter.number) }
            }
        }
    }
}

/// Home index rows accumulated over one run, in surah order.
#[derive(Debug, Clone, Default)]
pub struct HomeIndex {
    rows: Vec<String>,
}

impl HomeIndex {
    /// Append the row for `chapter`. Chapters must arrive in ascending order.
    pub fn with_row(mut self, site: &Site, chapter: &Chapter) -> Self {
        self.rows.push(index_row(site, chapter).into_string());
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn concat(&self) -> String {
        self.rows.concat()
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Everything a page needs besides its own entity.
#[derive(Debug, Clone, Copy)]
pub struct PageBuilder<'a> {
    pub site: &'a Site,
    pub templates: &'a Templates,
    pub chrome: &'a Chrome,
}

impl<'a> PageBuilder<'a> {
    pub fn new(site: &'a Site, templates: &'a Templates, chrome: &'a Chrome) -> Self {
        Self {
            site,
            templates,
            chrome,
        }
    }

    /// `/{surah}/index.html`: every ayah with translation.
    pub fn chapter_page(&self, chapter: &Chapter) -> String {
        let site = self.site;
        let links = navigation::chapter_links(chapter.number);
        let meta = PageMeta {
            title: format!(
                "Al-Quran Surah {} Terjemahan dan Tafsir Bahasa Indonesia",
                chapter.name_latin
            ),
            description: format!(
                "Al-Quran Surah {} merupakan surah ke-{} yang terdiri dari {} ayat. Lengkap dengan terjemahan dan tafsir Bahasa Indonesia",
                chapter.name_latin, chapter.number, chapter.verse_count
            ),
            keywords: format!("al-quran, terjemahan, surah {}", chapter.name_latin),
            url: site.chapter_url(chapter.number),
        };

        let verses = html! {
            @if has_basmalah(chapter.number) {
                (basmalah())
            }
            @for verse in chapter.verses() {
                (verse_fragment(site, chapter, verse))
            }
        };

        template::render(
            &self.templates.chapter,
            &Bindings::new()
                .bind("SURAH_NUMBER", chapter.number.to_string())
                .bind("SURAH_NAME_LATIN", text(&chapter.name_latin))
                .bind("SURAH_NAME_ARABIC", text(&chapter.name_native))
                .bind("TOTAL_AYAH", chapter.verse_count.to_string())
                .bind("PREV_SURAH_NAME", text(links.previous.name))
                .bind("PREV_URL", site.chapter_url(links.previous.number))
                .bind("NEXT_SURAH_NAME", text(links.next.name))
                .bind("NEXT_URL", site.chapter_url(links.next.number))
                .bind("EACH_AYAH", verses.into_string())
                .bind(
                    "EACH_GOTO_AYAH",
                    goto_anchor_options(chapter.verse_count).into_string(),
                )
                .bind("PAGE_NAME", "Surah")
                .bind("HEADER", self.chrome.header(site, &meta))
                .bind("MENU", self.chrome.menu.as_str())
                .bind("FOOTER", self.chrome.footer.as_str()),
        )
    }

    /// `/{surah}/{ayah}/index.html`: one ayah with every tafsir source.
    pub fn verse_page(&self, chapter: &Chapter, verse: Verse<'_>) -> String {
        let site = self.site;
        let links = navigation::verse_links(chapter.number, verse.number);
        let commentary = chapter.commentary_for(verse.number);
        let sources = commentary
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(" dan ");

        let meta = PageMeta {
            title: format!(
                "Terjemahan dan Tafsir Quran surah {} ayat {} dalam Bahasa Indonesia",
                chapter.name_latin, verse.number
            ),
            description: format!(
                "Surah {name} berarti {meaning}. Sumber terjemahan dan tafsir {name} ayat {verse} diambil dari {sources}.",
                name = chapter.name_latin,
                meaning = chapter.translation.name,
                verse = verse.number,
            ),
            keywords: format!(
                "al-quran, baca quran, quran online, terjemahan, tafsir quran, surah {}, ayat {}",
                chapter.name_latin, verse.number
            ),
            url: site.verse_url(chapter.number, verse.number),
        };

        template::render(
            &self.templates.verse,
            &Bindings::new()
                .bind("SURAH_NUMBER", chapter.number.to_string())
                .bind("SURAH_NAME_LATIN", text(&chapter.name_latin))
                .bind("SURAH_NAME_ARABIC", text(&chapter.name_native))
                .bind("AYAH_NUMBER", verse.number.to_string())
                .bind("SURAH_URL", site.chapter_url(chapter.number))
                .bind("PREV_URL", site.verse_url(links.previous.chapter, links.previous.verse))
                .bind("PREV_SURAH_NAME", text(links.previous.chapter_name))
                .bind("PREV_SURAH_NUMBER", links.previous.chapter.to_string())
                .bind("PREV_AYAH_NUMBER", links.previous.verse.to_string())
                .bind("NEXT_URL", site.verse_url(links.next.chapter, links.next.verse))
                .bind("NEXT_SURAH_NAME", text(links.next.chapter_name))
                .bind("NEXT_SURAH_NUMBER", links.next.chapter.to_string())
                .bind("NEXT_AYAH_NUMBER", links.next.verse.to_string())
                .bind(
                    "AUDIO_BUTTON",
                    audio_button(chapter.number, verse.number, &links, true).into_string(),
                )
                .bind(
                    "EACH_GOTO_AYAH",
                    goto_verse_options(site, chapter.number, chapter.verse_count, verse.number)
                        .into_string(),
                )
                .bind("AYAH_TEXT", verse.text)
                .bind("AYAH_TRANSLATION", verse.translation)
                .bind("EACH_TAFSIR", commentary_blocks(&commentary).into_string())
                .bind("PAGE_NAME", "Tafsir Surah")
                .bind("HEADER", self.chrome.header(site, &meta))
                .bind("MENU", self.chrome.menu.as_str())
                .bind("FOOTER", self.chrome.footer.as_str()),
        )
    }

    /// `/index.html`: the surah list.
    pub fn home_page(&self, index: &HomeIndex) -> String {
        let site = self.site;
        let meta = PageMeta {
            title: "Baca Al-Quran Online Terjemahan dan Tafsir Bahasa Indonesia".to_string(),
            description: format!(
                "{} adalah Al-Quran online yang ringan dan cepat dengan terjemahan dan tafsir Bahasa Indonesia. Dapat diakses dari perangkat mobile dan komputer desktop.",
                site.app_name
            ),
            keywords: "al-quran, quran web, quran online, website quran, baca quran, quran digital"
                .to_string(),
            url: site.home_url(),
        };

        template::render(
            &self.templates.index,
            &Bindings::new()
                .bind("SURAH_INDEX", index.concat())
                .bind("APP_NAME", text(&site.app_name))
                .bind("BASE_URL", site.base_url.as_str())
                .bind("PAGE_NAME", "Baca Quran Online")
                .bind("HEADER", self.chrome.header(site, &meta))
                .bind("MENU", self.chrome.menu.as_str())
                .bind("FOOTER", self.chrome.footer.as_str()),
        )
    }

    /// `/{about_slug}/index.html`
    pub fn about_page(&self) -> String {
        let site = self.site;
        let meta = PageMeta {
            title: format!("Tentang {}", site.app_name),
            description: format!(
                "{} adalah Al-Quran online dengan terjemahan Bahasa Indonesia. Dapat diakses dari perangkat mobile dan komputer desktop.",
                site.app_name
            ),
            keywords: "tentang al-quran, tentang quran web, tentang baca quran".to_string(),
            url: site.about_url(),
        };

        template::render(
            &self.templates.about,
            &Bindings::new()
                .bind("APP_NAME", text(&site.app_name))
                .bind("BASE_URL", site.base_url.as_str())
                .bind("PAGE_NAME", "Info")
                .bind("HEADER", self.chrome.header(site, &meta))
                .bind("MENU", self.chrome.menu.as_str())
                .bind("FOOTER", self.chrome.footer.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{fixture_chapter, test_site, test_templates};

    fn builder_parts() -> (Site, Templates) {
        (test_site("/tmp/unused"), test_templates())
    }

    // =========================================================================
    // Chrome and meta
    // =========================================================================

    #[test]
    fn chrome_binds_site_values_once() {
        let (site, templates) = builder_parts();
        let chrome = Chrome::render(&templates, &site);
        assert!(chrome.menu.contains("QuranWeb"));
        assert!(chrome.menu.contains("https://example.org/"));
        assert!(chrome.footer.contains(VERSION));
        assert!(!chrome.footer.contains("{{"));
        assert!(chrome.header.contains("{{TITLE}}"));
    }

    #[test]
    fn menu_links_to_configured_about_slug() {
        let (mut site, templates) = builder_parts();
        site.about_slug = "info".into();
        let chrome = Chrome::render(&templates, &site);
        assert!(chrome.menu.contains(r#"href="https://example.org/info/""#));
        assert!(!chrome.menu.contains("/tentang/"));
    }

    #[test]
    fn header_uses_configured_language() {
        let (mut site, templates) = builder_parts();
        site.lang_id = "en".into();
        let chrome = Chrome::render(&templates, &site);
        assert!(chrome.header.contains(r#"<html lang="en">"#));
        assert!(!chrome.header.contains("{{LANG_ID}}"));
    }

    #[test]
    fn header_fills_title_and_meta() {
        let (site, templates) = builder_parts();
        let chrome = Chrome::render(&templates, &site);
        let meta = PageMeta {
            title: "Surah Ali 'Imran".into(),
            description: "desc".into(),
            keywords: "kw".into(),
            url: "https://example.org/3/".into(),
        };
        let header = chrome.header(&site, &meta);
        assert!(header.contains("<title>Surah Ali 'Imran</title>"));
        assert!(header.contains(r#"<meta property="og:url" content="https://example.org/3/">"#));
        assert!(!header.contains("{{META}}"));
    }

    #[test]
    fn meta_tags_escape_quotes() {
        let (site, _) = builder_parts();
        let meta = PageMeta {
            title: r#"say "hi""#.into(),
            description: "d".into(),
            keywords: "k".into(),
            url: "u".into(),
        };
        let html = meta_tags(&site, &meta).into_string();
        assert!(html.contains("say &quot;hi&quot;"));
    }

    #[test]
    fn meta_tags_include_analytics_only_when_configured() {
        let (mut site, _) = builder_parts();
        let meta = PageMeta {
            title: "t".into(),
            description: "d".into(),
            keywords: "k".into(),
            url: "u".into(),
        };
        assert!(!meta_tags(&site, &meta).into_string().contains("gtag"));

        site.analytics_id = Some("UA-1234-5".into());
        let html = meta_tags(&site, &meta).into_string();
        assert!(html.contains("googletagmanager.com/gtag/js?id=UA-1234-5"));
        assert!(html.contains("gtag('config', 'UA-1234-5');"));
    }

    #[test]
    fn meta_tags_og_image_optional() {
        let (mut site, _) = builder_parts();
        let meta = PageMeta {
            title: "t".into(),
            description: "d".into(),
            keywords: "k".into(),
            url: "u".into(),
        };
        assert!(!meta_tags(&site, &meta).into_string().contains("og:image"));
        site.og_image_url = Some("https://example.org/og.png".into());
        assert!(
            meta_tags(&site, &meta)
                .into_string()
                .contains(r#"content="https://example.org/og.png""#)
        );
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    #[test]
    fn basmalah_skipped_for_fatihah_and_taubah() {
        assert!(!has_basmalah(1));
        assert!(!has_basmalah(9));
        assert!(has_basmalah(2));
        assert!(has_basmalah(114));
    }

    #[test]
    fn verse_fragment_carries_playback_metadata() {
        let (site, _) = builder_parts();
        let chapter = fixture_chapter();
        let html = verse_fragment(&site, &chapter, chapter.verse(7).unwrap()).into_string();

        assert!(html.contains(r#"id="no7""#));
        assert!(html.contains(r#"title="Al-Fatihah,1,7""#));
        assert!(html.contains(r#"data-next-surah-number="2""#));
        assert!(html.contains(r#"data-next-ayah-number="1""#));
        assert!(html.contains(r#"data-is-last-ayah="0""#));
        assert!(html.contains(r#"data-crosses-surah="1""#));
        assert!(html.contains(r#"href="https://example.org/1/7/""#));
    }

    #[test]
    fn verse_fragment_inside_chapter() {
        let (site, _) = builder_parts();
        let chapter = fixture_chapter();
        let html = verse_fragment(&site, &chapter, chapter.verse(3).unwrap()).into_string();
        assert!(html.contains(r#"data-next-surah-number="1""#));
        assert!(html.contains(r#"data-next-ayah-number="4""#));
        assert!(html.contains(r#"data-crosses-surah="0""#));
        assert!(html.contains("Yang Maha Pengasih, Maha Penyayang,"));
    }

    #[test]
    fn commentary_blocks_in_order_with_line_breaks() {
        let entries = [
            CommentaryEntry {
                name: "Kemenag",
                source: "Kementerian Agama",
                text: "baris satu\nbaris dua",
            },
            CommentaryEntry {
                name: "Quraish Shihab",
                source: "Tafsir Al-Misbah",
                text: "ringkas",
            },
        ];
        let html = commentary_blocks(&entries).into_string();

        assert_eq!(html.matches("ayah-tafsir-title").count(), 2);
        let first = html.find("Tafsir Kemenag").unwrap();
        let second = html.find("Tafsir Quraish Shihab").unwrap();
        assert!(first < second);
        assert!(html.contains("baris satu<br>baris dua"));
        assert!(html.contains("Sumber:<br>Kementerian Agama"));
    }

    #[test]
    fn commentary_blocks_empty_without_sources() {
        assert_eq!(commentary_blocks(&[]).into_string(), "");
    }

    #[test]
    fn goto_options_list_every_verse() {
        let html = goto_anchor_options(3).into_string();
        assert_eq!(
            html,
            r##"<option value="#no1">1</option><option value="#no2">2</option><option value="#no3">3</option>"##
        );
    }

    #[test]
    fn goto_verse_options_select_current() {
        let (site, _) = builder_parts();
        let html = goto_verse_options(&site, 108, 3, 2).into_string();
        assert!(html.contains(r#"<option value="https://example.org/108/2/" selected>2</option>"#));
        assert_eq!(html.matches("selected").count(), 1);
    }

    #[test]
    fn search_keywords_variants() {
        assert_eq!(
            search_keywords("Al-Baqarah"),
            "Al-Baqarah, Al Baqarah, AlBaqarah"
        );
        assert_eq!(
            search_keywords("Al-'Alaq"),
            "Al-'Alaq, Al Alaq, AlAlaq"
        );
    }

    #[test]
    fn index_row_links_to_chapter() {
        let (site, _) = builder_parts();
        let chapter = fixture_chapter();
        let html = index_row(&site, &chapter).into_string();
        assert!(html.contains(r#"href="https://example.org/1/""#));
        assert!(html.contains("Al-Fatihah - الفاتحة"));
        assert!(html.contains("7 Ayat"));
        assert!(html.contains(r#"data-keywords="Al-Fatihah, Al Fatihah, AlFatihah""#));
    }

    #[test]
    fn home_index_accumulates_in_order() {
        let (site, _) = builder_parts();
        let chapter = fixture_chapter();
        let index = HomeIndex::default().with_row(&site, &chapter);
        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());
    }

    // =========================================================================
    // Pages
    // =========================================================================

    #[test]
    fn chapter_page_binds_everything() {
        let (site, templates) = builder_parts();
        let chrome = Chrome::render(&templates, &site);
        let builder = PageBuilder::new(&site, &templates, &chrome);
        let chapter = fixture_chapter();
        let html = builder.chapter_page(&chapter);

        assert!(!html.contains("{{"), "unbound placeholder left in chapter page");
        assert!(html.contains("<title>Al-Quran Surah Al-Fatihah Terjemahan"));
        assert!(html.contains(r#"href="https://example.org/114/""#));
        assert!(html.contains("An-Nas"));
        assert!(html.contains(r#"href="https://example.org/2/""#));
        assert_eq!(html.matches(r#"class="ayah""#).count(), 7);
    }

    #[test]
    fn chapter_page_basmalah_rules() {
        let (site, templates) = builder_parts();
        let chrome = Chrome::render(&templates, &site);
        let builder = PageBuilder::new(&site, &templates, &chrome);

        let fatihah = fixture_chapter();
        let html = builder.chapter_page(&fatihah);
        assert_eq!(html.matches(r#"class="ayah""#).count(), 7);

        let mut other = fixture_chapter();
        other.number = 2;
        let html = builder.chapter_page(&other);
        assert_eq!(html.matches(r#"class="ayah""#).count(), 8);
    }

    #[test]
    fn verse_page_has_links_and_commentary() {
        let (site, templates) = builder_parts();
        let chrome = Chrome::render(&templates, &site);
        let builder = PageBuilder::new(&site, &templates, &chrome);
        let chapter = fixture_chapter();
        let html = builder.verse_page(&chapter, chapter.verse(1).unwrap());

        assert!(!html.contains("{{"), "unbound placeholder left in verse page");
        assert!(html.contains(r#"href="https://example.org/114/6/""#));
        assert!(html.contains(r#"href="https://example.org/1/2/""#));
        assert_eq!(html.matches("ayah-tafsir-title").count(), 2);
        assert!(html.contains("diambil dari Kemenag dan Quraish Shihab."));
        assert!(html.contains(r#"data-from-tafsir-page="1""#));
    }

    #[test]
    fn home_page_substitutes_rows_once() {
        let (site, templates) = builder_parts();
        let chrome = Chrome::render(&templates, &site);
        let builder = PageBuilder::new(&site, &templates, &chrome);
        let chapter = fixture_chapter();
        let index = HomeIndex::default()
            .with_row(&site, &chapter)
            .with_row(&site, &chapter);
        let html = builder.home_page(&index);

        assert!(!html.contains("{{"));
        assert_eq!(html.matches("surah-index-link").count(), 2);
    }

    #[test]
    fn about_page_uses_app_name() {
        let (mut site, templates) = builder_parts();
        site.app_name = "Quran & Kita".into();
        let chrome = Chrome::render(&templates, &site);
        let builder = PageBuilder::new(&site, &templates, &chrome);
        let html = builder.about_page();

        assert!(!html.contains("{{"));
        assert!(html.contains("<title>Tentang Quran &amp; Kita</title>"));
        assert!(html.contains(r#"content="https://example.org/tentang/""#));
    }
}
