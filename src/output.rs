//! CLI output formatting.
//!
//! Output is a content inventory: each surah is shown by number and name,
//! with the file it produced as secondary context.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Site
//!     Corpus: quran-json/
//!     Templates: templates/
//!     Range: 1..114
//!
//! Home → index.html
//! 001 Al-Fatihah (7 ayah) → 1/index.html
//! 002 Al-Baqarah (286 ayah) → 2/index.html
//!
//! Pages
//!     Info → tentang/index.html
//!     robots.txt
//!     sitemap.xml
//!
//! Generated 2 surah, 293 ayah pages, 12 assets
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 Al-Fatihah (7 ayah)
//! 002 Al-Baqarah (286 ayah)
//! Checked 2 surah, 293 ayah
//! ```
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout.

use crate::config::Site;
use crate::generate::{BuildReport, ChapterSummary};

// ============================================================================
// Shared helpers
// ============================================================================

/// Surah numbers are shown 3-digit zero-padded so the list lines up.
fn format_number(number: u16) -> String {
    format!("{:0>3}", number)
}

fn chapter_line(chapter: &ChapterSummary) -> String {
    format!(
        "{} {} ({} ayah)",
        format_number(chapter.number),
        chapter.name,
        chapter.verse_count
    )
}

fn total_verses(chapters: &[ChapterSummary]) -> usize {
    chapters.iter().map(|c| usize::from(c.verse_count)).sum()
}

// ============================================================================
// Site summary
// ============================================================================

/// The resolved inputs of a run.
pub fn format_site_summary(site: &Site) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("    Corpus: {}", site.corpus_dir.display()),
        format!("    Templates: {}", site.template_dir.display()),
    ];
    if let Some(assets) = &site.assets_dir {
        lines.push(format!("    Assets: {}", assets.display()));
    }
    lines.push(format!("    Base URL: {}", site.base_url));
    lines.push(format!(
        "    Range: {}..{}",
        site.chapters.start(),
        site.chapters.end()
    ));
    lines
}

pub fn print_site_summary(site: &Site) {
    for line in format_site_summary(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Home \u{2192} index.html".to_string()];

    for chapter in &report.chapters {
        lines.push(format!(
            "{} \u{2192} {}/index.html",
            chapter_line(chapter),
            chapter.number
        ));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    lines.push(format!("    Info \u{2192} {}/index.html", report.about_slug));
    lines.push("    robots.txt".to_string());
    lines.push("    sitemap.xml".to_string());
    lines.push(String::new());

    lines.push(format!(
        "Generated {} surah, {} ayah pages, {} assets",
        report.chapters.len(),
        report.verse_pages(),
        report.assets_copied
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(chapters: &[ChapterSummary]) -> Vec<String> {
    let mut lines: Vec<String> = chapters.iter().map(chapter_line).collect();
    lines.push(format!(
        "Checked {} surah, {} ayah",
        chapters.len(),
        total_verses(chapters)
    ));
    lines
}

pub fn print_check_output(chapters: &[ChapterSummary]) {
    for line in format_check_output(chapters) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
