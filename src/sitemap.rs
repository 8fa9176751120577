//! `sitemap.xml` and `robots.txt`.
//!
//! The sitemap always lists the whole corpus, driven by the reference table,
//! even when a run renders only part of it: one entry per surah, one per
//! ayah, then the home and about pages.

use crate::config::Site;
use crate::reference::{self, CHAPTER_COUNT};
use chrono::NaiveDate;
use maud::html;
use std::fmt::Write;

/// Render the sitemap with every entry stamped `lastmod`.
pub fn build_sitemap(site: &Site, lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for chapter in 1..=CHAPTER_COUNT {
        push_url(&mut xml, &site.chapter_url(chapter), &lastmod, None);
        for verse in 1..=reference::chapter(chapter).verse_count {
            push_url(&mut xml, &site.verse_url(chapter, verse), &lastmod, None);
        }
    }

    push_url(&mut xml, &site.home_url(), &lastmod, Some("1"));
    push_url(&mut xml, &site.about_url(), &lastmod, Some("0.9"));
    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, priority: Option<&str>) {
    let loc = html! { (loc) }.into_string();
    // Writing to a String cannot fail.
    let _ = write!(
        xml,
        "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>monthly</changefreq>\n"
    );
    if let Some(priority) = priority {
        let _ = writeln!(xml, "    <priority>{priority}</priority>");
    }
    xml.push_str("  </url>\n");
}

/// Render `robots.txt`, pointing crawlers at the sitemap.
pub fn build_robots(site: &Site) -> String {
    format!(
        "User-agent: *\nDisallow:\n\nsitemap: {}/sitemap.xml\n",
        site.base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_site;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn sitemap_lists_every_chapter_verse_and_static_page() {
        let site = test_site("/tmp/unused");
        let xml = build_sitemap(&site, date());

        let locs: Vec<&str> = xml
            .lines()
            .filter_map(|l| l.trim().strip_prefix("<loc>"))
            .filter_map(|l| l.strip_suffix("</loc>"))
            .collect();

        let depth = |loc: &&str| {
            loc.trim_start_matches("https://example.org/")
                .trim_end_matches('/')
                .split('/')
                .filter(|s| !s.is_empty())
                .count()
        };
        let chapters = locs
            .iter()
            .filter(|l| depth(l) == 1 && l.trim_end_matches('/').rsplit('/').next().unwrap().parse::<u16>().is_ok())
            .count();
        let verses = locs.iter().filter(|l| depth(l) == 2).count();

        assert_eq!(locs.len(), 114 + 6236 + 2);
        assert_eq!(chapters, 114);
        assert_eq!(verses, 6236);
        assert_eq!(xml.matches("<priority>").count(), 2);
    }

    #[test]
    fn sitemap_entries_are_stamped() {
        let site = test_site("/tmp/unused");
        let xml = build_sitemap(&site, date());
        assert_eq!(
            xml.matches("<lastmod>2024-03-01</lastmod>").count(),
            xml.matches("<url>").count()
        );
        assert_eq!(
            xml.matches("<changefreq>monthly</changefreq>").count(),
            6352
        );
    }

    #[test]
    fn sitemap_static_pages_at_end() {
        let site = test_site("/tmp/unused");
        let xml = build_sitemap(&site, date());
        assert!(xml.contains(
            "<loc>https://example.org/</loc>\n    <lastmod>2024-03-01</lastmod>\n    <changefreq>monthly</changefreq>\n    <priority>1</priority>"
        ));
        assert!(xml.contains("<loc>https://example.org/tentang/</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        let first = xml.find("<loc>").unwrap();
        assert!(xml[first..].starts_with("<loc>https://example.org/1/</loc>"));
    }

    #[test]
    fn sitemap_ignores_rendered_range() {
        let mut site = test_site("/tmp/unused");
        site.chapters = 2..=2;
        let xml = build_sitemap(&site, date());
        assert!(xml.contains("<loc>https://example.org/114/6/</loc>"));
    }

    #[test]
    fn sitemap_escapes_loc() {
        let mut site = test_site("/tmp/unused");
        site.base_url = "https://ex.org/?a=1&b=2".into();
        let xml = build_sitemap(&site, date());
        assert!(xml.contains("<loc>https://ex.org/?a=1&amp;b=2/</loc>"));
        assert!(!xml.contains("&b="));
    }

    #[test]
    fn robots_points_to_sitemap() {
        let site = test_site("/tmp/unused");
        assert_eq!(
            build_robots(&site),
            "User-agent: *\nDisallow:\n\nsitemap: https://example.org/sitemap.xml\n"
        );
    }
}
