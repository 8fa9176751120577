//! Previous/next link resolution.
//!
//! The 114 surah form a closed ring: the surah before Al-Fatihah is An-Nas,
//! and the ayah after An-Nas:6 is Al-Fatihah:1. Every chapter page and every
//! ayah therefore has both a previous and a next target, which is what lets
//! the audio player keep playing across surah boundaries.
//!
//! ## Verse rules
//!
//! [`verse_links`] evaluates its rules in a fixed order, each one allowed to
//! override the result of the previous ones:
//!
//! | # | Condition | Effect |
//! |---|-----------|--------|
//! | 1 | always | previous = ayah − 1, next = ayah + 1, same surah |
//! | 2 | ayah 1, surah ≠ 1 | previous = last ayah of surah − 1 |
//! | 3 | last ayah, surah ≠ 114 | next = ayah 1 of surah + 1 |
//! | 4 | 1:1 | previous = last ayah of surah 114 |
//! | 5 | 114:last | next = 1:1, end of corpus |
//!
//! Both functions read only the [`reference`](crate::reference) table.

use crate::reference::{self, CHAPTER_COUNT};

/// One end of a chapter-level link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterTarget {
    pub number: u16,
    pub name: &'static str,
}

impl ChapterTarget {
    fn of(number: u16) -> Self {
        Self {
            number,
            name: reference::chapter(number).name,
        }
    }
}

/// Links from a chapter page to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterLinks {
    pub previous: ChapterTarget,
    pub next: ChapterTarget,
}

/// One end of a verse-level link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseTarget {
    pub chapter: u16,
    pub chapter_name: &'static str,
    pub verse: u16,
}

impl VerseTarget {
    fn of(chapter: u16, verse: u16) -> Self {
        Self {
            chapter,
            chapter_name: reference::chapter(chapter).name,
            verse,
        }
    }
}

/// Links from one ayah to its neighbours, plus playback continuation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseLinks {
    pub previous: VerseTarget,
    pub next: VerseTarget,
    /// `next` lives in a different surah than the current ayah.
    pub crosses_chapter: bool,
    /// The current ayah is An-Nas:6 and `next` wraps to Al-Fatihah:1.
    pub is_last_of_corpus: bool,
}

/// Resolve the previous and next chapter of `number`.
///
/// `number` must be in `1..=114`.
pub fn chapter_links(number: u16) -> ChapterLinks {
    let previous = if number == 1 {
        CHAPTER_COUNT
    } else {
        number - 1
    };
    let next = if number == CHAPTER_COUNT { 1 } else { number + 1 };

    ChapterLinks {
        previous: ChapterTarget::of(previous),
        next: ChapterTarget::of(next),
    }
}

/// Resolve the previous and next ayah of `chapter:verse`.
///
/// `chapter` must be in `1..=114` and `verse` in `1..=verse_count(chapter)`.
pub fn verse_links(chapter: u16, verse: u16) -> VerseLinks {
    let last_verse = reference::chapter(chapter).verse_count;

    // Rule 1: neighbours within the same surah.
    let mut links = VerseLinks {
        previous: VerseTarget::of(chapter, verse.saturating_sub(1)),
        next: VerseTarget::of(chapter, verse + 1),
        crosses_chapter: false,
        is_last_of_corpus: false,
    };

    // Rule 2: first ayah steps back into the previous surah.
    if verse == 1 && chapter != 1 {
        let previous_chapter = chapter - 1;
        links.previous = VerseTarget::of(
            previous_chapter,
            reference::chapter(previous_chapter).verse_count,
        );
    }

    // Rule 3: last ayah steps forward into the next surah.
    if verse == last_verse && chapter != CHAPTER_COUNT {
        links.next = VerseTarget::of(chapter + 1, 1);
        links.crosses_chapter = true;
    }

    // Rule 4: Al-Fatihah:1 wraps back to the end of the corpus.
    if chapter == 1 && verse == 1 {
        links.previous = VerseTarget::of(
            CHAPTER_COUNT,
            reference::chapter(CHAPTER_COUNT).verse_count,
        );
    }

    // Rule 5: An-Nas:6 wraps forward to the start of the corpus.
    if chapter == CHAPTER_COUNT && verse == last_verse {
        links.next = VerseTarget::of(1, 1);
        links.crosses_chapter = true;
        links.is_last_of_corpus = true;
    }

    links
}
