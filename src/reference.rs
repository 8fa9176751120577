//! The fixed chapter reference table.
//!
//! Link arithmetic never looks at loaded corpus data. Every previous/next
//! target is resolved against this compiled-in table of 114 surah names and
//! ayah counts, so a link to chapter 113 can be computed while only chapter
//! 114 is loaded.

/// Number of surah in the Quran.
pub const CHAPTER_COUNT: u16 = 114;

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterRef {
    /// Latin transliteration of the surah name.
    pub name: &'static str,
    /// Number of ayah in the surah.
    pub verse_count: u16,
}

impl ChapterRef {
    const fn new(name: &'static str, verse_count: u16) -> Self {
        Self { name, verse_count }
    }
}

/// Surah names and ayah counts, indexed by `number - 1`.
pub const CHAPTERS: [ChapterRef; CHAPTER_COUNT as usize] = [
    ChapterRef::new("Al-Fatihah", 7),
    ChapterRef::new("Al-Baqarah", 286),
    ChapterRef::new("Ali 'Imran", 200),
    ChapterRef::new("An-Nisa'", 176),
    ChapterRef::new("Al-Ma'idah", 120),
    ChapterRef::new("Al-An'am", 165),
    ChapterRef::new("Al-A'raf", 206),
    ChapterRef::new("Al-Anfal", 75),
    ChapterRef::new("At-Taubah", 129),
    ChapterRef::new("Yunus", 109),
    ChapterRef::new("Hud", 123),
    ChapterRef::new("Yusuf", 111),
    ChapterRef::new("Ar-Ra'd", 43),
    ChapterRef::new("Ibrahim", 52),
    ChapterRef::new("Al-Hijr", 99),
    ChapterRef::new("An-Nahl", 128),
    ChapterRef::new("Al-Isra'", 111),
    ChapterRef::new("Al-Kahf", 110),
    ChapterRef::new("Maryam", 98),
    ChapterRef::new("Taha", 135),
    ChapterRef::new("Al-Anbiya'", 112),
    ChapterRef::new("Al-Hajj", 78),
    ChapterRef::new("Al-Mu'minun", 118),
    ChapterRef::new("An-Nur", 64),
    ChapterRef::new("Al-Furqan", 77),
    ChapterRef::new("Asy-Syu'ara'", 227),
    ChapterRef::new("An-Naml", 93),
    ChapterRef::new("Al-Qasas", 88),
    ChapterRef::new("Al-'Ankabut", 69),
    ChapterRef::new("Ar-Rum", 60),
    ChapterRef::new("Luqman", 34),
    ChapterRef::new("As-Sajdah", 30),
    ChapterRef::new("Al-Ahzab", 73),
    ChapterRef::new("Saba'", 54),
    ChapterRef::new("Fatir", 45),
    ChapterRef::new("Yasin", 83),
    ChapterRef::new("As-Saffat", 182),
    ChapterRef::new("Sad", 88),
    ChapterRef::new("Az-Zumar", 75),
    ChapterRef::new("Gafir", 85),
    ChapterRef::new("Fussilat", 54),
    ChapterRef::new("Asy-Syura", 53),
    ChapterRef::new("Az-Zukhruf", 89),
    ChapterRef::new("Ad-Dukhan", 59),
    ChapterRef::new("Al-Jasiyah", 37),
    ChapterRef::new("Al-Ahqaf", 35),
    ChapterRef::new("Muhammad", 38),
    ChapterRef::new("Al-Fath", 29),
    ChapterRef::new("Al-Hujurat", 18),
    ChapterRef::new("Qaf", 45),
    ChapterRef::new("Az-Zariyat", 60),
    ChapterRef::new("At-Tur", 49),
    ChapterRef::new("An-Najm", 62),
    ChapterRef::new("Al-Qamar", 55),
    ChapterRef::new("Ar-Rahman", 78),
    ChapterRef::new("Al-Waqi'ah", 96),
    ChapterRef::new("Al-Hadid", 29),
    ChapterRef::new("Al-Mujadalah", 22),
    ChapterRef::new("Al-Hasyr", 24),
    ChapterRef::new("Al-Mumtahanah", 13),
    ChapterRef::new("As-Saff", 14),
    ChapterRef::new("Al-Jumu'ah", 11),
    ChapterRef::new("Al-Munafiqun", 11),
    ChapterRef::new("At-Tagabun", 18),
    ChapterRef::new("At-Talaq", 12),
    ChapterRef::new("At-Tahrim", 12),
    ChapterRef::new("Al-Mulk", 30),
    ChapterRef::new("Al-Qalam", 52),
    ChapterRef::new("Al-Haqqah", 52),
    ChapterRef::new("Al-Ma'arij", 44),
    ChapterRef::new("Nuh", 28),
    ChapterRef::new("Al-Jinn", 28),
    ChapterRef::new("Al-Muzzammil", 20),
    ChapterRef::new("Al-Muddassir", 56),
    ChapterRef::new("Al-Qiyamah", 40),
    ChapterRef::new("Al-Insan", 31),
    ChapterRef::new("Al-Mursalat", 50),
    ChapterRef::new("An-Naba'", 40),
    ChapterRef::new("An-Nazi'at", 46),
    ChapterRef::new("'Abasa", 42),
    ChapterRef::new("At-Takwir", 29),
    ChapterRef::new("Al-Infitar", 19),
    ChapterRef::new("Al-Mutaffifin", 36),
    ChapterRef::new("Al-Insyiqaq", 25),
    ChapterRef::new("Al-Buruj", 22),
    ChapterRef::new("At-Tariq", 17),
    ChapterRef::new("Al-A'la", 19),
    ChapterRef::new("Al-Gasyiyah", 26),
    ChapterRef::new("Al-Fajr", 30),
    ChapterRef::new("Al-Balad", 20),
    ChapterRef::new("Asy-Syams", 15),
    ChapterRef::new("Al-Lail", 21),
    ChapterRef::new("Ad-Duha", 11),
    ChapterRef::new("Asy-Syarh", 8),
    ChapterRef::new("At-Tin", 8),
    ChapterRef::new("Al-'Alaq", 19),
    ChapterRef::new("Al-Qadr", 5),
    ChapterRef::new("Al-Bayyinah", 8),
    ChapterRef::new("Az-Zalzalah", 8),
    ChapterRef::new("Al-'Adiyat", 11),
    ChapterRef::new("Al-Qari'ah", 11),
    ChapterRef::new("At-Takasur", 8),
    ChapterRef::new("Al-'Asr", 3),
    ChapterRef::new("Al-Humazah", 9),
    ChapterRef::new("Al-Fil", 5),
    ChapterRef::new("Quraisy", 4),
    ChapterRef::new("Al-Ma'un", 7),
    ChapterRef::new("Al-Kausar", 3),
    ChapterRef::new("Al-Kafirun", 6),
    ChapterRef::new("An-Nasr", 3),
    ChapterRef::new("Al-Lahab", 5),
    ChapterRef::new("Al-Ikhlas", 4),
    ChapterRef::new("Al-Falaq", 5),
    ChapterRef::new("An-Nas", 6),
];

/// Look up a chapter by its 1-based number.
///
/// Panics when `number` is outside `1..=114`. Callers validate the configured
/// range before any lookup happens.
pub fn chapter(number: u16) -> &'static ChapterRef {
    assert!(
        (1..=CHAPTER_COUNT).contains(&number),
        "chapter number {number} out of range"
    );
    &CHAPTERS[usize::from(number - 1)]
}

/// Whether `number` names an existing chapter.
pub fn is_valid_chapter(number: u16) -> bool {
    (1..=CHAPTER_COUNT).contains(&number)
}

/// Sum of all ayah counts.
pub fn total_verses() -> usize {
    CHAPTERS.iter().map(|c| usize::from(c.verse_count)).sum()
}
