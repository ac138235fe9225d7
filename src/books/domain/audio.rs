use serde::Serialize;
use crate::books::domain::model::{BookInfo, CatalogBook};
use crate::books::domain::{Book, BookVariant};
use crate::core::library::{require_text, BookKind, LibraryError, LibraryResult};

// AudioBook is a narrated recording with a running time in minutes.
#[derive(Debug, Clone, Serialize)]
pub struct AudioBook {
    #[serde(flatten)]
    info: BookInfo,
    narrator: String,
    duration_minutes: u32,
}

impl AudioBook {
    pub fn new(title: &str, author: &str, isbn: &str, narrator: &str,
               duration_minutes: u32) -> LibraryResult<Self> {
        let info = BookInfo::new(title, author, isbn)?;
        let narrator = require_text("Narrator", narrator)?;
        if duration_minutes == 0 {
            return Err(LibraryError::validation(
                "Duration must be positive", Some("duration_minutes".to_string())));
        }
        Ok(Self {
            info,
            narrator,
            duration_minutes,
        })
    }

    pub fn narrator(&self) -> &str {
        self.narrator.as_str()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes) / 60.0
    }
}

impl Book for AudioBook {
    fn info(&self) -> &BookInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut BookInfo {
        &mut self.info
    }

    fn kind(&self) -> BookKind {
        Self::KIND
    }

    fn display_info(&self) -> String {
        self.info.display_with(Self::KIND,
                               format!("{}, {:.1}h", self.narrator, self.duration_hours()).as_str())
    }

    fn matches_query(&self, query: &str) -> bool {
        self.info.matches_with(query, self.narrator.as_str())
    }
}

impl BookVariant for AudioBook {
    const KIND: BookKind = BookKind::Audio;

    fn from_catalog(book: &CatalogBook) -> Option<&Self> {
        match book {
            CatalogBook::Audio(audio) => Some(audio),
            _ => None,
        }
    }
}

impl PartialEq for AudioBook {
    fn eq(&self, other: &Self) -> bool {
        self.isbn() == other.isbn()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::audio::AudioBook;
    use crate::books::domain::Book;
    use crate::core::library::{BookKind, LibraryError};

    fn build() -> AudioBook {
        AudioBook::new("Design Patterns", "Gang of Four", "3333333333", "John Narrator", 480)
            .expect("should build audio book")
    }

    #[test]
    fn test_should_build_audio_book() {
        let book = build();
        assert_eq!(BookKind::Audio, book.kind());
        assert_eq!(21, book.checkout_period_days());
        assert_eq!("John Narrator", book.narrator());
        assert_eq!(480, book.duration_minutes());
        assert!((book.duration_hours() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_should_reject_invalid_audio_book() {
        let zero = AudioBook::new("Design Patterns", "Gang of Four", "3333333333", "John Narrator", 0);
        assert!(matches!(zero, Err(LibraryError::Validation { .. })));
        let blank = AudioBook::new("Design Patterns", "Gang of Four", "3333333333", "", 480);
        assert!(matches!(blank, Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_display_audio_book() {
        assert_eq!("'Design Patterns' by Gang of Four [Audio: John Narrator, 8.0h]", build().display_info());
        let short = AudioBook::new("Short", "Author", "9", "Reader", 95).expect("should build audio book");
        assert_eq!("'Short' by Author [Audio: Reader, 1.6h]", short.display_info());
    }

    #[test]
    fn test_should_match_narrator() {
        let book = build();
        assert!(book.matches_query("narrator"));
        assert!(book.matches_query("gang"));
        assert!(!book.matches_query("   "));
        assert!(!book.matches_query("unknown"));
    }
}
