use std::hash::{Hash, Hasher};
use rand::Rng;
use serde::Serialize;
use crate::books::domain::audio::AudioBook;
use crate::books::domain::digital::DigitalBook;
use crate::books::domain::physical::PhysicalBook;
use crate::books::domain::Book;
use crate::core::library::{require_text, BookKind, LibraryResult};

// BookInfo holds the identity and bookkeeping fields every kind of book shares.
// The isbn is fixed at construction; the id is only a process-local label and is
// never used as a key.
#[derive(Debug, Clone, Serialize)]
pub struct BookInfo {
    id: u32,
    isbn: String,
    title: String,
    author: String,
    available: bool,
}

impl BookInfo {
    pub fn new(title: &str, author: &str, isbn: &str) -> LibraryResult<Self> {
        let title = require_text("Title", title)?;
        let author = require_text("Author", author)?;
        let isbn = require_text("ISBN", isbn)?;
        Ok(Self {
            id: rand::thread_rng().gen_range(1000..10000),
            isbn,
            title,
            author,
            available: true,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_title(&mut self, title: &str) -> LibraryResult<()> {
        self.title = require_text("Title", title)?;
        Ok(())
    }

    pub fn set_author(&mut self, author: &str) -> LibraryResult<()> {
        self.author = require_text("Author", author)?;
        Ok(())
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub(crate) fn display_with(&self, tag: BookKind, details: &str) -> String {
        format!("'{}' by {} [{}: {}]", self.title, self.author, tag, details)
    }

    // Case-insensitive substring match on title, author and the kind specific field.
    // A blank query never matches.
    pub(crate) fn matches_with(&self, query: &str, extra: &str) -> bool {
        if query.trim().is_empty() {
            return false;
        }
        let needle = query.to_lowercase();
        [self.title.as_str(), self.author.as_str(), extra]
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}

/// A book of any kind as stored by the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum CatalogBook {
    Digital(DigitalBook),
    Physical(PhysicalBook),
    Audio(AudioBook),
}

impl CatalogBook {
    pub fn as_book(&self) -> &dyn Book {
        match self {
            CatalogBook::Digital(book) => book,
            CatalogBook::Physical(book) => book,
            CatalogBook::Audio(book) => book,
        }
    }

    pub fn as_book_mut(&mut self) -> &mut dyn Book {
        match self {
            CatalogBook::Digital(book) => book,
            CatalogBook::Physical(book) => book,
            CatalogBook::Audio(book) => book,
        }
    }
}

impl Book for CatalogBook {
    fn info(&self) -> &BookInfo {
        self.as_book().info()
    }

    fn info_mut(&mut self) -> &mut BookInfo {
        self.as_book_mut().info_mut()
    }

    fn kind(&self) -> BookKind {
        self.as_book().kind()
    }

    fn display_info(&self) -> String {
        self.as_book().display_info()
    }

    fn matches_query(&self, query: &str) -> bool {
        self.as_book().matches_query(query)
    }
}

impl From<DigitalBook> for CatalogBook {
    fn from(book: DigitalBook) -> Self {
        CatalogBook::Digital(book)
    }
}

impl From<PhysicalBook> for CatalogBook {
    fn from(book: PhysicalBook) -> Self {
        CatalogBook::Physical(book)
    }
}

impl From<AudioBook> for CatalogBook {
    fn from(book: AudioBook) -> Self {
        CatalogBook::Audio(book)
    }
}

// Books are the same book when they share an isbn.
impl PartialEq for CatalogBook {
    fn eq(&self, other: &Self) -> bool {
        self.isbn() == other.isbn()
    }
}

impl Eq for CatalogBook {}

impl Hash for CatalogBook {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn().hash(state);
    }
}
