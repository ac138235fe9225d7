use serde::Serialize;
use crate::books::domain::model::{BookInfo, CatalogBook};
use crate::books::domain::{Book, BookVariant};
use crate::core::library::{require_text, BookKind, LibraryResult};

pub const DEFAULT_CONDITION: &str = "Good";

// PhysicalBook is a shelved copy with a location and a wear condition.
#[derive(Debug, Clone, Serialize)]
pub struct PhysicalBook {
    #[serde(flatten)]
    info: BookInfo,
    location: String,
    condition: String,
}

impl PhysicalBook {
    pub fn new(title: &str, author: &str, isbn: &str, location: &str,
               condition: Option<&str>) -> LibraryResult<Self> {
        let info = BookInfo::new(title, author, isbn)?;
        let location = require_text("Location", location)?;
        let condition = condition
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CONDITION)
            .to_string();
        Ok(Self {
            info,
            location,
            condition,
        })
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn condition(&self) -> &str {
        self.condition.as_str()
    }

    // Blank conditions are ignored.
    pub fn set_condition(&mut self, condition: &str) {
        let condition = condition.trim();
        if !condition.is_empty() {
            self.condition = condition.to_string();
        }
    }
}

impl Book for PhysicalBook {
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
        self.info.display_with(Self::KIND, format!("{}, {}", self.location, self.condition).as_str())
    }

    fn matches_query(&self, query: &str) -> bool {
        self.info.matches_with(query, self.location.as_str())
    }
}

impl BookVariant for PhysicalBook {
    const KIND: BookKind = BookKind::Physical;

    fn from_catalog(book: &CatalogBook) -> Option<&Self> {
        match book {
            CatalogBook::Physical(physical) => Some(physical),
            _ => None,
        }
    }
}

impl PartialEq for PhysicalBook {
    fn eq(&self, other: &Self) -> bool {
        self.isbn() == other.isbn()
    }
}
