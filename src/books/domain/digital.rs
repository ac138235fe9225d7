use serde::Serialize;
use crate::books::domain::model::{BookInfo, CatalogBook};
use crate::books::domain::{Book, BookVariant};
use crate::core::library::{require_text, BookKind, LibraryResult};

// DigitalBook is a downloadable copy; the download url is derived from isbn and format.
#[derive(Debug, Clone, Serialize)]
pub struct DigitalBook {
    #[serde(flatten)]
    info: BookInfo,
    file_format: String,
    download_url: String,
}

impl DigitalBook {
    pub fn new(title: &str, author: &str, isbn: &str, file_format: &str) -> LibraryResult<Self> {
        let info = BookInfo::new(title, author, isbn)?;
        let file_format = require_text("File format", file_format)?;
        let download_url = format!("/download/{}.{}", info.isbn(), file_format);
        Ok(Self {
            info,
            file_format,
            download_url,
        })
    }

    pub fn file_format(&self) -> &str {
        self.file_format.as_str()
    }

    pub fn download_url(&self) -> &str {
        self.download_url.as_str()
    }
}

impl Book for DigitalBook {
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
        self.info.display_with(Self::KIND, self.file_format.as_str())
    }

    fn matches_query(&self, query: &str) -> bool {
        self.info.matches_with(query, self.file_format.as_str())
    }
}

impl BookVariant for DigitalBook {
    const KIND: BookKind = BookKind::Digital;

    fn from_catalog(book: &CatalogBook) -> Option<&Self> {
        match book {
            CatalogBook::Digital(digital) => Some(digital),
            _ => None,
        }
    }
}

impl PartialEq for DigitalBook {
    fn eq(&self, other: &Self) -> bool {
        self.isbn() == other.isbn()
    }
}
