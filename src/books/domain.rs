use crate::books::domain::model::{BookInfo, CatalogBook};
use crate::core::library::BookKind;

pub mod audio;
pub mod digital;
pub mod model;
pub mod physical;

/// Behavior shared by every kind of book held in the catalog.
///
/// Implementors supply the common [`BookInfo`] record plus their kind, display text and
/// search rule; identity, availability and the checkout period come for free.
pub trait Book {
    fn info(&self) -> &BookInfo;
    fn info_mut(&mut self) -> &mut BookInfo;
    fn kind(&self) -> BookKind;
    fn display_info(&self) -> String;
    fn matches_query(&self, query: &str) -> bool;

    fn id(&self) -> u32 {
        self.info().id()
    }

    fn isbn(&self) -> &str {
        self.info().isbn()
    }

    fn title(&self) -> &str {
        self.info().title()
    }

    fn author(&self) -> &str {
        self.info().author()
    }

    fn is_available(&self) -> bool {
        self.info().is_available()
    }

    fn set_availability(&mut self, available: bool) {
        self.info_mut().set_available(available)
    }

    fn checkout_period_days(&self) -> u32 {
        self.kind().checkout_period_days()
    }
}

// BookVariant is implemented by the concrete book kinds so callers can project
// catalog entries back to their own type.
pub trait BookVariant: Book + Clone + Into<CatalogBook> {
    const KIND: BookKind;

    fn from_catalog(book: &CatalogBook) -> Option<&Self>;
}
