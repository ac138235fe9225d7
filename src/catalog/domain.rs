pub mod service;

use crate::books::domain::model::CatalogBook;
use crate::catalog::dto::{AvailabilityReport, CheckoutResult};
use crate::core::library::{BookKind, LibraryResult};

// CatalogService owns the books of a branch. Mutating operations take `&mut self` so a
// checkout's availability check and update happen under one exclusive borrow.
pub trait CatalogService: Sync + Send {
    fn add_book(&mut self, book: CatalogBook) -> LibraryResult<()>;
    fn get_all_books(&self) -> Vec<CatalogBook>;
    fn get_books_by_type(&self, kind: BookKind) -> Vec<CatalogBook>;
    fn get_book_by_isbn(&self, isbn: &str) -> Option<CatalogBook>;
    fn search_books(&self, query: &str) -> Vec<CatalogBook>;
    fn checkout_book(&mut self, isbn: &str) -> CheckoutResult;
    fn get_availability_report(&self) -> AvailabilityReport;
}
