use std::collections::BTreeMap;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use crate::books::domain::model::CatalogBook;
use crate::books::domain::{Book, BookVariant};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::{AvailabilityReport, CheckoutResult, TypeReport, CHECKOUT_SUCCESS_MESSAGE};
use crate::core::domain::Configuration;
use crate::core::library::{BookKind, LibraryError, LibraryResult};
use crate::lending::domain::LendingService;
use crate::notification::domain::NotificationService;

pub struct CatalogServiceImpl {
    branch_id: String,
    books: Vec<CatalogBook>,
    lending_service: Box<dyn LendingService>,
    notification_service: Box<dyn NotificationService>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, lending_service: Box<dyn LendingService>,
               notification_service: Box<dyn NotificationService>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            books: vec![],
            lending_service,
            notification_service,
        }
    }

    // Snapshot of every book of the concrete type `T`.
    pub fn get_books_of<T: BookVariant>(&self) -> Vec<T> {
        self.books.iter().filter_map(T::from_catalog).cloned().collect()
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return None;
        }
        self.books.iter().position(|b| b.isbn() == isbn)
    }

    fn try_checkout(&mut self, isbn: &str) -> LibraryResult<CheckoutResult> {
        let idx = self.position(isbn).ok_or_else(|| LibraryError::not_found(
            format!("Book with ISBN '{}' not found", isbn.trim()).as_str()))?;
        let lending = &self.lending_service;
        let notifier = &self.notification_service;
        let book = &mut self.books[idx];

        if !lending.can_checkout(book.as_book()) {
            return Err(LibraryError::unavailable(
                format!("Book '{}' is not available for checkout", book.title()).as_str()));
        }

        book.set_availability(false);
        let checkout_at = Utc::now().naive_utc();
        let due_date = lending.calculate_due_date(book.as_book());
        let notification = notifier.send_checkout_notification(book.title(), due_date.as_str());
        Ok(CheckoutResult::Success {
            checkout_id: Uuid::new_v4().to_string(),
            branch_id: self.branch_id.to_string(),
            isbn: book.isbn().to_string(),
            book_title: book.title().to_string(),
            message: CHECKOUT_SUCCESS_MESSAGE.to_string(),
            due_date,
            checkout_period: book.checkout_period_days(),
            notification,
            checkout_at,
            due_at: lending.due_at(book.as_book(), checkout_at),
        })
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: CatalogBook) -> LibraryResult<()> {
        if self.position(book.isbn()).is_some() {
            warn!(branch = %self.branch_id, isbn = book.isbn(), "rejected duplicate book");
            return Err(LibraryError::duplicate_key(
                format!("Book with ISBN {} already exists", book.isbn()).as_str()));
        }
        info!(branch = %self.branch_id, isbn = book.isbn(), kind = %book.kind(), "added book");
        self.books.push(book);
        Ok(())
    }

    fn get_all_books(&self) -> Vec<CatalogBook> {
        self.books.clone()
    }

    fn get_books_by_type(&self, kind: BookKind) -> Vec<CatalogBook> {
        self.books.iter().filter(|b| b.kind() == kind).cloned().collect()
    }

    fn get_book_by_isbn(&self, isbn: &str) -> Option<CatalogBook> {
        self.position(isbn).map(|idx| self.books[idx].clone())
    }

    fn search_books(&self, query: &str) -> Vec<CatalogBook> {
        if query.trim().is_empty() {
            return vec![];
        }
        let found: Vec<CatalogBook> = self.books.iter().filter(|b| b.matches_query(query)).cloned().collect();
        debug!(branch = %self.branch_id, query, matches = found.len(), "searched books");
        found
    }

    fn checkout_book(&mut self, isbn: &str) -> CheckoutResult {
        match self.try_checkout(isbn) {
            Ok(res) => {
                info!(branch = %self.branch_id, isbn, "checked out book");
                res
            }
            Err(err) => {
                warn!(branch = %self.branch_id, isbn, error = %err, "checkout failed");
                CheckoutResult::failure(&err)
            }
        }
    }

    fn get_availability_report(&self) -> AvailabilityReport {
        let mut by_type: BTreeMap<BookKind, TypeReport> = BookKind::ALL
            .iter()
            .map(|kind| (*kind, TypeReport::default()))
            .collect();
        let mut available_period_days: u64 = 0;
        for book in &self.books {
            let entry = by_type.entry(book.kind()).or_default();
            entry.total += 1;
            if book.is_available() {
                entry.available += 1;
                available_period_days += u64::from(book.checkout_period_days());
            }
        }
        let total_books = self.books.len();
        let available_books: usize = by_type.values().map(|t| t.available).sum();
        let average_checkout_period = if available_books > 0 {
            available_period_days as f64 / available_books as f64
        } else {
            0.0
        };
        AvailabilityReport {
            total_books,
            available_books,
            checked_out_books: total_books - available_books,
            by_type,
            average_checkout_period,
        }
    }
}
