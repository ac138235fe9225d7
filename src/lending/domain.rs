use chrono::NaiveDateTime;
use crate::books::domain::Book;

pub mod service;

// LendingService decides whether a book can go out and when it comes back.
pub trait LendingService: Sync + Send {
    fn calculate_due_date(&self, book: &dyn Book) -> String;
    fn can_checkout(&self, book: &dyn Book) -> bool;
    fn due_at(&self, book: &dyn Book, checkout_at: NaiveDateTime) -> NaiveDateTime;
}
