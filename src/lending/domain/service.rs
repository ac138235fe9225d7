use chrono::{Duration, NaiveDateTime};
use crate::books::domain::Book;
use crate::lending::domain::LendingService;

#[derive(Debug, Default)]
pub struct LendingServiceImpl {}

impl LendingServiceImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl LendingService for LendingServiceImpl {
    fn calculate_due_date(&self, book: &dyn Book) -> String {
        format!("Due in {} days", book.checkout_period_days())
    }

    fn can_checkout(&self, book: &dyn Book) -> bool {
        book.is_available()
    }

    fn due_at(&self, book: &dyn Book, checkout_at: NaiveDateTime) -> NaiveDateTime {
        checkout_at + Duration::days(i64::from(book.checkout_period_days()))
    }
}
