use std::collections::BTreeMap;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::library::{BookKind, LibraryError};
use crate::utils::date::serializer;

pub const CHECKOUT_SUCCESS_MESSAGE: &str = "Book checked out successfully";

// CheckoutResult is the outcome of a checkout; failures are carried here instead of
// being returned as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum CheckoutResult {
    Success {
        checkout_id: String,
        branch_id: String,
        isbn: String,
        book_title: String,
        message: String,
        due_date: String,
        checkout_period: u32,
        notification: String,
        #[serde(with = "serializer")]
        checkout_at: NaiveDateTime,
        #[serde(with = "serializer")]
        due_at: NaiveDateTime,
    },
    Failure {
        error_message: String,
    },
}

impl CheckoutResult {
    pub fn failure(err: &LibraryError) -> Self {
        CheckoutResult::Failure { error_message: err.to_string() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckoutResult::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CheckoutResult::Success { message, .. } => Some(message.as_str()),
            CheckoutResult::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            CheckoutResult::Success { .. } => None,
            CheckoutResult::Failure { error_message } => Some(error_message.as_str()),
        }
    }

    pub fn due_date(&self) -> Option<&str> {
        match self {
            CheckoutResult::Success { due_date, .. } => Some(due_date.as_str()),
            CheckoutResult::Failure { .. } => None,
        }
    }

    pub fn checkout_period(&self) -> Option<u32> {
        match self {
            CheckoutResult::Success { checkout_period, .. } => Some(*checkout_period),
            CheckoutResult::Failure { .. } => None,
        }
    }

    pub fn notification(&self) -> Option<&str> {
        match self {
            CheckoutResult::Success { notification, .. } => Some(notification.as_str()),
            CheckoutResult::Failure { .. } => None,
        }
    }
}

// TypeReport counts the books of one kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReport {
    pub total: usize,
    pub available: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub total_books: usize,
    pub available_books: usize,
    pub checked_out_books: usize,
    pub by_type: BTreeMap<BookKind, TypeReport>,
    // mean checkout period of the books that are available right now
    pub average_checkout_period: f64,
}

impl AvailabilityReport {
    pub fn type_report(&self, kind: BookKind) -> TypeReport {
        self.by_type.get(&kind).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use chrono::Utc;
    use crate::catalog::dto::{AvailabilityReport, CheckoutResult, TypeReport, CHECKOUT_SUCCESS_MESSAGE};
    use crate::core::library::{BookKind, LibraryError};

    #[test]
    fn test_should_build_failure() {
        let res = CheckoutResult::failure(&LibraryError::not_found("Book with ISBN '42' not found"));
        assert!(!res.is_success());
        assert_eq!(Some("Book with ISBN '42' not found"), res.error_message());
        assert_eq!(None, res.message());
        assert_eq!(None, res.due_date());
        assert_eq!(None, res.checkout_period());
        assert_eq!(None, res.notification());
    }

    #[test]
    fn test_should_expose_success_fields() {
        let now = Utc::now().naive_utc();
        let res = CheckoutResult::Success {
            checkout_id: "id".to_string(),
            branch_id: "test".to_string(),
            isbn: "1".to_string(),
            book_title: "title".to_string(),
            message: CHECKOUT_SUCCESS_MESSAGE.to_string(),
            due_date: "Due in 7 days".to_string(),
            checkout_period: 7,
            notification: "Notification: 'title' checked out. Due in 7 days".to_string(),
            checkout_at: now,
            due_at: now,
        };
        assert!(res.is_success());
        assert_eq!(None, res.error_message());
        assert_eq!(Some(CHECKOUT_SUCCESS_MESSAGE), res.message());
        assert_eq!(Some(7), res.checkout_period());
        let json = serde_json::to_value(&res).expect("should serialize");
        assert_eq!("Success", json["status"]);
    }

    #[test]
    fn test_should_default_missing_type_report() {
        let report = AvailabilityReport {
            total_books: 1,
            available_books: 1,
            checked_out_books: 0,
            by_type: BTreeMap::from([(BookKind::Digital, TypeReport { total: 1, available: 1 })]),
            average_checkout_period: 7.0,
        };
        assert_eq!(TypeReport { total: 1, available: 1 }, report.type_report(BookKind::Digital));
        assert_eq!(TypeReport::default(), report.type_report(BookKind::Audio));
        let json = serde_json::to_value(&report).expect("should serialize");
        assert_eq!(1, json["by_type"]["Digital"]["total"]);
    }
}
