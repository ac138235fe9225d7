pub mod service;

pub trait NotificationService: Sync + Send {
    fn send_checkout_notification(&self, book_title: &str, due_date: &str) -> String;
}
