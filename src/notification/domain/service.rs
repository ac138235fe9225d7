use crate::notification::domain::NotificationService;

// Builds the confirmation text only; delivery is left to the caller.
#[derive(Debug, Default)]
pub struct NotificationServiceImpl {}

impl NotificationServiceImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl NotificationService for NotificationServiceImpl {
    fn send_checkout_notification(&self, book_title: &str, due_date: &str) -> String {
        format!("Notification: '{}' checked out. {}", book_title, due_date)
    }
}

#[cfg(test)]
mod tests {
    use crate::notification::domain::NotificationService;
    use crate::notification::domain::service::NotificationServiceImpl;

    #[test]
    fn test_should_format_checkout_notification() {
        let svc = NotificationServiceImpl::new();
        assert_eq!("Notification: 'Clean Code' checked out. Due in 14 days",
                   svc.send_checkout_notification("Clean Code", "Due in 14 days"));
    }
}
