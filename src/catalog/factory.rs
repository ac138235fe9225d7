use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::lending::domain::service::LendingServiceImpl;
use crate::notification::domain::service::NotificationServiceImpl;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config,
                                     Box::new(LendingServiceImpl::new()),
                                     Box::new(NotificationServiceImpl::new())))
}
