use tracing::info;
use library_catalog::books::domain::audio::AudioBook;
use library_catalog::books::domain::digital::DigitalBook;
use library_catalog::books::domain::physical::PhysicalBook;
use library_catalog::books::domain::Book;
use library_catalog::catalog::domain::CatalogService;
use library_catalog::catalog::factory::create_catalog_service;
use library_catalog::core::domain::Configuration;
use library_catalog::core::library::{BookKind, LibraryResult};
use library_catalog::utils::logs::setup_tracing;

fn seed(svc: &mut dyn CatalogService) -> LibraryResult<()> {
    svc.add_book(DigitalBook::new("Java Programming", "Jane Developer", "1111111111", "pdf")?.into())?;
    svc.add_book(PhysicalBook::new("Clean Code", "Robert Martin", "2222222222", "Section A", Some("Excellent"))?.into())?;
    svc.add_book(AudioBook::new("Design Patterns", "Gang of Four", "3333333333", "John Narrator", 480)?.into())?;
    Ok(())
}

fn main() -> LibraryResult<()> {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let mut svc = create_catalog_service(&config);
    seed(svc.as_mut())?;

    for book in svc.get_all_books() {
        println!("{}", book.display_info());
    }
    for kind in BookKind::ALL {
        info!(kind = %kind, count = svc.get_books_by_type(kind).len(), "books by type");
    }
    for book in svc.search_books("java") {
        println!("search 'java': {}", book.display_info());
    }

    let first = svc.checkout_book("1111111111");
    println!("{}", serde_json::to_string_pretty(&first)?);
    let second = svc.checkout_book("1111111111");
    println!("{}", serde_json::to_string_pretty(&second)?);

    let report = svc.get_availability_report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
