//! # Catalog Demo
//!
//! Starts the catalogue, fills it with a few books and movies, runs some searches
//! and shows what a rejected request looks like on the wire.
//!
//! The configuration is read from the path given as first argument, or
//! `catalog.toml` in the working directory; a missing file means defaults.
//!
//! ```bash
//! RUST_LOG=info cargo run -p catalog-service
//! ```

use catalog_framework::{Operation, PagingFilter, Sort};
use catalog_service::lifecycle::setup_tracing;
use catalog_service::model::{
    AuthorChange, BookChange, BookFilter, MovieChange, MovieFilter, PublisherChange,
};
use catalog_service::{CatalogError, CatalogSystem, ErrorResponse};
use std::path::PathBuf;
use tracing::{error, info, info_span, Instrument};

fn report(err: &CatalogError) {
    let body = ErrorResponse::from(err);
    match body.to_json() {
        Ok(json) => info!(status = body.status, %json, "Request rejected"),
        Err(e) => error!(error = %e, "Could not render error body"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("catalog.toml"));
    let system = CatalogSystem::start(&path)
        .await
        .map_err(|e| e.to_string())?;

    let books = async {
        let author = system
            .authors
            .add(AuthorChange {
                first_name: Some("Ursula".into()),
                last_name: Some("Le Guin".into()),
                nationality: Some("US".into()),
            })
            .await?;
        let publisher = system
            .publishers
            .add(PublisherChange {
                name: Some("Ace Books".into()),
                country: Some("US".into()),
            })
            .await?;
        for (title, year) in [("A Wizard of Earthsea", 1968), ("The Left Hand of Darkness", 1969)] {
            system
                .books
                .add(BookChange {
                    title: Some(title.into()),
                    year: Some(year),
                    isbn: None,
                    authors: Some(vec![author]),
                    publisher: Some(publisher),
                })
                .await?;
        }
        Ok::<_, CatalogError>(())
    }
    .instrument(info_span!("seed_books"))
    .await;
    if let Err(e) = books {
        report(&e);
    }

    for (title, year, director) in [
        ("Heat", 1995, "Michael Mann"),
        ("Collateral", 2004, "Michael Mann"),
        ("Alien", 1979, "Ridley Scott"),
    ] {
        let movie = MovieChange {
            title: Some(title.into()),
            year: Some(year),
            director: Some(director.into()),
            duration: None,
        };
        if let Err(e) = system.movies.add(movie).await {
            report(&e);
        }
    }

    // Search: Michael Mann films, newest first
    let filter = MovieFilter {
        director: Some("mann".into()),
        operation: Some(Operation::Like),
        ..Default::default()
    };
    match system
        .movies
        .search(&filter, PagingFilter::default(), Some(Sort::desc("year")))
        .await
    {
        Ok(page) => {
            let titles: Vec<_> = page.items.iter().map(|m| m.title.as_str()).collect();
            info!(total = page.total, ?titles, "Movies by director");
        }
        Err(e) => report(&e),
    }

    // Single match lookup
    let filter = BookFilter {
        year: Some("1969".into()),
        ..Default::default()
    };
    match system.books.find_one(&filter).await {
        Ok(book) => info!(id = %book.id, title = %book.title, "Book of 1969"),
        Err(e) => report(&e),
    }

    // Rejected: every problem comes back in one response
    let invalid = MovieChange {
        title: None,
        year: Some(1700),
        director: Some(" ".into()),
        duration: Some(0),
    };
    if let Err(e) = system.movies.add(invalid).await {
        report(&e);
    }

    // Rejected: an empty filter cannot select a single resource
    if let Err(e) = system.books.find_one(&BookFilter::default()).await {
        report(&e);
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
