use catalog_framework::{Operation, PagingFilter, Sort};
use catalog_service::model::{
    AuthorChange, AuthorId, BookChange, BookFilter, Episode, GameChange, MovieChange,
    MovieFilter, MusicChange, PlatformChange, PlatformId, PublisherChange, PublisherId, Season,
    SeriesChange, Track,
};
use catalog_service::{CatalogConfig, CatalogSystem, ErrorResponse};

fn author(first: &str, last: &str) -> AuthorChange {
    AuthorChange {
        first_name: Some(first.into()),
        last_name: Some(last.into()),
        nationality: None,
    }
}

fn book(title: &str, authors: Vec<AuthorId>, publisher: Option<PublisherId>) -> BookChange {
    BookChange {
        title: Some(title.into()),
        year: Some(1969),
        isbn: Some("978-0-441-47812-5".into()),
        authors: Some(authors),
        publisher,
    }
}

fn movie(title: &str, year: i32, director: &str) -> MovieChange {
    MovieChange {
        title: Some(title.into()),
        year: Some(year),
        director: Some(director.into()),
        duration: None,
    }
}

/// Full end-to-end test with every real actor.
#[tokio::test]
async fn test_book_lifecycle_with_references() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let le_guin = system
        .authors
        .add(author("Ursula", "Le Guin"))
        .await
        .expect("Failed to add author");
    let ace = system
        .publishers
        .add(PublisherChange {
            name: Some("Ace Books".into()),
            country: None,
        })
        .await
        .expect("Failed to add publisher");

    let id = system
        .books
        .add(book("The Left Hand of Darkness", vec![le_guin], Some(ace)))
        .await
        .expect("Failed to add book");

    let stored = system.books.find(id).await.expect("Book not found");
    assert_eq!(stored.title, "The Left Hand of Darkness");
    assert_eq!(stored.authors, vec![le_guin]);
    assert_eq!(stored.publisher, Some(ace));

    // A missing publisher leaves the stored book untouched
    let err = system
        .books
        .change(id, book("Renamed", vec![le_guin], Some(PublisherId(99))))
        .await
        .unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(
        err.as_input().unwrap().outcome().codes(),
        vec!["PUBLISHER_NOT_EXIST"]
    );
    assert_eq!(system.books.find(id).await.unwrap().title, "The Left Hand of Darkness");

    let renamed = system
        .books
        .change(id, book("Left Hand", vec![le_guin], None))
        .await
        .expect("Failed to change book");
    assert_eq!(renamed.title, "Left Hand");
    assert_eq!(renamed.publisher, None);

    let copy = system.books.duplicate(id).await.expect("Failed to duplicate");
    assert_ne!(copy, id);
    assert_eq!(system.books.find(copy).await.unwrap().title, "Left Hand");

    system.books.remove(id).await.expect("Failed to remove");
    let err = system.books.find(id).await.unwrap_err();
    assert_eq!(err.status(), 404);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_every_missing_reference_is_reported() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let err = system
        .books
        .add(book(
            "Dune",
            vec![AuthorId(1), AuthorId(2)],
            Some(PublisherId(3)),
        ))
        .await
        .unwrap_err();

    assert_eq!(err.status(), 404);
    let body = ErrorResponse::from(&err);
    assert_eq!(
        body.codes(),
        vec!["AUTHOR_NOT_EXIST", "AUTHOR_NOT_EXIST", "PUBLISHER_NOT_EXIST"]
    );
    assert_eq!(body.issues[0].message, "author author_1 does not exist");

    let page = system
        .books
        .search(&BookFilter::default(), PagingFilter::default(), None)
        .await
        .unwrap();
    assert_eq!(page.total, 0);

    // The rejected book did not use up an id
    let herbert = system.authors.add(author("Frank", "Herbert")).await.unwrap();
    let id = system
        .books
        .add(book("Dune", vec![herbert], None))
        .await
        .unwrap();
    assert_eq!(id.to_string(), "book_1");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_author_reports_every_problem() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let err = system
        .authors
        .add(AuthorChange {
            first_name: None,
            last_name: Some("   ".into()),
            nationality: None,
        })
        .await
        .unwrap_err();

    let body = ErrorResponse::from(&err);
    assert_eq!(body.status, 422);
    assert_eq!(
        body.codes(),
        vec!["AUTHOR_FIRST_NAME_NULL", "AUTHOR_LAST_NAME_EMPTY"]
    );
    assert_eq!(body.issues[0].message, "first name must not be null");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_movie_search_paging_and_sort() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    for (title, year, director) in [
        ("Heat", 1995, "Michael Mann"),
        ("Collateral", 2004, "Michael Mann"),
        ("Alien", 1979, "Ridley Scott"),
    ] {
        system.movies.add(movie(title, year, director)).await.unwrap();
    }

    // An empty filter lists everything
    let all = system
        .movies
        .search(&MovieFilter::default(), PagingFilter::default(), None)
        .await
        .unwrap();
    assert_eq!(all.total, 3);
    assert_eq!(all.size, 50);

    let second = system
        .movies
        .search(
            &MovieFilter::default(),
            PagingFilter::new(Some(2), Some(2)),
            Some(Sort::asc("year")),
        )
        .await
        .unwrap();
    assert_eq!(second.total, 3);
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].title, "Collateral");
    assert!(second.is_last());

    let mann = MovieFilter {
        director: Some("MANN".into()),
        operation: Some(Operation::Like),
        ..Default::default()
    };
    let page = system
        .movies
        .search(&mann, PagingFilter::default(), Some(Sort::desc("year")))
        .await
        .unwrap();
    let titles: Vec<_> = page.items.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Collateral", "Heat"]);

    let alien = system
        .movies
        .find_one(&MovieFilter {
            year: Some("1979".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(alien.title, "Alien");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_page_size_and_status() {
    let mut config = CatalogConfig::default();
    config.paging.default_page_size = 2;
    config.validation.default_status = 400;
    let system = CatalogSystem::new(&config);

    for (title, year) in [("Heat", 1995), ("Thief", 1981), ("Manhunter", 1986)] {
        system
            .movies
            .add(movie(title, year, "Michael Mann"))
            .await
            .unwrap();
    }
    let page = system
        .movies
        .search(&MovieFilter::default(), PagingFilter::default(), None)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages(), 2);

    let err = system.movies.add(movie("", 1995, "Michael Mann")).await.unwrap_err();
    assert_eq!(err.status(), 400);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_music_requires_existing_artist() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let album = MusicChange {
        title: Some("Kind of Blue".into()),
        artist: Some(catalog_service::model::ArtistId(1)),
        year: Some(1959),
        tracks: Some(vec![Track {
            name: Some("So What".into()),
            length: Some(562),
        }]),
    };
    let err = system.music.add(album.clone()).await.unwrap_err();
    assert_eq!(err.as_input().unwrap().outcome().codes(), vec!["ARTIST_NOT_EXIST"]);

    let davis = system
        .artists
        .add(catalog_service::model::ArtistChange {
            name: Some("Miles Davis".into()),
            country: None,
        })
        .await
        .unwrap();
    let id = system
        .music
        .add(MusicChange {
            artist: Some(davis),
            ..album
        })
        .await
        .unwrap();
    assert_eq!(system.music.find(id).await.unwrap().length(), 562);

    let err = system
        .music
        .add(MusicChange {
            title: Some("Untitled".into()),
            artist: Some(davis),
            year: None,
            tracks: Some(vec![Track {
                name: None,
                length: Some(0),
            }]),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.as_input().unwrap().outcome().codes(),
        vec!["MUSIC_TRACK_NAME_NULL", "MUSIC_TRACK_LENGTH_NOT_VALID"]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_series_checks_nested_episodes() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let err = system
        .series
        .add(SeriesChange {
            title: Some("The Wire".into()),
            year: Some(2002),
            seasons: Some(vec![Season {
                number: Some(1),
                episodes: Some(vec![
                    Episode {
                        title: Some("The Target".into()),
                    },
                    Episode { title: None },
                ]),
            }]),
        })
        .await
        .unwrap_err();
    let body = ErrorResponse::from(&err);
    assert_eq!(body.codes(), vec!["SERIES_EPISODE_TITLE_NULL"]);
    assert_eq!(
        body.issues[0].message,
        "season 1 episode 2 title must not be null"
    );

    let id = system
        .series
        .add(SeriesChange {
            title: Some("The Wire".into()),
            year: Some(2002),
            seasons: Some(vec![Season {
                number: Some(1),
                episodes: Some(vec![Episode {
                    title: Some("The Target".into()),
                }]),
            }]),
        })
        .await
        .unwrap();
    assert_eq!(system.series.find(id).await.unwrap().episode_count(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_game_with_unknown_platforms() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let snes = system
        .platforms
        .add(PlatformChange {
            name: Some("Super Nintendo".into()),
            manufacturer: Some("Nintendo".into()),
        })
        .await
        .unwrap();

    let err = system
        .games
        .add(GameChange {
            title: Some("Chrono Trigger".into()),
            year: Some(1995),
            studio: Some("Square".into()),
            platforms: Some(vec![snes, PlatformId(40)]),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(
        ErrorResponse::from(&err).issues[0].message,
        "platform platform_40 does not exist"
    );

    let id = system
        .games
        .add(GameChange {
            title: Some("Chrono Trigger".into()),
            year: Some(1995),
            studio: Some("Square".into()),
            platforms: Some(vec![snes]),
        })
        .await
        .unwrap();
    assert_eq!(system.games.find(id).await.unwrap().platforms, vec![snes]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_start_with_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let system = CatalogSystem::start(&dir.path().join("catalog.toml"))
        .await
        .expect("Failed to start");

    let err = system
        .books
        .find_one(&BookFilter::default())
        .await
        .unwrap_err();
    assert_eq!(ErrorResponse::from(&err).codes(), vec!["EMPTY_FILTER"]);

    assert!(system.shutdown().await.is_ok());
}
