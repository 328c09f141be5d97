use crate::config::{CatalogConfig, ConfigError};
use crate::facade::CatalogClient;
use crate::model::{
    Account, Artist, Author, Book, Game, Genre, Movie, Music, Platform, Program, Publisher, Series,
};
use catalog_framework::ResourceActor;
use std::path::Path;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator of the catalogue.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping one actor per resource
/// - **Dependency Wiring**: books see authors and publishers, music sees artists,
///   games see platforms
/// - **Configuration**: every facade gets the configured page size and rejection status
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::default());
///
/// let author = system.authors.add(author_change).await?;
/// let book = system.books.add(book_change_referencing(author)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub accounts: CatalogClient<Account>,
    pub artists: CatalogClient<Artist>,
    pub authors: CatalogClient<Author>,
    pub books: CatalogClient<Book>,
    pub games: CatalogClient<Game>,
    pub genres: CatalogClient<Genre>,
    pub movies: CatalogClient<Movie>,
    pub music: CatalogClient<Music>,
    pub platforms: CatalogClient<Platform>,
    pub programs: CatalogClient<Program>,
    pub publishers: CatalogClient<Publisher>,
    pub series: CatalogClient<Series>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Creates every actor, wires dependencies and starts them. Must be called inside a tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let buffer = config.actors.buffer_size;

        // 1. Create actors (no dependencies)
        let (account_actor, accounts) = ResourceActor::<Account>::new(buffer);
        let (artist_actor, artists) = ResourceActor::<Artist>::new(buffer);
        let (author_actor, authors) = ResourceActor::<Author>::new(buffer);
        let (book_actor, books) = ResourceActor::<Book>::new(buffer);
        let (game_actor, games) = ResourceActor::<Game>::new(buffer);
        let (genre_actor, genres) = ResourceActor::<Genre>::new(buffer);
        let (movie_actor, movies) = ResourceActor::<Movie>::new(buffer);
        let (music_actor, music) = ResourceActor::<Music>::new(buffer);
        let (platform_actor, platforms) = ResourceActor::<Platform>::new(buffer);
        let (program_actor, programs) = ResourceActor::<Program>::new(buffer);
        let (publisher_actor, publishers) = ResourceActor::<Publisher>::new(buffer);
        let (series_actor, series) = ResourceActor::<Series>::new(buffer);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(account_actor.run(())),
            tokio::spawn(artist_actor.run(())),
            tokio::spawn(author_actor.run(())),
            tokio::spawn(book_actor.run((authors.clone(), publishers.clone()))),
            tokio::spawn(game_actor.run(platforms.clone())),
            tokio::spawn(genre_actor.run(())),
            tokio::spawn(movie_actor.run(())),
            tokio::spawn(music_actor.run(artists.clone())),
            tokio::spawn(platform_actor.run(())),
            tokio::spawn(program_actor.run(())),
            tokio::spawn(publisher_actor.run(())),
            tokio::spawn(series_actor.run(())),
        ];
        info!(actors = handles.len(), "Catalog started");

        Self {
            accounts: CatalogClient::new(accounts, config),
            artists: CatalogClient::new(artists, config),
            authors: CatalogClient::new(authors, config),
            books: CatalogClient::new(books, config),
            games: CatalogClient::new(games, config),
            genres: CatalogClient::new(genres, config),
            movies: CatalogClient::new(movies, config),
            music: CatalogClient::new(music, config),
            platforms: CatalogClient::new(platforms, config),
            programs: CatalogClient::new(programs, config),
            publishers: CatalogClient::new(publishers, config),
            series: CatalogClient::new(series, config),
            handles,
        }
    }

    /// Loads the configuration at `path` (defaults when absent) and starts the catalogue.
    pub async fn start(path: &Path) -> Result<Self, ConfigError> {
        let config = CatalogConfig::load(path).await?;
        Ok(Self::new(&config))
    }

    /// Gracefully shuts down the entire catalogue.
    ///
    /// Dropping the facades closes every channel. Actors holding a dependency's client
    /// in their context release it when they stop, so dependencies stop right after.
    /// Facade clones kept elsewhere keep their actor alive.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        // Step 1: close every channel by dropping the facades
        let Self {
            accounts,
            artists,
            authors,
            books,
            games,
            genres,
            movies,
            music,
            platforms,
            programs,
            publishers,
            series,
            handles,
        } = self;
        drop((accounts, artists, authors, books, games, genres));
        drop((movies, music, platforms, programs, publishers, series));

        // Step 2: wait for every actor to drain its queue and stop
        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
