//! bookstack API server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookstack::adapters::cache::InMemoryCache;
use bookstack::adapters::http::{
    author_routes, book_routes, goal_routes, search_routes, session_routes, stats_routes,
    tag_routes, AuthorsAppState, BooksAppState, GoalsAppState, SearchAppState,
    SessionsAppState, StatsAppState, TagsAppState,
};
use bookstack::adapters::postgres::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresGoalRepository,
    PostgresSessionRepository, PostgresTagRepository,
};
use bookstack::config::AppConfig;
use bookstack::ports::{
    AuthorRepository, BookRepository, GoalRepository, ResponseCache, SessionRepository,
    TagRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let books: Arc<dyn BookRepository> = Arc::new(PostgresBookRepository::new(pool.clone()));
    let authors: Arc<dyn AuthorRepository> =
        Arc::new(PostgresAuthorRepository::new(pool.clone()));
    let tags: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));
    let sessions: Arc<dyn SessionRepository> =
        Arc::new(PostgresSessionRepository::new(pool.clone()));
    let goals: Arc<dyn GoalRepository> = Arc::new(PostgresGoalRepository::new(pool));
    // one process-wide cache, passed by reference to every consumer
    let cache: Arc<dyn ResponseCache> = Arc::new(InMemoryCache::new());

    let app = Router::new()
        .nest(
            "/books",
            book_routes(BooksAppState {
                books: books.clone(),
                authors: authors.clone(),
                cache: cache.clone(),
            }),
        )
        .nest(
            "/authors",
            author_routes(AuthorsAppState {
                authors: authors.clone(),
                cache: cache.clone(),
                ttl: config.cache.entity_ttl(),
            }),
        )
        .nest(
            "/tags",
            tag_routes(TagsAppState {
                tags: tags.clone(),
                books: books.clone(),
                cache: cache.clone(),
                ttl: config.cache.entity_ttl(),
            }),
        )
        .nest(
            "/readingsessions",
            session_routes(SessionsAppState {
                sessions: sessions.clone(),
                books: books.clone(),
                cache: cache.clone(),
            }),
        )
        .nest(
            "/readinggoals",
            goal_routes(GoalsAppState {
                goals: goals.clone(),
                books: books.clone(),
                cache: cache.clone(),
            }),
        )
        .merge(stats_routes(StatsAppState {
            books: books.clone(),
            authors: authors.clone(),
            tags,
            sessions,
            goals,
            cache,
            statistics_ttl: config.cache.statistics_ttl(),
            streak_ttl: config.cache.streak_ttl(),
            heatmap_ttl: config.cache.heatmap_ttl(),
        }))
        .merge(search_routes(SearchAppState { books, authors }))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "bookstack listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers(Any)
    }
}
