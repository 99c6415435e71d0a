//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{ChirpService, ChirpServiceImpl, UserService, UserServiceImpl};
use crate::config::Settings;
use crate::domain::{ChirpRepository, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgChirpRepository, PgUserRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging, VisitCounter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub chirps: Arc<dyn ChirpService>,
    pub visits: Arc<VisitCounter>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire services over the given repositories
    pub fn new<U, C>(settings: Settings, user_repo: Arc<U>, chirp_repo: Arc<C>) -> Self
    where
        U: UserRepository + 'static,
        C: ChirpRepository + 'static,
    {
        Self {
            users: Arc::new(UserServiceImpl::new(user_repo)),
            chirps: Arc::new(ChirpServiceImpl::new(chirp_repo)),
            visits: Arc::new(VisitCounter::new()),
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with all middleware applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);
    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(logging::create_trace_layer())
            .layer(cors),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("connect to database")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("run database migrations")?;
            tracing::info!("Database migrations applied");
        }

        let addr = settings.server.socket_addr().context("invalid server address")?;

        let state = AppState::new(
            settings,
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgChirpRepository::new(db)),
        );
        let router = build_router(state);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
