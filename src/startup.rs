//! Application startup: dependency wiring and server binding.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    MessageService, MessageServiceImpl, UserService, UserServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{MongoMessageRepository, MongoUserRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers.
///
/// The services carry their repositories, which carry the database handle
/// created at startup; no route touches the connection directly.
#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<dyn MessageService>,
    pub users: Arc<dyn UserService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the state from any service implementations.
    pub fn new(
        messages: Arc<dyn MessageService>,
        users: Arc<dyn UserService>,
        settings: Settings,
    ) -> Self {
        Self {
            messages,
            users,
            settings: Arc::new(settings),
        }
    }
}

/// A built server, bound but not yet serving.
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Connect to the database, wire the layers together, and bind the
    /// listener.
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::connect(&settings.database).await?;
        tracing::info!(database = %settings.database.name, "Database connection established");

        let message_repo = Arc::new(MongoMessageRepository::new(&db));
        let user_repo = Arc::new(MongoUserRepository::new(&db));

        let state = AppState::new(
            Arc::new(MessageServiceImpl::new(message_repo)),
            Arc::new(UserServiceImpl::new(user_repo)),
            settings.clone(),
        );

        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        let addr: SocketAddr = settings.server_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Serve requests until the process is stopped.
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Address the listener actually bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
