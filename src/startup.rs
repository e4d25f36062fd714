//! Application Startup
//!
//! Wiring of repositories, services and the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    AuditTrailServiceImpl, CreateUserServiceImpl, DeleteUserServiceImpl,
    FindUserByEmailServiceImpl, GetUserServiceImpl, ListUsersServiceImpl, SideEffects,
    UpdateUserServiceImpl,
};
use crate::config::{Settings, StorageBackend};
use crate::domain::{AuditRepository, Notifier, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::notifications::{NoopNotifier, TracingNotifier};
use crate::infrastructure::repositories::{
    InMemoryAuditRepository, InMemoryUserRepository, PgAuditRepository, PgUserRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub audit: Arc<dyn AuditRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build state for the backend named in settings.
    pub async fn from_settings(settings: Settings) -> Result<Self> {
        match settings.database.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to PostgreSQL")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool)
                        .await
                        .context("failed to run migrations")?;
                    tracing::info!("Database migrations applied");
                }

                let notifier = notifier_for(&settings);
                Ok(Self {
                    users: Arc::new(PgUserRepository::new(pool.clone())),
                    audit: Arc::new(PgAuditRepository::new(pool)),
                    notifier,
                    settings: Arc::new(settings),
                })
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory store; data is lost on restart");
                Ok(Self::in_memory(settings))
            }
        }
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory(settings: Settings) -> Self {
        let notifier = notifier_for(&settings);
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            audit: Arc::new(InMemoryAuditRepository::new()),
            notifier,
            settings: Arc::new(settings),
        }
    }

    pub fn side_effects(&self) -> SideEffects {
        SideEffects::new(self.audit.clone(), self.notifier.clone())
    }

    pub fn create_user_service(&self) -> CreateUserServiceImpl<dyn UserRepository> {
        CreateUserServiceImpl::new(
            self.users.clone(),
            self.side_effects(),
            self.settings.users.clone(),
        )
    }

    pub fn update_user_service(&self) -> UpdateUserServiceImpl<dyn UserRepository> {
        UpdateUserServiceImpl::new(
            self.users.clone(),
            self.side_effects(),
            self.settings.users.clone(),
        )
    }

    pub fn delete_user_service(&self) -> DeleteUserServiceImpl<dyn UserRepository> {
        DeleteUserServiceImpl::new(self.users.clone(), self.side_effects())
    }

    pub fn list_users_service(&self) -> ListUsersServiceImpl<dyn UserRepository> {
        ListUsersServiceImpl::new(self.users.clone())
    }

    pub fn get_user_service(&self) -> GetUserServiceImpl<dyn UserRepository> {
        GetUserServiceImpl::new(self.users.clone())
    }

    pub fn find_user_by_email_service(&self) -> FindUserByEmailServiceImpl<dyn UserRepository> {
        FindUserByEmailServiceImpl::new(self.users.clone())
    }

    pub fn audit_trail_service(&self) -> AuditTrailServiceImpl<dyn UserRepository> {
        AuditTrailServiceImpl::new(self.users.clone(), self.audit.clone())
    }
}

fn notifier_for(settings: &Settings) -> Arc<dyn Notifier> {
    if settings.notifications.enabled {
        Arc::new(TracingNotifier)
    } else {
        Arc::new(NoopNotifier)
    }
}

/// Router with trace and CORS layers applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let addr = settings.server_addr();
        let state = AppState::from_settings(settings).await?;
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

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
