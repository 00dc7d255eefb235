use crate::configuration::{Configuration, DatabaseConfigs};
use crate::domain::UserId;
use crate::repository;
use crate::routes::{health_check, post_routes, user_routes};
use crate::utils::{json_error_handler, query_error_handler};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&config.database);

        let anonymous_author = UserId::try_from(config.application.anonymous_user_id)
            .map_err(anyhow::Error::msg)
            .context("Invalid application.anonymous_user_id")?;
        let author_exists = repository::user_exists(anonymous_author, &connection_pool)
            .await
            .context("Failed to look up the anonymous author")?;
        if !author_exists {
            anyhow::bail!(
                "application.anonymous_user_id {anonymous_author} does not match any user"
            );
        }

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind TCP listener to {address}"))?;
        let port = listener
            .local_addr()
            .context("Failed to read local address of TCP listener")?
            .port();
        let server = run(listener, connection_pool, AnonymousAuthor(anonymous_author))?;

        tracing::info!(%address, port, "Application built");
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        self.server.await.context("Server stopped with an error")
    }
}

pub fn get_connection_pool(config: &DatabaseConfigs) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy_with(config.connect_options())
}

/// Author recorded on posts while the board has no sessions.
#[derive(Debug, Clone, Copy)]
pub struct AnonymousAuthor(pub UserId);

fn run(
    tcp_listener: TcpListener,
    db_pool: PgPool,
    anonymous_author: AnonymousAuthor,
) -> Result<Server, anyhow::Error> {
    let db_pool = web::Data::new(db_pool);
    let anonymous_author = web::Data::new(anonymous_author);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(configure_routes)
            .app_data(db_pool.clone())
            .app_data(anonymous_author.clone())
    })
    .listen(tcp_listener)
    .context("Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(web::scope("/posts").configure(post_routes))
                .service(web::scope("/users").configure(user_routes)),
        );
}
