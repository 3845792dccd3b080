// src/main.rs
use anyhow::Result;
use blog_api::application::{
    ports::{security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use blog_api::config::AppConfig;
use blog_api::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    member::MemberReadRepository,
    user::UserRepository,
};
use blog_api::infrastructure::{
    database,
    repositories::{SqliteArticleRepository, SqliteMemberRepository, SqliteUserRepository},
    security::password::Argon2PasswordHasher,
    sessions,
    time::SystemClock,
};
use blog_api::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let session_store = sessions::init_session_store(pool.clone()).await?;
    let session_cleanup = sessions::spawn_expired_session_cleanup(
        session_store.clone(),
        config.session_cleanup_interval(),
    );

    let article_repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> = article_repo.clone();
    let article_read_repo: Arc<dyn ArticleReadRepository> = article_repo;
    let member_read_repo: Arc<dyn MemberReadRepository> =
        Arc::new(SqliteMemberRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        member_read_repo,
        user_repo,
        password_hasher,
        clock,
    ));

    let state = HttpState { services };
    let settings = HttpSettings::from_config(&config);
    let app = build_router(state, session_store, &settings);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    session_cleanup.abort();
    served?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
