pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::{auth, entry, topic};

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use deadpool_redis::Runtime;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::{
    jwt::JwtTokenService, security::Argon2Hasher, RedisTokenRepository, UserQueryPostgres,
    UserRepositoryPostgres,
};
use crate::auth::application::{
    orchestrator::user_registration::UserRegistrationOrchestrator,
    ports::outgoing::{PasswordHasher, TokenProvider, TokenRepository},
    services::{password::BasicPasswordPolicy, session_guard::SessionGuard},
    use_cases::{
        create_user::{CreateUserCommand, CreateUserUseCase, ICreateUserUseCase},
        login_user::{ILoginUserUseCase, LoginUserUseCase},
        logout_user::{ILogoutUseCase, LogoutUseCase},
        refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    },
};
use crate::config::AppConfig;
use crate::entry::adapter::outgoing::{EntryQueryPostgres, EntryRepositoryPostgres};
use crate::entry::application::{
    ports::incoming::use_cases::{CreateEntryUseCase, EditEntryUseCase, GetEntryForEditUseCase},
    services::{CreateEntryService, EditEntryService, GetEntryForEditService},
};
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::{
    ports::incoming::use_cases::{
        CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, GetTopicsUseCase,
    },
    services::{CreateTopicService, DeleteTopicService, GetTopicService, GetTopicsService},
};

#[derive(Clone)]
pub struct AppState {
    pub register_user: Arc<UserRegistrationOrchestrator>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub get_topics_use_case: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_topic_use_case: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub create_topic_use_case: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub delete_topic_use_case: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub create_entry_use_case: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub get_entry_for_edit_use_case: Arc<dyn GetEntryForEditUseCase + Send + Sync>,
    pub edit_entry_use_case: Arc<dyn EditEntryUseCase + Send + Sync>,
}

#[derive(Parser)]
#[command(name = "learning_log", version, about = "Learning Log API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending database migrations
    Migrate,
    /// Create a staff account. The password is read from `ADMIN_PASSWORD`,
    /// or from the first line of stdin when that is unset.
    CreateAdmin {
        #[arg(long)]
        username: String,
    },
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt)
        .await
        .context("Failed to connect to database")
}

#[cfg(not(tarpaulin_include))]
fn create_user_use_case(
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
) -> CreateUserUseCase<UserQueryPostgres, UserRepositoryPostgres> {
    CreateUserUseCase::new(
        UserQueryPostgres::new(Arc::clone(db)),
        UserRepositoryPostgres::new(Arc::clone(db)),
        hasher,
        Arc::new(BasicPasswordPolicy),
    )
}

#[cfg(not(tarpaulin_include))]
async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let db_arc = Arc::new(connect_database(&config.database_url, config.db_max_connections).await?);

    let redis_pool = deadpool_redis::Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::new(config.argon2.clone())?);
    let token_repository = RedisTokenRepository::new(Arc::clone(&redis_arc));

    // Auth
    let create_user: Arc<dyn ICreateUserUseCase + Send + Sync> =
        Arc::new(create_user_use_case(&db_arc, Arc::clone(&password_hasher)));
    let register_user =
        UserRegistrationOrchestrator::new(create_user, Arc::clone(&token_provider));
    let login_user_use_case = LoginUserUseCase::new(
        UserQueryPostgres::new(Arc::clone(&db_arc)),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let logout_user_use_case =
        LogoutUseCase::new(token_repository.clone(), Arc::clone(&token_provider));
    let refresh_token_use_case =
        RefreshTokenUseCase::new(token_repository.clone(), Arc::clone(&token_provider));

    let blacklist: Arc<dyn TokenRepository + Send + Sync> = Arc::new(token_repository);
    let session_guard = SessionGuard::new(Arc::clone(&token_provider), blacklist);

    // Topics and entries
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let entry_query = EntryQueryPostgres::new(Arc::clone(&db_arc));
    let entry_repo = EntryRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        register_user: Arc::new(register_user),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        get_topics_use_case: Arc::new(GetTopicsService::new(topic_query.clone())),
        get_topic_use_case: Arc::new(GetTopicService::new(
            topic_query.clone(),
            entry_query.clone(),
        )),
        create_topic_use_case: Arc::new(CreateTopicService::new(topic_repo.clone())),
        delete_topic_use_case: Arc::new(DeleteTopicService::new(topic_repo)),
        create_entry_use_case: Arc::new(CreateEntryService::new(
            topic_query.clone(),
            entry_repo.clone(),
        )),
        get_entry_for_edit_use_case: Arc::new(GetEntryForEditService::new(
            entry_query.clone(),
            topic_query.clone(),
        )),
        edit_entry_use_case: Arc::new(EditEntryService::new(entry_query, topic_query, entry_repo)),
    };

    let (host, port) = config.bind_address();
    info!(host = %host, port, "Starting HTTP server");

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(session_guard.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn migrate() -> anyhow::Result<()> {
    let url = AppConfig::database_url_from_env()?;
    let db = connect_database(&url, 1).await?;

    Migrator::up(&db, None).await.context("Migration failed")?;
    info!("Migrations applied");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn create_admin(config: AppConfig, username: String, password: String) -> anyhow::Result<()> {
    let db = Arc::new(connect_database(&config.database_url, 1).await?);
    let hasher = Arc::new(Argon2Hasher::new(config.argon2)?);

    let command = CreateUserCommand::new(username, password.clone(), password)?.as_staff();
    let user = create_user_use_case(&db, hasher).execute(command).await?;

    info!(user_id = %user.id, username = %user.username, "Staff account created");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    // Entries
    cfg.service(crate::entry::adapter::incoming::web::routes::create_entry_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::get_entry_for_edit_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::edit_entry_handler);
    // Admin
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config::load_env_file();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(AppConfig::from_env()?).await,
        Command::Migrate => migrate().await,
        Command::CreateAdmin { username } => {
            let password =
                config::admin_password(&|key: &str| std::env::var(key).ok(), std::io::stdin().lock())?;
            create_admin(AppConfig::from_env()?, username, password).await
        }
    }
}
