// region:    --- Imports
use auction_user_service::config::Config;
use auction_user_service::database::DatabaseManager;
use auction_user_service::query::store::{PostgresUserStore, UserStore};
use auction_user_service::routes;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 가 있으면 로드
    dotenvy::dotenv().ok();

    // logging 초기화 (stderr)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // 명령행 인자 > 환경 변수 > 기본값
    let config = Config::parse();

    // DatabaseManager 생성
    let db_manager = DatabaseManager::connect(&config).await?;

    // 스키마 적용 (로컬 실행용)
    if config.init_schema {
        if let Err(e) = db_manager.initialize_database().await {
            error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
            return Err(e.into());
        }
        info!("{:<12} --> 데이터베이스 초기화 성공", "Main");
    }

    let store: Arc<dyn UserStore> = Arc::new(PostgresUserStore::new(db_manager.get_pool()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = routes::router(store).layer(cors);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
