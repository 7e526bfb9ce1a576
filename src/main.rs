use invoice_reconcile::api::{self, AppState, UploadGate};
use invoice_reconcile::db::{PgActivityLog, PgOrderRepository};
use invoice_reconcile::{create_pool, AppConfig, ReconcileService, TextExtractor};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 文本提取后端在启动时确定, 不可用则直接退出
    let extractor = Arc::new(TextExtractor::from_config(&config.extraction)?);
    info!("Text extraction backend: {}", extractor.backend());

    // 创建数据库连接池
    let pool = create_pool(&config.database).await?;
    info!("Database pool created");

    let reconciler = Arc::new(ReconcileService::new(
        Arc::new(PgOrderRepository::new(pool.clone())),
        Arc::new(PgActivityLog::new(pool)),
        extractor,
    ));
    let state = AppState {
        reconciler,
        upload: UploadGate::new(config.upload.max_bytes),
    };
    let app = api::router(state);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/orders/:order_id/verify-invoice?storeId=    - verify invoice PDF");
    info!("  GET  /api/orders/paid-not-printed?storeId=            - paid orders waiting for print");
    info!("  GET  /api/orders/paid-not-printed/export?storeId=     - same list as CSV");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
