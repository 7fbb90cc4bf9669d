use marquee_server::{
    AppState,
    config::{ServerConfig, StorageBackend},
    create_router,
    error::{ApiError, Result},
};
use marquee_store::{BlobStorage, FileSystemStorage, MemoryStorage, S3Storage};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("marquee_server=debug,marquee_store=debug,tower_http=debug")
        }))
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!("Starting Marquee Server on {}:{}", config.host, config.port);

    let storage = build_storage(&config).await?;
    let state = AppState::new(storage, config.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_storage(config: &ServerConfig) -> Result<Arc<dyn BlobStorage>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage, previews are lost on restart");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageBackend::Fs => {
            tokio::fs::create_dir_all(&config.storage_path).await?;
            info!("Using filesystem storage at {}", config.storage_path.display());
            Ok(Arc::new(FileSystemStorage::new(&config.storage_path)))
        }
        StorageBackend::S3 => {
            let s3 = S3Storage::from_env()
                .map_err(|e| ApiError::Config(format!("S3 storage: {}", e)))?;

            // Ensure S3 bucket exists
            if let Err(e) = s3.ensure_bucket().await {
                error!("Failed to ensure S3 bucket exists: {}", e);
            }

            info!("Using S3 storage, bucket {}", s3.bucket());
            Ok(Arc::new(s3))
        }
    }
}
