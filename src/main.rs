use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use wavelink_orders::config::environment::{BackendMode, EnvironmentConfig};
use wavelink_orders::models::catalog::demo_orders;
use wavelink_orders::repositories::{InMemoryOrderRepository, OrderRepository, SupabaseOrderRepository};
use wavelink_orders::routes::create_app;
use wavelink_orders::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("📡 WaveLink - Panel de Órdenes de Servicio");
    info!("==========================================");

    let config = EnvironmentConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Configuración inválida: {}", e))?;

    let repository: Arc<dyn OrderRepository> = match &config.backend {
        BackendMode::Supabase { url, anon_key } => Arc::new(
            SupabaseOrderRepository::new(
                url.clone(),
                anon_key.clone(),
                config.orders_table.clone(),
                config.backend_timeout,
            )
            .map_err(|e| anyhow::anyhow!("Error creando cliente del backend: {}", e))?,
        ),
        BackendMode::Memory => {
            warn!("🧪 Backend en memoria con órdenes de demostración");
            Arc::new(InMemoryOrderRepository::with_orders(demo_orders()))
        }
    };

    let app_state = AppState::new(config.clone(), repository);

    // Carga inicial; si falla el servidor arranca con el panel vacío
    if let Err(e) = app_state.order_store.load_all().await {
        error!("❌ No se pudieron cargar las órdenes iniciales: {}", e);
    }

    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/orders?sort_by=&zone= - Tabla de órdenes");
    info!("   POST /api/orders/reload - Recargar órdenes del backend");
    info!("   PUT  /api/orders/:id/technician - Asignar / desasignar técnico");
    info!("   GET  /api/orders/zone-stats - Fallas por zona");
    info!("   GET  /api/admin/panel - Panel de administración completo");
    info!("   POST /api/tickets - Reportar falla / solicitar instalación");
    info!("   GET  /api/tickets?client= - Historial de tickets");
    info!("   GET  /api/catalog/zones | /api/catalog/technicians");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
