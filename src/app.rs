use crate::{modules, types::Context};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace;

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .route("/api/", get(modules::health_check))
            .nest("/api", modules::get_router())
            .with_state(ctx.clone())
            .layer(DefaultBodyLimit::max(ctx.app.body_limit))
            .layer(trace::TraceLayer::new_for_http());

        Self { ctx, router }
    }

    pub fn into_router(self) -> Router {
        self.router
    }

    pub async fn serve(self) -> Result<(), std::io::Error> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!(
            "App is running on {}:{} ({:?})",
            self.ctx.app.host,
            self.ctx.app.port,
            self.ctx.app.environment
        );

        axum::serve(listener, self.router).await
    }
}
