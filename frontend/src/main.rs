//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .route(
                "/api/wiki/{*path}",
                axum::routing::get(backend::server_extra::wiki_proxy::wiki_proxy),
            )
            // we can apply a layer to the entire router using axum's `.layer` method
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    dioxus::logger::tracing::debug!("Request: {} {}", request.method(), request.uri().path());
                    next.run(request).await
                },
            )))
    });
}
