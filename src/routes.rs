// region:    --- Imports
use crate::handlers;
use crate::query::store::UserStore;
use crate::session;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;

// endregion: --- Imports

/// 라우터 설정
/// 현재 사용자 확인은 마이페이지에만 건다.
pub fn router(store: Arc<dyn UserStore>) -> Router {
    let page_routes: Router<Arc<dyn UserStore>> = Router::new()
        .route("/users/me", get(handlers::handle_get_my_page))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&store),
            session::resolve_current_user,
        ));

    Router::new()
        .route(
            "/api/users/:user_id/products",
            get(handlers::handle_get_user_products),
        )
        .route("/api/users/:user_id/bids", get(handlers::handle_get_user_bids))
        .merge(page_routes)
        .with_state(store)
}
