use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::{
    handler::{
        create_post_db_handler, create_post_handler, delete_post_db_handler, delete_post_handler,
        get_post_db_handler, get_post_handler, post_list_db_handler, post_list_handler,
        update_post_db_handler, update_post_handler,
    },
    sample::SamplePosts,
    AppState,
};

/// Router for the stub variant: fixed sample data, no persistence.
pub fn stub_router(samples: Arc<SamplePosts>) -> Router {
    Router::new()
        .route(
            "/blog/post",
            get(get_post_handler).post(create_post_handler),
        )
        .route("/blog/posts", get(post_list_handler))
        .route("/blog/:id/update", put(update_post_handler))
        .route("/blog/:id/delete", delete(delete_post_handler))
        .with_state(samples)
}

/// Router for the persisted variant: create/list backed by the post store.
pub fn persisted_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/blog/post",
            get(get_post_db_handler).post(create_post_db_handler),
        )
        .route("/blog/posts", get(post_list_db_handler))
        .route("/blog/:id/update", put(update_post_db_handler))
        .route("/blog/:id/delete", delete(delete_post_db_handler))
        .with_state(app_state)
}
