pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod route;
pub mod sample;

use std::sync::Arc;

use db::PostStore;
use sample::SamplePosts;

/// Shared state for the persisted variant.
pub struct AppState {
    pub samples: Arc<SamplePosts>,
    pub store: Arc<dyn PostStore>,
}
