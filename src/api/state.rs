//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::Registrater;

/// Application state handed to every handler, using dynamic dispatch so the
/// transport never depends on a concrete registration stack.
#[derive(Clone)]
pub struct AppState {
    pub registrater: Arc<dyn Registrater>,
}

impl AppState {
    pub fn new(registrater: Arc<dyn Registrater>) -> Self {
        Self { registrater }
    }
}
