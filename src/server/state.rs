use std::sync::Arc;

use crate::features::datetime::{AppDeclarations, DatetimeService};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DatetimeService>,
    pub declarations: Arc<AppDeclarations>,
}

impl AppState {
    pub fn new(service: Arc<DatetimeService>, declarations: AppDeclarations) -> Self {
        Self {
            service,
            declarations: Arc::new(declarations),
        }
    }
}
