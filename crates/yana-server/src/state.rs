//! Shared application state, built once in `main` and cloned per request.

use std::sync::Arc;

use yana_core::JudgeService;

use crate::generator::FlowGenerator;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub judge: JudgeService,
    pub generator: Arc<dyn FlowGenerator>,
}

impl AppState {
    pub fn new(settings: Settings, judge: JudgeService, generator: Arc<dyn FlowGenerator>) -> Self {
        Self {
            settings: Arc::new(settings),
            judge,
            generator,
        }
    }
}
