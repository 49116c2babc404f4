use std::sync::Arc;

use fitplan_core::application::FitPlanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FitPlanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FitPlanService) -> Self {
        Self { args, service }
    }
}
