// Application state for HTTP handlers
use crate::application::chart_service::ChartDataService;

#[derive(Clone, Default)]
pub struct AppState {
    pub chart_service: ChartDataService,
}
