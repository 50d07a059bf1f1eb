// Application layer - use cases
pub mod chart_service;
