// Application layer - Dashboard assembly use cases
pub mod dashboard_service;
pub mod panel_factory;
