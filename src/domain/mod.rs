// Domain layer - Dashboard document models
pub mod dashboard;
pub mod panel;
