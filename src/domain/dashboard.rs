// Dashboard domain model - the document imported by the visualization backend
use super::panel::Panel;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub uid: String,
    pub title: String,
    pub tags: Vec<String>,
    pub timezone: String,
    pub schema_version: u32,
    pub version: u32,
    pub refresh: String,
    pub panels: Vec<Panel>,
}
