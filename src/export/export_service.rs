use super::export_errors::ExportError;
use crate::campaigns::CampaignMap;
use crate::errors::Result;

/// Serializes the full campaign map for the download offered to the user
/// (file name: [`crate::constants::EXPORT_FILE_NAME`]).
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        ExportService
    }

    /// Indented JSON of the whole campaign map.
    pub fn export_campaigns(&self, campaigns: &CampaignMap) -> Result<String> {
        serde_json::to_string_pretty(campaigns)
            .map_err(|e| ExportError::Serialization(e).into())
    }

    /// Re-parses an export; `parse(export(m)) == m`.
    pub fn parse_campaigns(&self, data: &str) -> Result<CampaignMap> {
        serde_json::from_str(data).map_err(|e| ExportError::Serialization(e).into())
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
