/// Name prefix marking a synthetic (aggregated) campaign
pub const AGGREGATE_NAME_PREFIX: &str = "📊 ";

/// Decimal precision for displayed metrics
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Collection segment used in document store keys
pub const CAMPAIGNS_COLLECTION: &str = "campaigns";

/// Fixed file name offered for the campaign export download
pub const EXPORT_FILE_NAME: &str = "campagne-marketing.json";
