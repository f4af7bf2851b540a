mod export_errors;
mod export_service;

pub use export_errors::ExportError;
pub use export_service::ExportService;
