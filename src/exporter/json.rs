// file: src/exporter/json.rs
// description: json export of the audit report

use crate::error::{AuditError, Result};
use crate::models::AuditReport;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub total_repos: usize,
    pub stale_repos: Vec<String>,
    #[serde(flatten)]
    pub report: &'a AuditReport,
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>, pretty: bool) -> Result<Self> {
        let output_path = output_path.into();
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| AuditError::file_operation(parent, e))?;
        }
        Ok(Self {
            output_path,
            pretty,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn render(&self, report: &AuditReport) -> Result<String> {
        let exported = ExportedReport {
            total_repos: report.total(),
            stale_repos: report.stale().map(|e| e.id.key()).collect(),
            report,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&exported)
        } else {
            serde_json::to_string(&exported)
        };

        rendered.map_err(|e| AuditError::Serialization(e.to_string()))
    }

    pub fn export(&self, report: &AuditReport) -> Result<()> {
        info!("Writing JSON report to {}", self.output_path.display());

        let json = self.render(report)?;
        fs::write(&self.output_path, json)
            .map_err(|e| AuditError::file_operation(&self.output_path, e))?;

        info!(
            "Export complete: {} repos ({} stale)",
            report.total(),
            report.summary.invalid
        );
        Ok(())
    }
}
