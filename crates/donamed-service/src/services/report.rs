//! Report service
//!
//! Read-only aggregates over the three tables.

use serde_json::{Map, Value};
use tracing::instrument;

use crate::dto::StatusCountResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Equipment counts grouped by status, most common first
    #[instrument(skip(self))]
    pub async fn equipment_by_status(&self) -> ServiceResult<Vec<StatusCountResponse>> {
        let counts = self.ctx.report_repo().equipment_by_status().await?;
        Ok(counts.into_iter().map(StatusCountResponse::from).collect())
    }

    /// Deliveries from the trailing 30 days, newest first
    ///
    /// Rows are dynamic-keyed objects mirroring the report query's select
    /// list; they pass through untouched.
    #[instrument(skip(self))]
    pub async fn recent_deliveries(&self) -> ServiceResult<Vec<Map<String, Value>>> {
        Ok(self.ctx.report_repo().recent_deliveries().await?)
    }
}
