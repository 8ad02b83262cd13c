//! Dashboard Commands

use crate::models::{DashboardOverview, Period};

pub async fn get_overview(period: Period, token: &str) -> Result<DashboardOverview, String> {
    super::get_json(&format!("/dashboard/overview/{}", period.as_str()), token)
        .await
        .map_err(|e| format!("Error fetching dashboard overview: {e}"))
}
