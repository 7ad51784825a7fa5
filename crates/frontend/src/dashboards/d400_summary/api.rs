use contracts::dashboards::d400_summary::dto::SummaryResponse;
use contracts::system::access::ApiResource;

use crate::shared::api_utils::{self, resource_path};

/// Counts and totals of the home page
pub async fn get_summary() -> Result<SummaryResponse, String> {
    api_utils::get_json(&resource_path(ApiResource::Summary, None)).await
}
