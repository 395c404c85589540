use compute::DashboardContext;
use gloo_net::http::Request;

use crate::settings;

/// One-time startup pipeline: fetch the dataset, parse it into the
/// observation table, fit the model, and derive the predicted column. Any
/// failure along the way aborts the whole dashboard.
pub async fn load_dashboard() -> Result<DashboardContext, String> {
    let settings = settings::get_settings();
    log::debug!("Fetching dataset from {}", settings.dataset_url);

    let response = Request::get(&settings.dataset_url)
        .send()
        .await
        .map_err(|err| format!("Failed to fetch dataset: {}", err))?;
    if !response.ok() {
        return Err(format!("Failed to fetch dataset: HTTP {}", response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| format!("Failed to read dataset: {}", err))?;

    let table = model::loader::load_csv(body.as_bytes()).map_err(|err| err.to_string())?;
    log::debug!("Parsed {} observations", table.len());

    DashboardContext::new(table).map_err(|err| err.to_string())
}
