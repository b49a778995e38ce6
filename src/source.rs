//! Report source loading for the viewer: HTTP URL or local file.

use std::time::Duration;

use anyhow::Context;
use skillscope_report::Report;

/// Load and parse a published report from a URL or file path.
///
/// HTTP fetches are uncached and bounded by a 10 s timeout. Any failure is
/// an error here; the caller decides whether it is fatal (initial load) or
/// surfaced in the UI (refresh).
pub async fn load_report(source: &str) -> anyhow::Result<Report> {
    if source.starts_with("http://") || source.starts_with("https://") {
        load_over_http(source).await
    } else {
        let raw = std::fs::read_to_string(source)
            .with_context(|| format!("failed to read {source}"))?;
        serde_json::from_str(&raw).context("report is not valid JSON")
    }
}

async fn load_over_http(url: &str) -> anyhow::Result<Report> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(10))
        .user_agent(concat!("skillscope/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    if !response.status().is_success() {
        anyhow::bail!("unexpected status {} from {url}", response.status());
    }
    response
        .json::<Report>()
        .await
        .context("report is not valid JSON")
}
