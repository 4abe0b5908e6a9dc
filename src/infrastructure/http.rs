pub mod dto;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use self::dto::GdpDocumentDto;
use crate::domain::{
    chart::GDP_DATA_URL,
    errors::{LoadResult, NetworkError, ParseError},
    gdp::{Dataset, GdpDataSource},
    logging::LogComponent,
};

/// Decode a GDP document body into a dataset.
pub fn parse_gdp_document(body: &str) -> LoadResult<Dataset> {
    let document: GdpDocumentDto =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    // A single malformed date rejects the whole document: nothing is drawn
    // rather than a chart with a gap in the series.
    Ok(document.to_domain_dataset()?)
}

/// HTTP loader for the GDP dataset. One GET per call: no retry, no timeout.
#[derive(Debug, Clone)]
pub struct GdpHttpClient {
    url: String,
}

impl Default for GdpHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GdpHttpClient {
    pub fn new() -> Self {
        Self::with_url(GDP_DATA_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_dataset(&self) -> LoadResult<Dataset> {
        crate::log_info!(LogComponent::Infrastructure("GdpHttpClient"), "📡 Fetching GDP dataset from {}", self.url);

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{e:?}")))?;

        if !response.ok() {
            return Err(NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("Failed to read body: {e:?}")))?;

        let dataset = parse_gdp_document(&body)?;

        crate::log_info!(LogComponent::Infrastructure("GdpHttpClient"), "✅ Loaded {} GDP records", dataset.len());

        Ok(dataset)
    }
}

impl GdpDataSource for GdpHttpClient {
    fn load_dataset(&self) -> LocalBoxFuture<'_, LoadResult<Dataset>> {
        Box::pin(self.fetch_dataset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DataError, InfrastructureError};

    const SAMPLE: &str = r#"{
        "errors": {},
        "id": 19891,
        "source_name": "Federal Reserve Economic Data",
        "source_code": "FRED",
        "code": "GDP",
        "name": "Gross Domestic Product, 1 Decimal",
        "description": "Units: Billions of Dollars",
        "display_url": "http://www.quandl.com/FRED/GDP",
        "frequency": "quarterly",
        "from_date": "1947-01-01",
        "to_date": "1947-04-01",
        "column_names": ["DATE", "VALUE"],
        "private": false,
        "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3]]
    }"#;

    #[test]
    fn default_client_targets_fixed_url() {
        assert_eq!(GdpHttpClient::new().url(), GDP_DATA_URL);
    }

    #[test]
    fn parses_document_with_metadata() {
        let dataset = parse_gdp_document(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].period.raw(), "1947-04-01");
        assert_eq!(dataset.records()[1].value.value(), 246.3);
        assert_eq!(dataset.metadata().source_name, "Federal Reserve Economic Data");
        assert_eq!(dataset.metadata().frequency.as_deref(), Some("quarterly"));
        assert_eq!(dataset.metadata().column_names, ["DATE", "VALUE"]);
    }

    #[test]
    fn missing_series_yields_empty_dataset() {
        let dataset = parse_gdp_document(r#"{"name": "GDP"}"#).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_gdp_document("{\"data\": [[").unwrap_err();
        assert!(matches!(err, InfrastructureError::Parse(ParseError::InvalidJson(_))));
    }

    #[test]
    fn padded_date_is_not_trimmed() {
        let err = parse_gdp_document(r#"{"data": [["1947-01-01", 243.1], ["1947-04-01 ", 246.3]]}"#).unwrap_err();
        assert!(matches!(
            err,
            InfrastructureError::Data(DataError::InvalidPeriod { ref raw, .. }) if raw == "1947-04-01 "
        ));
    }

    #[test]
    fn bad_date_is_a_data_error() {
        let err = parse_gdp_document(r#"{"data": [["01/01/1947", 243.1]]}"#).unwrap_err();
        assert!(matches!(err, InfrastructureError::Data(DataError::InvalidPeriod { .. })));
    }
}
