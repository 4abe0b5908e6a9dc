use serde::Deserialize;

use crate::domain::errors::DataError;
use crate::domain::gdp::{Dataset, DatasetMetadata, GdpRecord};

/// DTO for the GDP document. Unknown fields are ignored; everything but the
/// series itself is optional.
#[derive(Debug, Deserialize)]
pub struct GdpDocumentDto {
    #[serde(default)]
    pub data: Vec<GdpPointDto>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub display_url: String,
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub column_names: Vec<String>,
}

/// `["1947-01-01", 243.1]`
#[derive(Debug, Deserialize)]
pub struct GdpPointDto(pub String, pub f64);

impl GdpDocumentDto {
    fn metadata(&self) -> DatasetMetadata {
        DatasetMetadata {
            name: self.name.clone(),
            description: self.description.clone(),
            source_name: self.source_name.clone(),
            display_url: self.display_url.clone(),
            source_code: self.source_code.clone(),
            frequency: self.frequency.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            updated_at: self.updated_at.clone(),
            column_names: self.column_names.clone(),
        }
    }

    /// Convert to the domain aggregate, failing on the first bad date.
    pub fn to_domain_dataset(&self) -> Result<Dataset, DataError> {
        let records = self
            .data
            .iter()
            .map(|GdpPointDto(period, value)| GdpRecord::parse(period, *value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dataset::new(records, self.metadata()))
    }
}
