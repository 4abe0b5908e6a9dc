use futures::future::LocalBoxFuture;

use super::entities::Dataset;
use crate::domain::errors::LoadResult;

/// Source of the GDP series.
///
/// Futures are `!Send`: everything runs on the browser's single thread.
pub trait GdpDataSource {
    fn load_dataset(&self) -> LocalBoxFuture<'_, LoadResult<Dataset>>;
}

/// Fixed, already-loaded dataset. Useful for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    result: Option<LoadResult<Dataset>>,
}

impl InMemoryDataSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { result: Some(Ok(dataset)) }
    }

    pub fn failing(error: crate::domain::errors::InfrastructureError) -> Self {
        Self { result: Some(Err(error)) }
    }
}

impl GdpDataSource for InMemoryDataSource {
    fn load_dataset(&self) -> LocalBoxFuture<'_, LoadResult<Dataset>> {
        let result = self.result.clone().unwrap_or_else(|| Ok(Dataset::default()));
        Box::pin(async move { result })
    }
}
