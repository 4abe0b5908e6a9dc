use crate::domain::{
    chart::{ChartConfig, ChartScene},
    errors::AppError,
    gdp::GdpDataSource,
    logging::{LogComponent, get_logger},
};

/// Application service: load the dataset once and turn it into a drawable scene
pub struct ChartApplicationService<S: GdpDataSource> {
    source: S,
    config: ChartConfig,
}

impl<S: GdpDataSource> ChartApplicationService<S> {
    pub fn new(source: S, config: ChartConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// `Ok(None)` means the dataset loaded but had nothing to draw.
    /// Failures are logged here; callers only decide what to render.
    pub async fn load_scene(&self) -> Result<Option<ChartScene>, AppError> {
        let dataset = match self.source.load_dataset().await {
            Ok(dataset) => dataset,
            Err(e) => {
                crate::log_error!(LogComponent::Application("ChartService"), "❌ Error loading data: {}", e);
                return Err(e.into());
            }
        };

        let scene = ChartScene::build(&dataset, &self.config);
        match &scene {
            Some(scene) => get_logger().info(
                LogComponent::Application("ChartService"),
                &format!(
                    "📊 Scene ready from '{}': {} bars, {} x ticks, {} y ticks",
                    dataset.metadata().source_name,
                    scene.bar_count(),
                    scene.x_ticks.len(),
                    scene.y_ticks.len()
                ),
            ),
            None => get_logger().warn(
                LogComponent::Application("ChartService"),
                "Dataset is empty, nothing to draw",
            ),
        }
        Ok(scene)
    }
}
