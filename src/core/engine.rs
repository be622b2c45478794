use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs the three stages in order and hands back the generated source text.
/// Writing it to a sink is the caller's job.
pub struct CodegenEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CodegenEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching emoji mapping...");
        let mapping = self.pipeline.extract().await?;
        tracing::info!("Fetched {} emoji", mapping.len());

        let entries = self.pipeline.transform(mapping);
        tracing::info!("Normalized {} entries", entries.len());

        let artifact = self.pipeline.render(&entries)?;
        tracing::info!("Rendered {} bytes of output", artifact.len());

        Ok(artifact)
    }
}
