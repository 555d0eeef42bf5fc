use crate::AnalysisError;
use tokio_util::sync::CancellationToken;
use velo_capture::{capture_batch, CaptureConfig};
use velo_infer::{AnalysisClient, AnalysisResult, ModelBackend};
use velo_source::FrameSource;

/// Runs the capture-and-analyze pipeline end to end.
///
/// A run takes the source by value: the frames, the raster surface and
/// the media handle belong to exactly one in-flight run, and the source
/// is released (dropped, stopping the device) when the run ends either
/// way. Callers wanting concurrent runs need separate sources.
pub struct Analyzer<B: ModelBackend> {
    client: AnalysisClient<B>,
    config: CaptureConfig,
}

impl<B: ModelBackend> Analyzer<B> {
    pub fn new(backend: B, config: CaptureConfig) -> Self {
        Self {
            client: AnalysisClient::new(backend),
            config,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// One full pipeline pass: Capturing, then Requesting, then a single
    /// terminal state.
    ///
    /// # Errors
    ///
    /// Fails with one of the classified [`AnalysisError`] kinds; no
    /// failure is retried internally.
    pub async fn run<S: FrameSource>(&self, source: S) -> Result<AnalysisResult, AnalysisError> {
        self.run_with_cancel(source, CancellationToken::new()).await
    }

    /// Like [`run`](Self::run), honoring `cancel` between and during
    /// capture steps. A cancelled run stops the source, never contacts
    /// the transport, and ends Failed.
    pub async fn run_with_cancel<S: FrameSource>(
        &self,
        mut source: S,
        cancel: CancellationToken,
    ) -> Result<AnalysisResult, AnalysisError> {
        log::debug!("run: capturing");
        let batch = match capture_batch(&mut source, &self.config, &cancel).await {
            Ok(batch) => batch,
            Err(err) => return Err(self.fail(err.into())),
        };

        log::debug!("run: requesting ({} frames)", batch.len());
        match self.client.analyze(&batch).await {
            Ok(result) => {
                log::debug!("run: succeeded (estimate {})", result.exit_velocity);
                Ok(result)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    fn fail(&self, err: AnalysisError) -> AnalysisError {
        log::debug!("run: failed ({err})");
        err
    }
}
