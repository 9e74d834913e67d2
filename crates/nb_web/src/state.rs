use std::path::PathBuf;
use std::sync::Arc;

use nb_pipeline::BriefingProcessor;

pub struct AppState {
    pub processor: Arc<BriefingProcessor>,
    /// Directory the speech synthesizer writes artifacts into; the audio
    /// handler serves files from here and nowhere else.
    pub audio_dir: PathBuf,
}
