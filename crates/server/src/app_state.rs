use std::sync::Arc;

use server_api::{Clock, ScheduleBuilder};
use storage::EpisodeStore;

use crate::pages::PageRenderer;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: EpisodeStore,
    pub(crate) builder: ScheduleBuilder,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) renderer: Arc<dyn PageRenderer>,
}
