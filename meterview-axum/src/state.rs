use std::sync::Arc;

use meterview_core::MeterApp;

#[derive(Clone)]
pub struct MeterAxumState {
    pub app: Arc<MeterApp>,
}
