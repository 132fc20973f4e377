//! Application State

use std::sync::Arc;

use crate::application::ports::TtsBackendPort;

/// 应用状态
///
/// 各请求间无共享可变状态，只持有后端端口
pub struct AppState {
    pub tts_backend: Arc<dyn TtsBackendPort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(tts_backend: Arc<dyn TtsBackendPort>) -> Self {
        Self { tts_backend }
    }
}
