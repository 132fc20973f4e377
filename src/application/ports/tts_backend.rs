//! TTS Backend Port - 外部合成服务抽象
//!
//! 定义对外部 TTS 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{PretrainedModel, SynthesisRequest, SynthesisResult};

/// TTS 错误
///
/// 错误原样上抛给调用方，不重试不恢复
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 音频制品 - 静态音频资源的字节与类型
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// TTS Backend Port
///
/// 每个操作恰好发起一次出站调用，无本地状态变更
#[async_trait]
pub trait TtsBackendPort: Send + Sync {
    /// 提交合成请求，返回生成音频的引用
    async fn generate_voice(&self, request: SynthesisRequest)
        -> Result<SynthesisResult, TtsError>;

    /// 列出服务端可用的预训练模型（顺序与服务端一致）
    async fn list_pretrained_models(&self) -> Result<Vec<PretrainedModel>, TtsError>;

    /// 获取静态音频制品
    async fn fetch_audio(&self, path: &str) -> Result<AudioArtifact, TtsError>;
}
