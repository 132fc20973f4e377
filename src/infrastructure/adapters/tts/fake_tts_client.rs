//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终返回固定的合成结果与模型列表，不实际调用 TTS 服务

use async_trait::async_trait;

use crate::application::ports::{AudioArtifact, TtsBackendPort, TtsError};
use crate::domain::{
    PretrainedModel, PretrainedModelData, SynthesisRequest, SynthesisResult, TextCleaner,
};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频路径
    pub audio_path: String,
    /// 固定返回的音频 URL
    pub audio_url: String,
    /// 模拟推理延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_path: "fake/output.wav".to_string(),
            audio_url: "http://localhost:8000/tts-res-static/fake/output.wav".to_string(),
            latency_ms: 200,
        }
    }
}

/// Fake TTS Client
///
/// 用于测试与本地开发，始终返回配置的固定结果
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    models: Vec<PretrainedModel>,
}

impl FakeTtsClient {
    /// 创建新的 FakeTtsClient
    pub fn new(config: FakeTtsClientConfig) -> Self {
        let models = vec![
            PretrainedModel {
                name: "fake-jp".to_string(),
                speakers: vec!["0".to_string(), "1".to_string()],
                data: PretrainedModelData {
                    text_cleaners: vec![TextCleaner::JapaneseCleaners],
                },
            },
            PretrainedModel {
                name: "fake-cjks".to_string(),
                speakers: vec!["0".to_string()],
                data: PretrainedModelData {
                    text_cleaners: vec![TextCleaner::CjksCleaners],
                },
            },
        ];
        tracing::info!(
            audio_path = %config.audio_path,
            latency_ms = config.latency_ms,
            "FakeTtsClient initialized"
        );
        Self { config, models }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }
}

#[async_trait]
impl TtsBackendPort for FakeTtsClient {
    async fn generate_voice(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResult, TtsError> {
        tracing::debug!(
            text_len = request.text().len(),
            speaker_id = request.speaker_id(),
            "FakeTtsClient: returning fixed result"
        );

        // 模拟推理延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;

        Ok(SynthesisResult {
            path: self.config.audio_path.clone(),
            url: self.config.audio_url.clone(),
        })
    }

    async fn list_pretrained_models(&self) -> Result<Vec<PretrainedModel>, TtsError> {
        Ok(self.models.clone())
    }

    async fn fetch_audio(&self, path: &str) -> Result<AudioArtifact, TtsError> {
        tracing::debug!(path = %path, "FakeTtsClient: returning fixed audio bytes");
        Ok(AudioArtifact {
            content_type: "audio/wav".to_string(),
            data: vec![0u8; 16],
        })
    }
}
