//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 TtsBackendPort trait，通过 HTTP 调用外部 TTS 服务
//!
//! 外部 TTS API:
//! POST {base}/tts
//! Request: 合成请求 JSON（两种变体之一）
//! Response: {"path": "...", "url": "..."}  (JSON)
//!
//! GET {base}/tts/pretrained-models
//! Response: [{"name": "...", "speakers": [...], "data": {"text_cleaners": [...]}}]
//!
//! GET {base}/tts-res-static/{path}
//! Response: 音频字节

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{AudioArtifact, TtsBackendPort, TtsError};
use crate::domain::{PretrainedModel, SynthesisRequest, SynthesisResult};

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
///
/// 每个操作发起一次出站调用，失败原样上抛
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, TtsError> {
        Self::new(HttpTtsClientConfig::default())
    }

    /// 合成接口 URL
    fn tts_url(&self) -> String {
        format!("{}/tts", self.config.base_url)
    }

    /// 预训练模型列表 URL
    fn pretrained_models_url(&self) -> String {
        format!("{}/tts/pretrained-models", self.config.base_url)
    }

    /// 静态音频资源 URL
    fn audio_url(&self, path: &str) -> String {
        format!(
            "{}/tts-res-static/{}",
            self.config.base_url,
            path.trim_start_matches('/')
        )
    }

    /// 发送错误归类（超时 / 连接失败 / 其他网络错误）
    fn map_send_error(e: reqwest::Error) -> TtsError {
        if e.is_timeout() {
            TtsError::Timeout
        } else if e.is_connect() {
            TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
        } else {
            TtsError::NetworkError(e.to_string())
        }
    }

    /// 非成功状态码转为 ServerError，附带响应正文
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TtsError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TtsError::ServerError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl TtsBackendPort for HttpTtsClient {
    async fn generate_voice(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResult, TtsError> {
        tracing::debug!(
            url = %self.tts_url(),
            text_len = request.text().len(),
            speaker_id = request.speaker_id(),
            "Sending TTS generate request"
        );

        let response = self
            .client
            .post(self.tts_url())
            .json(&request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let response = Self::check_status(response).await?;

        let result: SynthesisResult = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to decode result: {}", e)))?;

        tracing::info!(
            path = %result.path,
            url = %result.url,
            "TTS generation completed"
        );

        Ok(result)
    }

    async fn list_pretrained_models(&self) -> Result<Vec<PretrainedModel>, TtsError> {
        tracing::debug!(
            url = %self.pretrained_models_url(),
            "Fetching pretrained model list"
        );

        let response = self
            .client
            .get(self.pretrained_models_url())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let response = Self::check_status(response).await?;

        let models: Vec<PretrainedModel> = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to decode model list: {}", e)))?;

        tracing::info!(model_count = models.len(), "Pretrained model list fetched");

        Ok(models)
    }

    async fn fetch_audio(&self, path: &str) -> Result<AudioArtifact, TtsError> {
        let response = self
            .client
            .get(self.audio_url(path))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let response = Self::check_status(response).await?;

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::debug!(path = %path, audio_size = data.len(), "Audio artifact fetched");

        Ok(AudioArtifact { content_type, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[test]
    fn test_config_default() {
        let config = HttpTtsClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsClientConfig::new("http://example.com:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.timeout_secs, 60);
    }

    /// 启动一次性 mock 服务端，返回监听地址
    async fn spawn_backend(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> HttpTtsClient {
        HttpTtsClient::new(HttpTtsClientConfig::new(format!("http://{}", addr))).unwrap()
    }

    #[tokio::test]
    async fn test_generate_voice_returns_result_unchanged() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let recorder = received.clone();
        let router = Router::new().route(
            "/tts",
            post(move |Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    *recorder.lock().unwrap() = Some(body);
                    Json(json!({"path": "a.wav", "url": "http://x/a.wav"}))
                }
            }),
        );
        let addr = spawn_backend(router).await;

        let request = SynthesisRequest::Pretrained {
            pretrained_model: "nene".to_string(),
            speaker_id: 2,
            text: "こんにちは".to_string(),
        };
        let result = client_for(addr).generate_voice(request).await.unwrap();

        assert_eq!(result.path, "a.wav");
        assert_eq!(result.url, "http://x/a.wav");

        // 服务端收到的请求体只含该变体的字段
        let body = received.lock().unwrap().clone().unwrap();
        let obj = body.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["pretrained_model", "speaker_id", "text"]);
        assert_eq!(obj["speaker_id"], 2);
    }

    #[tokio::test]
    async fn test_generate_voice_sends_custom_model_fields() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let recorder = received.clone();
        let router = Router::new().route(
            "/tts",
            post(move |Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    *recorder.lock().unwrap() = Some(body);
                    Json(json!({"path": "b.wav", "url": "http://x/b.wav"}))
                }
            }),
        );
        let addr = spawn_backend(router).await;

        let request = SynthesisRequest::Custom {
            model_path: "/models/G_1000.pth".to_string(),
            conf_text: "{}".to_string(),
            speaker_id: 0,
            text: "テスト".to_string(),
        };
        client_for(addr).generate_voice(request).await.unwrap();

        let body = received.lock().unwrap().clone().unwrap();
        let obj = body.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["conf_text", "model_path", "speaker_id", "text"]);
    }

    #[tokio::test]
    async fn test_generate_voice_non_success_status() {
        let router = Router::new().route(
            "/tts",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "synthesis failed") }),
        );
        let addr = spawn_backend(router).await;

        let request = SynthesisRequest::Pretrained {
            pretrained_model: "nene".to_string(),
            speaker_id: 0,
            text: "a".to_string(),
        };
        let err = client_for(addr).generate_voice(request).await.unwrap_err();

        match err {
            TtsError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "synthesis failed");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_voice_malformed_payload() {
        let router = Router::new().route("/tts", post(|| async { "not a json object" }));
        let addr = spawn_backend(router).await;

        let request = SynthesisRequest::Pretrained {
            pretrained_model: "nene".to_string(),
            speaker_id: 0,
            text: "a".to_string(),
        };
        let err = client_for(addr).generate_voice(request).await.unwrap_err();
        assert!(matches!(err, TtsError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        // 先绑定再释放，拿到一个无人监听的端口
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(addr);

        let request = SynthesisRequest::Pretrained {
            pretrained_model: "nene".to_string(),
            speaker_id: 0,
            text: "a".to_string(),
        };
        let err = client.generate_voice(request).await.unwrap_err();
        assert!(matches!(err, TtsError::NetworkError(_)));

        let err = client.list_pretrained_models().await.unwrap_err();
        assert!(matches!(err, TtsError::NetworkError(_)));
    }

    fn model_list_router() -> Router {
        Router::new().route(
            "/tts/pretrained-models",
            get(|| async {
                Json(json!([
                    {
                        "name": "nene",
                        "speakers": ["0", "1"],
                        "data": {"text_cleaners": ["japanese_cleaners"]}
                    },
                    {
                        "name": "paimon",
                        "speakers": ["0"],
                        "data": {"text_cleaners": ["cjks_cleaners"]}
                    }
                ]))
            }),
        )
    }

    #[tokio::test]
    async fn test_list_pretrained_models_preserves_order_and_fields() {
        let addr = spawn_backend(model_list_router()).await;
        let models = client_for(addr).list_pretrained_models().await.unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "nene");
        assert_eq!(models[0].speakers, vec!["0", "1"]);
        assert_eq!(
            models[0].data.text_cleaners,
            vec![crate::domain::TextCleaner::JapaneseCleaners]
        );
        assert_eq!(models[1].name, "paimon");
        assert_eq!(
            models[1].data.text_cleaners,
            vec![crate::domain::TextCleaner::CjksCleaners]
        );
    }

    #[tokio::test]
    async fn test_list_pretrained_models_idempotent() {
        let addr = spawn_backend(model_list_router()).await;
        let client = client_for(addr);

        let first = client.list_pretrained_models().await.unwrap();
        let second = client.list_pretrained_models().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_audio_passes_bytes_and_content_type() {
        let router = Router::new().route(
            "/tts-res-static/out/a.wav",
            get(|| async {
                ([(header::CONTENT_TYPE, "audio/wav")], vec![1u8, 2, 3]).into_response()
            }),
        );
        let addr = spawn_backend(router).await;

        let artifact = client_for(addr).fetch_audio("out/a.wav").await.unwrap();
        assert_eq!(artifact.content_type, "audio/wav");
        assert_eq!(artifact.data, vec![1, 2, 3]);
    }
}
