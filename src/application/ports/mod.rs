//! Application Ports - 端口定义

mod tts_backend;

pub use tts_backend::{AudioArtifact, TtsBackendPort, TtsError};
