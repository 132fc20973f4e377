//! Application Layer - 应用层
//!
//! Ports: 外部服务端口定义（TtsBackend）

pub mod ports;

pub use ports::{AudioArtifact, TtsBackendPort, TtsError};
