//! Kotone - VITS 语音合成 Web 客户端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Synthesis Context: 合成请求的两种变体、合成结果、预训练模型描述
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsBackend）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 表单页面静态托管 + 合成请求转发
//! - Adapters: 外部 TTS 服务的 HTTP 客户端 / Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
