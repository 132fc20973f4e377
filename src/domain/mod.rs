//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Synthesis Context: 语音合成请求/结果

pub mod synthesis;

pub use synthesis::{
    PretrainedModel, PretrainedModelData, SynthesisError, SynthesisRequest, SynthesisResult,
    TextCleaner,
};
