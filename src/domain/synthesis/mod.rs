//! Synthesis Context - 语音合成限界上下文
//!
//! 职责:
//! - 合成请求的两种变体及必填校验
//! - 合成结果与预训练模型的数据结构

mod errors;
mod value_objects;

pub use errors::SynthesisError;
pub use value_objects::{
    PretrainedModel, PretrainedModelData, SynthesisRequest, SynthesisResult, TextCleaner,
};
