//! Synthesis Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("模型路径不能为空")]
    EmptyModelPath,

    #[error("模型配置文本不能为空")]
    EmptyConfText,

    #[error("预训练模型名称不能为空")]
    EmptyPretrainedModel,

    #[error("合成文本不能为空")]
    EmptyText,
}
