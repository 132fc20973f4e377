//! Synthesis Context - Value Objects
//!
//! 外部 TTS 服务的请求/响应数据结构。
//! 字段名由外部服务固定，序列化时必须逐字保留。

use serde::{Deserialize, Serialize};

use super::SynthesisError;

/// 合成请求
///
/// 两种互斥的请求变体:
/// - Custom: 自定义模型路径 + 配置文本
/// - Pretrained: 服务端预置模型
///
/// 不变量: 每个请求只填充一个变体，序列化只输出该变体的字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SynthesisRequest {
    /// 自定义模型请求
    Custom {
        /// 模型文件路径（服务端可见的路径）
        model_path: String,
        /// 模型配置文本（JSON 原文）
        conf_text: String,
        /// 说话人 ID
        speaker_id: u32,
        /// 要合成的文本
        text: String,
    },
    /// 预训练模型请求
    Pretrained {
        /// 预训练模型名称
        pretrained_model: String,
        /// 说话人 ID
        speaker_id: u32,
        /// 要合成的文本
        text: String,
    },
}

impl SynthesisRequest {
    /// 校验必填字段非空（对应表单的 required 校验）
    pub fn validate(&self) -> Result<(), SynthesisError> {
        match self {
            Self::Custom {
                model_path,
                conf_text,
                text,
                ..
            } => {
                if model_path.is_empty() {
                    return Err(SynthesisError::EmptyModelPath);
                }
                if conf_text.is_empty() {
                    return Err(SynthesisError::EmptyConfText);
                }
                if text.is_empty() {
                    return Err(SynthesisError::EmptyText);
                }
            }
            Self::Pretrained {
                pretrained_model,
                text,
                ..
            } => {
                if pretrained_model.is_empty() {
                    return Err(SynthesisError::EmptyPretrainedModel);
                }
                if text.is_empty() {
                    return Err(SynthesisError::EmptyText);
                }
            }
        }
        Ok(())
    }

    /// 要合成的文本
    pub fn text(&self) -> &str {
        match self {
            Self::Custom { text, .. } => text,
            Self::Pretrained { text, .. } => text,
        }
    }

    /// 说话人 ID
    pub fn speaker_id(&self) -> u32 {
        match self {
            Self::Custom { speaker_id, .. } => *speaker_id,
            Self::Pretrained { speaker_id, .. } => *speaker_id,
        }
    }
}

/// 合成结果 - 生成音频的引用
///
/// 客户端不持久化该结果，仅在单次响应内有效
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// 服务端音频文件路径
    pub path: String,
    /// 可播放的音频 URL
    pub url: String,
}

/// 文本清洗管线标签
///
/// 选择服务端合成前的文本归一化行为，取值由外部服务枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextCleaner {
    #[serde(rename = "cjks_cleaners")]
    CjksCleaners,
    #[serde(rename = "japanese_cleaners")]
    JapaneseCleaners,
}

impl TextCleaner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CjksCleaners => "cjks_cleaners",
            Self::JapaneseCleaners => "japanese_cleaners",
        }
    }
}

/// 预训练模型附加数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PretrainedModelData {
    /// 文本清洗管线（服务端返回单元素列表）
    pub text_cleaners: Vec<TextCleaner>,
}

/// 预训练模型描述
///
/// 每次列表请求整体获取，客户端不缓存不修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PretrainedModel {
    /// 模型名称
    pub name: String,
    /// 说话人列表（顺序与服务端一致）
    pub speakers: Vec<String>,
    pub data: PretrainedModelData,
}
