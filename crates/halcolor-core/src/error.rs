//! 统一错误类型定义.
//!
//! 解码函数本身不会失败, 错误只出现在文本解析等外围接口上.

use thiserror::Error;

/// halcolor 统一错误类型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HalColorError {
    /// 输入为空
    #[error("输入为空")]
    EmptyInput,

    /// 数值格式无效 (十进制/十六进制解析失败或越界)
    #[error("无效数值: {0}")]
    InvalidCode(String),

    /// 未知的符号名
    #[error("未知符号: {0}")]
    UnknownName(String),

    /// 同一位域被多个片段重复指定
    #[error("位域冲突: {field} 同时被 {first} 和 {second} 指定")]
    FieldConflict {
        field: &'static str,
        first: String,
        second: String,
    },
}

/// halcolor 统一 Result 类型
pub type HalColorResult<T> = Result<T, HalColorError>;
