//! Dataspace range 字段.
//!
//! 对标 HAL 的 `HAL_DATASPACE_RANGE_*`.

use std::fmt;

use crate::hal::*;

/// Dataspace 取值范围
///
/// - Full: 0-255 (8 位)
/// - Limited: Y 16-235, Cb/Cr 16-240 (8 位)
/// - Extended: 允许超出 [0, 1] 的浮点值 (scRGB 等)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DataspaceRange {
    /// 未指定
    #[default]
    Unspecified,
    /// 完整范围
    Full,
    /// 有限范围 (广播/TV)
    Limited,
    /// 扩展范围
    Extended,
    /// 未知取值 (已掩码)
    Unknown(u32),
}

impl DataspaceRange {
    /// 所有已知取值
    pub const ALL: &'static [DataspaceRange] =
        &[Self::Unspecified, Self::Full, Self::Limited, Self::Extended];

    /// 从已掩码的 range 位创建
    pub fn from_bits(bits: u32) -> Self {
        match bits {
            HAL_DATASPACE_RANGE_UNSPECIFIED => Self::Unspecified,
            HAL_DATASPACE_RANGE_FULL => Self::Full,
            HAL_DATASPACE_RANGE_LIMITED => Self::Limited,
            HAL_DATASPACE_RANGE_EXTENDED => Self::Extended,
            _ => Self::Unknown(bits),
        }
    }

    /// 从完整 dataspace 提取 range 字段
    pub fn from_dataspace(dataspace: u32) -> Self {
        Self::from_bits(dataspace & HAL_DATASPACE_RANGE_MASK)
    }

    /// 获取已掩码的 range 位
    pub fn bits(&self) -> u32 {
        match self {
            Self::Unspecified => HAL_DATASPACE_RANGE_UNSPECIFIED,
            Self::Full => HAL_DATASPACE_RANGE_FULL,
            Self::Limited => HAL_DATASPACE_RANGE_LIMITED,
            Self::Extended => HAL_DATASPACE_RANGE_EXTENDED,
            Self::Unknown(bits) => *bits,
        }
    }

    /// HAL 符号名 (去掉 `HAL_DATASPACE_RANGE_` 前缀)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Full => "FULL",
            Self::Limited => "LIMITED",
            Self::Extended => "EXTENDED",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        Some(match self {
            Self::Unspecified => "Range Unspecified",
            Self::Full => "Full range",
            Self::Limited => "Limited range",
            Self::Extended => "Extended range",
            Self::Unknown(_) => return None,
        })
    }
}

impl fmt::Display for DataspaceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "Unknown dataspace range {}", self.bits()),
        }
    }
}
