//! Dataspace transfer 字段 (伽马 / EOTF).
//!
//! 对标 HAL 的 `HAL_DATASPACE_TRANSFER_*`.

use std::fmt;

use crate::hal::*;

/// Dataspace 传递特性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DataspaceTransfer {
    /// 未指定
    #[default]
    Unspecified,
    /// 线性传递 (无伽马)
    Linear,
    /// IEC 61966-2-1 (sRGB)
    Srgb,
    /// SMPTE 170M (BT.601/BT.709 共用曲线)
    Smpte170m,
    /// 纯伽马 2.2
    Gamma2_2,
    /// 纯伽马 2.6
    Gamma2_6,
    /// 纯伽马 2.8
    Gamma2_8,
    /// SMPTE ST 2084 (PQ / HDR10)
    St2084,
    /// ARIB STD-B67 (HLG)
    Hlg,
    /// 未知取值 (已掩码)
    Unknown(u32),
}

impl DataspaceTransfer {
    /// 所有已知取值
    pub const ALL: &'static [DataspaceTransfer] = &[
        Self::Unspecified,
        Self::Linear,
        Self::Srgb,
        Self::Smpte170m,
        Self::Gamma2_2,
        Self::Gamma2_6,
        Self::Gamma2_8,
        Self::St2084,
        Self::Hlg,
    ];

    /// 从已掩码的 transfer 位创建
    pub fn from_bits(bits: u32) -> Self {
        match bits {
            HAL_DATASPACE_TRANSFER_UNSPECIFIED => Self::Unspecified,
            HAL_DATASPACE_TRANSFER_LINEAR => Self::Linear,
            HAL_DATASPACE_TRANSFER_SRGB => Self::Srgb,
            HAL_DATASPACE_TRANSFER_SMPTE_170M => Self::Smpte170m,
            HAL_DATASPACE_TRANSFER_GAMMA2_2 => Self::Gamma2_2,
            HAL_DATASPACE_TRANSFER_GAMMA2_6 => Self::Gamma2_6,
            HAL_DATASPACE_TRANSFER_GAMMA2_8 => Self::Gamma2_8,
            HAL_DATASPACE_TRANSFER_ST2084 => Self::St2084,
            HAL_DATASPACE_TRANSFER_HLG => Self::Hlg,
            _ => Self::Unknown(bits),
        }
    }

    /// 从完整 dataspace 提取 transfer 字段
    pub fn from_dataspace(dataspace: u32) -> Self {
        Self::from_bits(dataspace & HAL_DATASPACE_TRANSFER_MASK)
    }

    /// 获取已掩码的 transfer 位
    pub fn bits(&self) -> u32 {
        match self {
            Self::Unspecified => HAL_DATASPACE_TRANSFER_UNSPECIFIED,
            Self::Linear => HAL_DATASPACE_TRANSFER_LINEAR,
            Self::Srgb => HAL_DATASPACE_TRANSFER_SRGB,
            Self::Smpte170m => HAL_DATASPACE_TRANSFER_SMPTE_170M,
            Self::Gamma2_2 => HAL_DATASPACE_TRANSFER_GAMMA2_2,
            Self::Gamma2_6 => HAL_DATASPACE_TRANSFER_GAMMA2_6,
            Self::Gamma2_8 => HAL_DATASPACE_TRANSFER_GAMMA2_8,
            Self::St2084 => HAL_DATASPACE_TRANSFER_ST2084,
            Self::Hlg => HAL_DATASPACE_TRANSFER_HLG,
            Self::Unknown(bits) => *bits,
        }
    }

    /// HAL 符号名 (去掉 `HAL_DATASPACE_TRANSFER_` 前缀)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Linear => "LINEAR",
            Self::Srgb => "SRGB",
            Self::Smpte170m => "SMPTE_170M",
            Self::Gamma2_2 => "GAMMA2_2",
            Self::Gamma2_6 => "GAMMA2_6",
            Self::Gamma2_8 => "GAMMA2_8",
            Self::St2084 => "ST2084",
            Self::Hlg => "HLG",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// 日志用描述, 未知值返回 None
    pub fn label(&self) -> Option<&'static str> {
        Some(match self {
            Self::Unspecified => "Unspecified",
            Self::Linear => "Linear",
            Self::Srgb => "sRGB",
            Self::Smpte170m => "SMPTE_170M",
            Self::Gamma2_2 => "gamma 2.2",
            Self::Gamma2_6 => "gamma 2.6",
            Self::Gamma2_8 => "gamma 2.8",
            Self::St2084 => "SMPTE 2084",
            Self::Hlg => "STD-B67",
            Self::Unknown(_) => return None,
        })
    }
}

impl fmt::Display for DataspaceTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "Unknown dataspace transfer {}", self.bits()),
        }
    }
}
