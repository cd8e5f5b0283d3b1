//! # halcolor-core
//!
//! 图形 HAL 色彩元数据的调试解码库.
//!
//! 把打包的 dataspace (standard/transfer/range 位域) 和色彩模式编号转换为日志用的可读描述.
//! 所有解码函数都是纯函数, 无法识别的编码返回带原始数值的 "Unknown ..." 描述, 从不失败.
//!
//! ```
//! use halcolor_core::hal::{HAL_COLOR_MODE_SRGB, HAL_DATASPACE_V0_BT709};
//! use halcolor_core::{dataspace_details, decode_color_mode};
//!
//! assert_eq!(dataspace_details(HAL_DATASPACE_V0_BT709), "BT709 SMPTE_170M Limited range");
//! assert_eq!(decode_color_mode(HAL_COLOR_MODE_SRGB), "HAL_COLOR_MODE_SRGB");
//! ```

pub mod color_mode;
pub mod dataspace;
pub mod error;
pub mod hal;
pub mod parse;

// 重导出常用类型
pub use color_mode::{ColorMode, decode_color_mode};
pub use dataspace::{
    Dataspace, DataspaceRange, DataspaceStandard, DataspaceTransfer, LegacyDataspace,
    dataspace_details, decode_range, decode_standard, decode_transfer,
};
pub use error::{HalColorError, HalColorResult};
