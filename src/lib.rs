//! # halcolor
//!
//! 图形 HAL 色彩元数据的调试解码.
//!
//! 把打包的 dataspace 和色彩模式编号转换为日志用的可读描述:
//! - **dataspace**: standard (原色/矩阵) + transfer (伽马/EOTF) + range 三个位域
//! - **旧版 dataspace**: standard 为 0 时按低 16 位识别的废弃编码
//! - **色彩模式**: 显示管线的平铺枚举
//!
//! # 快速开始
//!
//! ```rust
//! use halcolor::core::hal::HAL_DATASPACE_V0_SRGB;
//! use halcolor::core::{Dataspace, dataspace_details};
//!
//! let ds = Dataspace(HAL_DATASPACE_V0_SRGB);
//! println!("dataspace: {ds}");
//! assert_eq!(dataspace_details(HAL_DATASPACE_V0_SRGB), "BT709 sRGB Full range");
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `halcolor-core` | 常量、位域类型、解码与文本解析 |
//! | `halcolor-probe` | 命令行探测工具 |

/// 核心类型与解码函数
pub use halcolor_core as core;

pub use halcolor_core::{
    dataspace_details, decode_color_mode, decode_range, decode_standard, decode_transfer,
};

/// 获取 halcolor 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
