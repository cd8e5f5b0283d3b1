//! 图形 HAL 色彩常量.
//!
//! 对标 Android `graphics-base` v1.0 中的 `android_dataspace_t` 与
//! `android_color_mode_t`. 数值属于外部契约, 必须与 HAL 头文件保持一致.
//!
//! Dataspace 位布局:
//! ```text
//! ┌──────────┬───────────┬──────────────┬─────────────────┬──────────────────┐
//! │ 31..30   │ range(3)  │ transfer(5)  │ standard(6)     │ legacy(16)       │
//! │ 保留     │ 29..27    │ 26..22       │ 21..16          │ 15..0            │
//! └──────────┴───────────┴──────────────┴─────────────────┴──────────────────┘
//! ```

// ========================
// 位域偏移与掩码
// ========================

pub const HAL_DATASPACE_STANDARD_SHIFT: u32 = 16;
pub const HAL_DATASPACE_TRANSFER_SHIFT: u32 = 22;
pub const HAL_DATASPACE_RANGE_SHIFT: u32 = 27;

/// standard 字段掩码 (6 位)
pub const HAL_DATASPACE_STANDARD_MASK: u32 = 63 << HAL_DATASPACE_STANDARD_SHIFT;
/// transfer 字段掩码 (5 位)
pub const HAL_DATASPACE_TRANSFER_MASK: u32 = 31 << HAL_DATASPACE_TRANSFER_SHIFT;
/// range 字段掩码 (3 位)
pub const HAL_DATASPACE_RANGE_MASK: u32 = 7 << HAL_DATASPACE_RANGE_SHIFT;
/// 旧版 dataspace 所在的低 16 位
pub const HAL_DATASPACE_LEGACY_MASK: u32 = 0xffff;

// ========================
// Standard (原色 + 矩阵系数)
// ========================

pub const HAL_DATASPACE_STANDARD_UNSPECIFIED: u32 = 0;
pub const HAL_DATASPACE_STANDARD_BT709: u32 = 1 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_BT601_625: u32 = 2 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_BT601_625_UNADJUSTED: u32 = 3 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_BT601_525: u32 = 4 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_BT601_525_UNADJUSTED: u32 = 5 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_BT2020: u32 = 6 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_BT2020_CONSTANT_LUMINANCE: u32 =
    7 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_BT470M: u32 = 8 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_FILM: u32 = 9 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_DCI_P3: u32 = 10 << HAL_DATASPACE_STANDARD_SHIFT;
pub const HAL_DATASPACE_STANDARD_ADOBE_RGB: u32 = 11 << HAL_DATASPACE_STANDARD_SHIFT;

// ========================
// Transfer (伽马 / EOTF)
// ========================

pub const HAL_DATASPACE_TRANSFER_UNSPECIFIED: u32 = 0;
pub const HAL_DATASPACE_TRANSFER_LINEAR: u32 = 1 << HAL_DATASPACE_TRANSFER_SHIFT;
pub const HAL_DATASPACE_TRANSFER_SRGB: u32 = 2 << HAL_DATASPACE_TRANSFER_SHIFT;
pub const HAL_DATASPACE_TRANSFER_SMPTE_170M: u32 = 3 << HAL_DATASPACE_TRANSFER_SHIFT;
pub const HAL_DATASPACE_TRANSFER_GAMMA2_2: u32 = 4 << HAL_DATASPACE_TRANSFER_SHIFT;
pub const HAL_DATASPACE_TRANSFER_GAMMA2_6: u32 = 5 << HAL_DATASPACE_TRANSFER_SHIFT;
pub const HAL_DATASPACE_TRANSFER_GAMMA2_8: u32 = 6 << HAL_DATASPACE_TRANSFER_SHIFT;
pub const HAL_DATASPACE_TRANSFER_ST2084: u32 = 7 << HAL_DATASPACE_TRANSFER_SHIFT;
pub const HAL_DATASPACE_TRANSFER_HLG: u32 = 8 << HAL_DATASPACE_TRANSFER_SHIFT;

// ========================
// Range
// ========================

pub const HAL_DATASPACE_RANGE_UNSPECIFIED: u32 = 0;
pub const HAL_DATASPACE_RANGE_FULL: u32 = 1 << HAL_DATASPACE_RANGE_SHIFT;
pub const HAL_DATASPACE_RANGE_LIMITED: u32 = 2 << HAL_DATASPACE_RANGE_SHIFT;
pub const HAL_DATASPACE_RANGE_EXTENDED: u32 = 3 << HAL_DATASPACE_RANGE_SHIFT;

// ========================
// 旧版 (已废弃) dataspace, 只占低 16 位
// ========================

pub const HAL_DATASPACE_UNKNOWN: u32 = 0x0000;
pub const HAL_DATASPACE_ARBITRARY: u32 = 0x0001;
pub const HAL_DATASPACE_JFIF: u32 = 0x0101;
pub const HAL_DATASPACE_BT601_625: u32 = 0x0102;
pub const HAL_DATASPACE_BT601_525: u32 = 0x0103;
pub const HAL_DATASPACE_BT709: u32 = 0x0104;
pub const HAL_DATASPACE_SRGB_LINEAR: u32 = 0x0200;
pub const HAL_DATASPACE_SRGB: u32 = 0x0201;

// ========================
// 新版组合 dataspace (V0_*)
// ========================

/// sRGB 线性, 全范围 (`SRGB_LINEAR` 的位域写法)
pub const HAL_DATASPACE_V0_SRGB_LINEAR: u32 =
    HAL_DATASPACE_STANDARD_BT709 | HAL_DATASPACE_TRANSFER_LINEAR | HAL_DATASPACE_RANGE_FULL;
/// sRGB, 全范围
pub const HAL_DATASPACE_V0_SRGB: u32 =
    HAL_DATASPACE_STANDARD_BT709 | HAL_DATASPACE_TRANSFER_SRGB | HAL_DATASPACE_RANGE_FULL;
/// JFIF: BT601_625, SMPTE_170M, 全范围
pub const HAL_DATASPACE_V0_JFIF: u32 = HAL_DATASPACE_STANDARD_BT601_625
    | HAL_DATASPACE_TRANSFER_SMPTE_170M
    | HAL_DATASPACE_RANGE_FULL;
pub const HAL_DATASPACE_V0_BT601_625: u32 = HAL_DATASPACE_STANDARD_BT601_625
    | HAL_DATASPACE_TRANSFER_SMPTE_170M
    | HAL_DATASPACE_RANGE_LIMITED;
pub const HAL_DATASPACE_V0_BT601_525: u32 = HAL_DATASPACE_STANDARD_BT601_525
    | HAL_DATASPACE_TRANSFER_SMPTE_170M
    | HAL_DATASPACE_RANGE_LIMITED;
pub const HAL_DATASPACE_V0_BT709: u32 = HAL_DATASPACE_STANDARD_BT709
    | HAL_DATASPACE_TRANSFER_SMPTE_170M
    | HAL_DATASPACE_RANGE_LIMITED;
pub const HAL_DATASPACE_DISPLAY_P3: u32 = HAL_DATASPACE_STANDARD_DCI_P3
    | HAL_DATASPACE_TRANSFER_SRGB
    | HAL_DATASPACE_RANGE_FULL;

// ========================
// 色彩模式
// ========================

pub const HAL_COLOR_MODE_NATIVE: i32 = 0;
pub const HAL_COLOR_MODE_STANDARD_BT601_625: i32 = 1;
pub const HAL_COLOR_MODE_STANDARD_BT601_625_UNADJUSTED: i32 = 2;
pub const HAL_COLOR_MODE_STANDARD_BT601_525: i32 = 3;
pub const HAL_COLOR_MODE_STANDARD_BT601_525_UNADJUSTED: i32 = 4;
pub const HAL_COLOR_MODE_STANDARD_BT709: i32 = 5;
pub const HAL_COLOR_MODE_DCI_P3: i32 = 6;
pub const HAL_COLOR_MODE_SRGB: i32 = 7;
pub const HAL_COLOR_MODE_ADOBE_RGB: i32 = 8;
pub const HAL_COLOR_MODE_DISPLAY_P3: i32 = 9;
