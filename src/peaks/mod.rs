//! # 峰检测核心模块
//!
//! 提供扫描信号的峰检测、边界求解与交互式峰位标记。
//!
//! ## 子模块
//! - `trace`: 工作迹线（掩膜引擎）
//! - `detector`: 峰检测扫描
//! - `boundary`: 峰边界求解
//! - `marker`: 交互式峰位标记
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/scan.rs`

pub mod boundary;
pub mod detector;
pub mod export;
pub mod marker;
pub mod plot;
pub mod trace;

pub use boundary::BoundaryKind;
pub use detector::{Detection, DetectorConfig, Peak, PeakDetector};
pub use marker::{PeakMarker, StepDirection};
