//! # 数据模型模块
//!
//! 定义核心数据结构。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `peaks/`, `commands/` 使用
//! - 子模块: scan

pub mod scan;

pub use scan::Scan;
