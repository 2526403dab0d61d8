//! # 工具模块
//!
//! 提供通用工具函数。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output

pub mod output;
