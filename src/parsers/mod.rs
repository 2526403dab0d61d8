//! # 解析器模块
//!
//! 提供各种扫描数据文件格式的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xy, csv_scan

pub mod csv_scan;
pub mod xy;

use crate::error::{PeakmarkError, Result};
use crate::models::Scan;
use std::path::Path;

/// 从文件路径推断格式并解析
pub fn parse_scan_file(path: &Path) -> Result<Scan> {
    if !path.is_file() {
        return Err(PeakmarkError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xy" | "dat" | "txt" => xy::parse_xy_file(path),
        "csv" => csv_scan::parse_csv_file(path),
        _ => Err(PeakmarkError::UnsupportedFormat(format!(
            "Cannot determine format for: {} (expected .xy, .dat, .txt or .csv)",
            path.display()
        ))),
    }
}

/// 从路径提取扫描名称（文件名主干）
pub fn scan_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scan")
        .to_string()
}
