//! # .xy 格式解析器
//!
//! 解析衍射仪导出的两列空白分隔文本格式。
//!
//! ## .xy 格式说明
//! ```text
//! # 可选注释行
//! 2theta_1  intensity_1
//! 2theta_2  intensity_2
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/scan.rs`

use crate::error::{PeakmarkError, Result};
use crate::models::Scan;
use std::fs;
use std::path::Path;

/// 解析 .xy 文件
pub fn parse_xy_file(path: &Path) -> Result<Scan> {
    let content = fs::read_to_string(path).map_err(|e| PeakmarkError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xy_content(&content, &super::scan_name_from_path(path), path)
}

/// 从字符串内容解析 .xy 格式
pub fn parse_xy_content(content: &str, name: &str, path: &Path) -> Result<Scan> {
    let mut two_theta = Vec::new();
    let mut intensity = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        // 空行与注释行跳过
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(PeakmarkError::ParseError {
                path: path.display().to_string(),
                line: lineno + 1,
                reason: format!("expected two columns, found {}", parts.len()),
            });
        }

        let x: f64 = parts[0].parse().map_err(|_| PeakmarkError::ParseError {
            path: path.display().to_string(),
            line: lineno + 1,
            reason: format!("invalid 2theta value '{}'", parts[0]),
        })?;
        let y: f64 = parts[1].parse().map_err(|_| PeakmarkError::ParseError {
            path: path.display().to_string(),
            line: lineno + 1,
            reason: format!("invalid intensity value '{}'", parts[1]),
        })?;

        two_theta.push(x);
        intensity.push(y);
    }

    Scan::new(name, two_theta, intensity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Scan> {
        parse_xy_content(content, "test", &PathBuf::from("test.xy"))
    }

    #[test]
    fn test_parse_xy_basic() {
        let content = "10.00 120.5\n10.02 118.0\n10.04 560.2\n";
        let scan = parse(content).unwrap();

        assert_eq!(scan.len(), 3);
        assert!((scan.two_theta[0] - 10.00).abs() < 1e-9);
        assert!((scan.intensity[2] - 560.2).abs() < 1e-9);
    }

    #[test]
    fn test_parse_xy_comments_and_blanks() {
        let content = "# measured on beamline 3\n\n10.0 1.0\n// inline comment style\n10.5 2.0\n";
        let scan = parse(content).unwrap();
        assert_eq!(scan.len(), 2);
    }

    #[test]
    fn test_parse_xy_scientific_notation() {
        let content = "1.0e1 1.2e2\n1.05e1 9.8E1\n";
        let scan = parse(content).unwrap();
        assert!((scan.two_theta[0] - 10.0).abs() < 1e-9);
        assert!((scan.intensity[1] - 98.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_xy_extra_columns_ignored() {
        // 某些仪器会输出第三列（误差），只取前两列
        let content = "10.0 1.0 0.1\n10.5 2.0 0.2\n";
        let scan = parse(content).unwrap();
        assert_eq!(scan.len(), 2);
    }

    #[test]
    fn test_parse_xy_malformed_line() {
        let content = "10.0 1.0\nnot-a-number 2.0\n";
        let result = parse(content);
        assert!(matches!(result, Err(PeakmarkError::ParseError { line: 2, .. })));
    }

    #[test]
    fn test_parse_xy_single_column() {
        let content = "10.0\n";
        let result = parse(content);
        assert!(matches!(result, Err(PeakmarkError::ParseError { .. })));
    }
}
