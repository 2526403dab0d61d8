//! # CSV 扫描文件解析器
//!
//! 解析两列 CSV 格式的扫描数据，兼容 `;` 与 `,` 分隔符。
//! 首行若无法解析为数值则按表头跳过（例如 `2theta;Intensity`）。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/scan.rs`
//! - 使用 `csv` 库读取

use crate::error::{PeakmarkError, Result};
use crate::models::Scan;
use std::fs;
use std::path::Path;

/// 解析 .csv 文件
pub fn parse_csv_file(path: &Path) -> Result<Scan> {
    let content = fs::read_to_string(path).map_err(|e| PeakmarkError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_csv_content(&content, &super::scan_name_from_path(path), path)
}

/// 从字符串内容解析 CSV 格式
pub fn parse_csv_content(content: &str, name: &str, path: &Path) -> Result<Scan> {
    let delimiter = detect_delimiter(content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut two_theta = Vec::new();
    let mut intensity = Vec::new();

    for (recno, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            return Err(PeakmarkError::ParseError {
                path: path.display().to_string(),
                line: recno + 1,
                reason: format!("expected two columns, found {}", record.len()),
            });
        }

        let x = record[0].parse::<f64>();
        let y = record[1].parse::<f64>();

        match (x, y) {
            (Ok(x), Ok(y)) => {
                two_theta.push(x);
                intensity.push(y);
            }
            // 首条记录允许为表头
            _ if recno == 0 => continue,
            _ => {
                return Err(PeakmarkError::ParseError {
                    path: path.display().to_string(),
                    line: recno + 1,
                    reason: format!("invalid numeric pair '{}' / '{}'", &record[0], &record[1]),
                });
            }
        }
    }

    Scan::new(name, two_theta, intensity)
}

/// 探测分隔符：首个非空行含 `;` 则用 `;`，否则用 `,`
fn detect_delimiter(content: &str) -> u8 {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        return if line.contains(';') { b';' } else { b',' };
    }
    b','
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Scan> {
        parse_csv_content(content, "test", &PathBuf::from("test.csv"))
    }

    #[test]
    fn test_parse_csv_semicolon_with_header() {
        let content = "2theta;Intensity\n10.0;120.5\n10.5;98.0\n";
        let scan = parse(content).unwrap();

        assert_eq!(scan.len(), 2);
        assert!((scan.intensity[0] - 120.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_csv_comma_no_header() {
        let content = "10.0,1.0\n10.5,2.0\n11.0,3.0\n";
        let scan = parse(content).unwrap();
        assert_eq!(scan.len(), 3);
    }

    #[test]
    fn test_parse_csv_bad_record() {
        let content = "10.0,1.0\nbroken,row\n";
        let result = parse(content);
        assert!(matches!(result, Err(PeakmarkError::ParseError { .. })));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b\n"), b';');
        assert_eq!(detect_delimiter("a,b\n"), b',');
        assert_eq!(detect_delimiter("\n\n1,2\n"), b',');
    }
}
