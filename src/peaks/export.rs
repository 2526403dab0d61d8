//! # 峰位数据导出
//!
//! 导出峰位列表到 CSV 和 XY 格式。位置列取标记的当前显示位置，
//! 因此交互调整后的保存结果反映用户的微调。
//!
//! ## 支持格式
//! - CSV: peak, 2theta, range_start, range_end, apex_intensity, boundary
//! - XY: 两列文本（2θ, 峰顶强度），带 `#` 注释头
//!
//! ## 依赖关系
//! - 被 `commands/detect.rs`, `commands/adjust.rs` 调用
//! - 使用 `peaks/detector.rs` 的 Peak, `peaks/marker.rs` 的 PeakMarker
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{PeakmarkError, Result};
use crate::models::Scan;
use crate::peaks::detector::Peak;
use crate::peaks::marker::PeakMarker;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 导出峰位为 CSV 格式
pub fn to_csv(
    scan: &Scan,
    peaks: &[Peak],
    markers: &[PeakMarker],
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(PeakmarkError::CsvError)?;

    wtr.write_record([
        "peak",
        "2theta",
        "range_start",
        "range_end",
        "apex_intensity",
        "boundary",
    ])
    .map_err(PeakmarkError::CsvError)?;

    for (peak, marker) in peaks.iter().zip(markers) {
        wtr.write_record([
            peak.label.to_string(),
            format!("{:.4}", marker.two_theta()),
            format!("{:.4}", scan.two_theta[peak.left_index]),
            format!("{:.4}", scan.two_theta[peak.right_index]),
            format!("{:.2}", peak.apex_intensity),
            peak.kind.to_string(),
        ])
        .map_err(PeakmarkError::CsvError)?;
    }

    wtr.flush().map_err(|e| PeakmarkError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出峰位为 XY 格式
pub fn to_xy(
    scan: &Scan,
    peaks: &[Peak],
    markers: &[PeakMarker],
    output_path: &Path,
) -> Result<()> {
    let write_err = |e: std::io::Error| PeakmarkError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let mut file = File::create(output_path).map_err(write_err)?;

    writeln!(file, "# Peak positions: {}", scan.name).map_err(write_err)?;
    writeln!(file, "# Columns: 2theta (degrees), Apex intensity (counts)").map_err(write_err)?;
    writeln!(file, "#").map_err(write_err)?;

    for (peak, marker) in peaks.iter().zip(markers) {
        writeln!(file, "{:.4}\t{:.2}", marker.two_theta(), peak.apex_intensity)
            .map_err(write_err)?;
    }

    Ok(())
}
