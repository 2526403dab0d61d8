//! # 扫描图表生成
//!
//! 使用 `plotters` 库绘制扫描曲线与峰位标记线。
//!
//! ## 功能
//! - 扫描强度曲线
//! - 每峰一条纵贯绘图区的灰色标记线（取标记当前显示位置）
//! - 标记线顶端标注峰序号
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/detect.rs` 调用
//! - 使用 `models/scan.rs`, `peaks/marker.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{PeakmarkError, Result};
use crate::models::Scan;
use crate::peaks::marker::PeakMarker;

use plotters::prelude::*;
use std::path::Path;

/// 生成扫描图表
pub fn generate_scan_plot(
    scan: &Scan,
    markers: &[PeakMarker],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scan_chart(&root, scan, markers, title)?;
        root.present()
            .map_err(|e| PeakmarkError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scan_chart(&root, scan, markers, title)?;
        root.present()
            .map_err(|e| PeakmarkError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表核心逻辑
fn draw_scan_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    scan: &Scan,
    markers: &[PeakMarker],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| PeakmarkError::Other(format!("{:?}", e)))?;

    let (x_min, x_max) = scan.two_theta_range();
    let (y_min, y_max) = scan.intensity_range();
    let y_pad = (y_max - y_min).max(1.0) * 0.05;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (y_min - y_pad)..(y_max + 3.0 * y_pad))
        .map_err(|e| PeakmarkError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("2θ (°)")
        .y_desc("Intensity (counts)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PeakmarkError::Other(format!("{:?}", e)))?;

    // 扫描曲线
    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            scan.two_theta
                .iter()
                .zip(&scan.intensity)
                .map(|(x, y)| (*x, *y)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| PeakmarkError::Other(format!("{:?}", e)))?;

    // 峰位标记线与序号标注
    let marker_color = RGBColor(128, 128, 128);
    for marker in markers {
        let x = marker.two_theta();

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, y_min), (x, y_max)],
                marker_color.stroke_width(1),
            )))
            .map_err(|e| PeakmarkError::Other(format!("{:?}", e)))?;

        chart
            .draw_series(std::iter::once(Text::new(
                marker.label().to_string(),
                (x, y_max + y_pad),
                ("sans-serif", 14).into_font().color(&RED),
            )))
            .map_err(|e| PeakmarkError::Other(format!("{:?}", e)))?;
    }

    Ok(())
}
