//! # detect 子命令实现
//!
//! 加载扫描文件，运行峰检测，打印峰位表格，可选输出图像或数据文件。
//!
//! ## 功能
//! - 支持 .xy/.dat/.txt/.csv 输入
//! - 终端峰位表格（tabled）
//! - 输出 PNG/SVG 图像或 CSV/XY 数据
//!
//! ## 依赖关系
//! - 使用 `cli/detect.rs` 定义的 DetectArgs
//! - 使用 `parsers/` 读取扫描
//! - 使用 `peaks/` 模块进行检测、绘图与导出

use crate::cli::detect::{DetectArgs, ScanOutputFormat};
use crate::error::Result;
use crate::models::Scan;
use crate::parsers;
use crate::peaks::{export, plot, BoundaryKind, Detection, DetectorConfig, PeakDetector};
use crate::utils::output;

use std::path::Path;

/// 执行峰检测
pub fn execute(args: DetectArgs) -> Result<()> {
    output::print_header("XRD Scan Peak Detection");

    let config = build_config(
        args.noise_threshold,
        args.peak_magnitude,
        args.window_size,
        args.overlap_threshold,
    );
    let (scan, detection) = load_and_detect(&args.input, config)?;

    print_peak_table(&scan, &detection);

    if let Some(ref output_path) = args.output {
        let format = args
            .format
            .unwrap_or_else(|| guess_format_from_extension(output_path));

        match format {
            ScanOutputFormat::Png | ScanOutputFormat::Svg => {
                let title = args.title.clone().unwrap_or_else(|| scan.name.clone());
                plot::generate_scan_plot(
                    &scan,
                    &detection.markers,
                    output_path,
                    &title,
                    args.width,
                    args.height,
                    format == ScanOutputFormat::Svg,
                )?;
            }
            ScanOutputFormat::Csv => {
                export::to_csv(&scan, &detection.peaks, &detection.markers, output_path)?;
            }
            ScanOutputFormat::Xy => {
                export::to_xy(&scan, &detection.peaks, &detection.markers, output_path)?;
            }
        }

        output::print_success(&format!("Saved to '{}'", output_path.display()));
    }

    Ok(())
}

/// 由命令行参数构造检测配置
pub(crate) fn build_config(
    noise_threshold: f64,
    peak_magnitude: f64,
    window_size: usize,
    overlap_threshold: f64,
) -> DetectorConfig {
    DetectorConfig {
        noise_threshold,
        peak_id_magnitude: peak_magnitude,
        window_size,
        overlap_threshold,
    }
}

/// 加载扫描并执行检测（detect 与 adjust 共用）
pub(crate) fn load_and_detect(input: &Path, config: DetectorConfig) -> Result<(Scan, Detection)> {
    let scan = parsers::parse_scan_file(input)?;
    output::print_success(&format!(
        "Loaded scan: {} ({} points)",
        scan.name,
        scan.len()
    ));

    let detector = PeakDetector::new(config)?;
    let cfg = detector.config();
    output::print_info(&format!(
        "Settings: noise threshold: {}, peak magnitude: {}, window size: {}, overlap threshold: {}",
        cfg.noise_threshold, cfg.peak_id_magnitude, cfg.window_size, cfg.overlap_threshold
    ));

    let detection = detector.detect(&scan)?;
    output::print_info(&format!(
        "Mean intensity: {:.2}",
        detection.mean_intensity
    ));

    for peak in &detection.peaks {
        if peak.kind == BoundaryKind::Overlapping {
            output::print_warning(&format!(
                "Overlapping peak at 2θ = {:.2}° (shared valley boundary)",
                peak.two_theta
            ));
        }
    }
    output::print_success(&format!("Detected {} peaks", detection.peaks.len()));

    Ok((scan, detection))
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ScanOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => ScanOutputFormat::Svg,
        Some("csv") => ScanOutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => ScanOutputFormat::Xy,
        _ => ScanOutputFormat::Png,
    }
}

/// 打印峰位表格
pub(crate) fn print_peak_table(scan: &Scan, detection: &Detection) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct PeakRow {
        #[tabled(rename = "Peak #")]
        label: String,
        #[tabled(rename = "2θ (°)")]
        two_theta: String,
        #[tabled(rename = "Range (°)")]
        range: String,
        #[tabled(rename = "I apex")]
        intensity: String,
        #[tabled(rename = "Boundary")]
        boundary: String,
    }

    if detection.peaks.is_empty() {
        output::print_warning("No peaks detected");
        return;
    }

    let rows: Vec<PeakRow> = detection
        .peaks
        .iter()
        .zip(&detection.markers)
        .map(|(p, m)| PeakRow {
            label: p.label.to_string(),
            two_theta: format!("{:.4}", m.two_theta()),
            range: format!(
                "{:.2} -- {:.2}",
                scan.two_theta[p.left_index], scan.two_theta[p.right_index]
            ),
            intensity: format!("{:.1}", p.apex_intensity),
            boundary: p.kind.to_string(),
        })
        .collect();

    output::print_header(&format!("{} Peaks", rows.len()));
    let table = Table::new(&rows);
    println!("{}", table);
}
