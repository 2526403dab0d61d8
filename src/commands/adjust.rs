//! # adjust 子命令实现
//!
//! 峰检测后进入交互式峰位微调循环：
//! - ↑/↓ 选择标记
//! - ←/→ 将选中标记按峰顶处的采样栅格间距步进一格
//! - `s` 保存调整后的峰位为 CSV
//! - `q`/Esc 退出
//!
//! 步进越界（峰顶为最后样本）按 no-op 恢复并提示，不中断循环。
//!
//! ## 依赖关系
//! - 使用 `cli/adjust.rs` 定义的 AdjustArgs
//! - 复用 `commands/detect.rs` 的加载与检测逻辑
//! - 使用 `console` 读取按键

use crate::cli::adjust::AdjustArgs;
use crate::error::{PeakmarkError, Result};
use crate::peaks::{export, StepDirection};
use crate::utils::output;

use console::{Key, Term};

/// 执行交互式峰位微调
pub fn execute(args: AdjustArgs) -> Result<()> {
    output::print_header("Interactive Peak Adjustment");

    let term = Term::stdout();
    if !term.is_term() {
        return Err(PeakmarkError::InvalidArgument(
            "adjust requires an interactive terminal (stdout is not a TTY)".to_string(),
        ));
    }

    let config = super::detect::build_config(
        args.noise_threshold,
        args.peak_magnitude,
        args.window_size,
        args.overlap_threshold,
    );
    let (scan, mut detection) = super::detect::load_and_detect(&args.input, config)?;

    if detection.peaks.is_empty() {
        output::print_warning("No peaks detected, nothing to adjust");
        return Ok(());
    }

    super::detect::print_peak_table(&scan, &detection);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("peaks.csv"));

    output::print_key_hints();

    let mut selected = 0usize;
    let marker = &detection.markers[selected];
    output::print_marker_position(marker.label(), marker.two_theta());

    loop {
        let key = term
            .read_key()
            .map_err(|e| PeakmarkError::Other(format!("Failed to read key: {}", e)))?;

        match key {
            Key::ArrowUp => {
                selected = selected.saturating_sub(1);
                let marker = &detection.markers[selected];
                output::print_marker_position(marker.label(), marker.two_theta());
            }
            Key::ArrowDown => {
                if selected + 1 < detection.markers.len() {
                    selected += 1;
                }
                let marker = &detection.markers[selected];
                output::print_marker_position(marker.label(), marker.two_theta());
            }
            Key::ArrowLeft => step_selected(&mut detection.markers[selected], StepDirection::Left),
            Key::ArrowRight => {
                step_selected(&mut detection.markers[selected], StepDirection::Right)
            }
            Key::Char('s') => {
                export::to_csv(&scan, &detection.peaks, &detection.markers, &output_path)?;
                output::print_success(&format!(
                    "Adjusted positions saved to '{}'",
                    output_path.display()
                ));
            }
            Key::Char('q') | Key::Escape => break,
            _ => {}
        }
    }

    output::print_separator();
    output::print_success("Done");
    Ok(())
}

/// 步进选中的标记，越界按 no-op 恢复
fn step_selected(marker: &mut crate::peaks::PeakMarker, direction: StepDirection) {
    match marker.step(direction) {
        Ok(two_theta) => output::print_marker_position(marker.label(), two_theta),
        Err(e) => output::print_warning(&e.to_string()),
    }
}
