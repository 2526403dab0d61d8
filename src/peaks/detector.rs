//! # 峰检测器
//!
//! 对掩膜后的工作迹线做单趟扫描，识别滑动窗口内超过幅值阈值的局部极大，
//! 并对每个峰顶调用边界求解，生成有序的峰注册表与平行的标记列表。
//!
//! ## 算法概述
//! 1. 计算强度均值，掩膜低于噪声阈值的样本
//! 2. 自左向右扫描峰顶候选（末尾 window_size 个样本除外）
//! 3. 左游程为空的候选视为上一峰的非对称肩部，掩膜后跳过
//! 4. 求解边界，登记峰并掩膜其归属范围，防止重复检测
//!
//! 检测是确定性的单趟过程：同一扫描与同一配置两次运行产生相同结果。
//!
//! ## 依赖关系
//! - 被 `commands/detect.rs`, `commands/adjust.rs` 调用
//! - 使用 `models/scan.rs`, `peaks/trace.rs`, `peaks/boundary.rs`, `peaks/marker.rs`

use crate::error::{PeakmarkError, Result};
use crate::models::Scan;
use crate::peaks::boundary::{self, BoundaryKind};
use crate::peaks::marker::PeakMarker;
use crate::peaks::trace::Trace;

use serde::Serialize;

/// 检测配置
#[derive(Debug, Clone, Serialize)]
pub struct DetectorConfig {
    /// 噪声阈值：均值的倍数，低于 noise_threshold × mean 的样本视为噪声
    pub noise_threshold: f64,

    /// 峰判据幅值：峰顶必须超过 peak_id_magnitude × mean
    pub peak_id_magnitude: f64,

    /// 局部极大判定的滑动窗口长度（样本数）
    pub window_size: usize,

    /// 平顶/重叠判据：前瞻区间平均与峰顶之比高于该值时视为同一宽峰
    pub overlap_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            noise_threshold: 1.0,
            peak_id_magnitude: 1.7,
            window_size: 7,
            overlap_threshold: 0.65,
        }
    }
}

impl DetectorConfig {
    /// 校验配置，任何非正值返回 `InvalidConfig`
    pub fn validate(&self) -> Result<()> {
        if self.noise_threshold <= 0.0 {
            return Err(PeakmarkError::InvalidConfig {
                reason: format!("noise_threshold must be positive, got {}", self.noise_threshold),
            });
        }
        if self.peak_id_magnitude <= 0.0 {
            return Err(PeakmarkError::InvalidConfig {
                reason: format!(
                    "peak_id_magnitude must be positive, got {}",
                    self.peak_id_magnitude
                ),
            });
        }
        if self.window_size == 0 {
            return Err(PeakmarkError::InvalidConfig {
                reason: "window_size must be positive".to_string(),
            });
        }
        if self.overlap_threshold <= 0.0 {
            return Err(PeakmarkError::InvalidConfig {
                reason: format!(
                    "overlap_threshold must be positive, got {}",
                    self.overlap_threshold
                ),
            });
        }
        Ok(())
    }
}

/// 检出的峰。登记后不可变；标记的显示位置独立变化，不回写此记录。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peak {
    /// 序号（1 起，登记顺序）
    pub label: usize,

    /// 左边界样本索引
    pub left_index: usize,

    /// 右边界样本索引
    pub right_index: usize,

    /// 中心位置：左右边界 2θ 的中点，创建时快照
    pub two_theta: f64,

    /// 峰顶样本索引
    pub apex_index: usize,

    /// 峰顶强度
    pub apex_intensity: f64,

    /// 右边界判定策略
    pub kind: BoundaryKind,
}

/// 检测结果：有序峰注册表与平行的标记列表
#[derive(Debug, Clone)]
pub struct Detection {
    /// 检出的峰，按左边界递增排列
    pub peaks: Vec<Peak>,

    /// 每峰一个标记，初始位置为峰中心
    pub markers: Vec<PeakMarker>,

    /// 强度均值（阈值基准，供输出显示）
    pub mean_intensity: f64,
}

/// 峰检测器
pub struct PeakDetector {
    config: DetectorConfig,
}

impl PeakDetector {
    /// 创建检测器，配置校验失败返回 `InvalidConfig`
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(PeakDetector { config })
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        PeakDetector {
            config: DetectorConfig::default(),
        }
    }

    /// 检测配置
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// 对扫描执行峰检测
    pub fn detect(&self, scan: &Scan) -> Result<Detection> {
        let n = scan.len();
        let window = self.config.window_size;

        if n < window + 1 {
            return Err(PeakmarkError::InvalidSignal {
                reason: format!(
                    "scan has {} samples, window size {} requires at least {}",
                    n,
                    window,
                    window + 1
                ),
            });
        }

        let mean = scan.mean_intensity();
        let magnitude_cutoff = self.config.peak_id_magnitude * mean;

        // 检测器独占工作迹线，所有修改经由掩膜引擎
        let mut trace = Trace::from_intensities(&scan.intensity);
        trace.mask_below(self.config.noise_threshold * mean);

        let mut peaks: Vec<Peak> = Vec::new();
        let mut markers: Vec<PeakMarker> = Vec::new();

        // 末尾 window_size 个样本不作为峰顶候选
        for i in 0..n - window {
            let y = match trace.get(i) {
                Some(y) => y,
                None => continue,
            };
            if y <= magnitude_cutoff {
                continue;
            }

            // 窗口内存在更高的未掩膜样本则非峰顶；相等时首个索引当选
            let window_max = trace.max_over(i..i + window).unwrap_or(y);
            if y < window_max {
                continue;
            }

            let left_len = trace.backward_run(i);
            if left_len == 0 {
                // 左侧无独立游程：该候选是上一峰的非对称肩部。
                // 掩膜其右向游程，此区域不再访问，不产生峰。
                let run = trace.forward_run(i);
                trace.mask_range(i..i + run);
                continue;
            }

            let bounds = boundary::resolve(&trace, i, y, left_len, self.config.overlap_threshold);

            let label = peaks.len() + 1;
            let center = (scan.two_theta[bounds.left] + scan.two_theta[bounds.right]) / 2.0;

            peaks.push(Peak {
                label,
                left_index: bounds.left,
                right_index: bounds.right,
                two_theta: center,
                apex_index: i,
                apex_intensity: y,
                kind: bounds.kind,
            });
            trace.mask_range(bounds.left..bounds.right);

            markers.push(PeakMarker::new(label, i, center, &scan.two_theta));
        }

        Ok(Detection {
            peaks,
            markers,
            mean_intensity: mean,
        })
    }
}
