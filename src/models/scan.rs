//! # 衍射扫描数据模型
//!
//! 定义一维 XRD 扫描（2θ-强度对）的统一表示，加载后只读。
//!
//! ## 校验规则
//! - 两列长度必须一致且非空
//! - 2θ 必须严格递增
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `peaks/` 使用
//! - 无外部模块依赖

use crate::error::{PeakmarkError, Result};
use serde::Serialize;

/// 一维衍射扫描：平行的 2θ 与强度序列
#[derive(Debug, Clone, Serialize)]
pub struct Scan {
    /// 扫描名称（通常为文件名主干）
    pub name: String,

    /// 角度位置 2θ（度），严格递增
    pub two_theta: Vec<f64>,

    /// 测量强度（计数）
    pub intensity: Vec<f64>,
}

impl Scan {
    /// 创建扫描，校验失败返回 `InvalidSignal`
    pub fn new(name: impl Into<String>, two_theta: Vec<f64>, intensity: Vec<f64>) -> Result<Self> {
        if two_theta.len() != intensity.len() {
            return Err(PeakmarkError::InvalidSignal {
                reason: format!(
                    "column length mismatch: {} positions vs {} intensities",
                    two_theta.len(),
                    intensity.len()
                ),
            });
        }

        if two_theta.is_empty() {
            return Err(PeakmarkError::InvalidSignal {
                reason: "scan contains no data points".to_string(),
            });
        }

        // 2θ 严格递增检查
        for (i, pair) in two_theta.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(PeakmarkError::InvalidSignal {
                    reason: format!(
                        "2theta values must be strictly increasing (violated at index {}: {} -> {})",
                        i + 1,
                        pair[0],
                        pair[1]
                    ),
                });
            }
        }

        Ok(Scan {
            name: name.into(),
            two_theta,
            intensity,
        })
    }

    /// 数据点数量
    #[inline]
    pub fn len(&self) -> usize {
        self.two_theta.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.two_theta.is_empty()
    }

    /// 强度平均值（噪声阈值与峰判据的基准）
    pub fn mean_intensity(&self) -> f64 {
        self.intensity.iter().sum::<f64>() / self.intensity.len() as f64
    }

    /// 强度最小值与最大值（绘图纵轴范围）
    pub fn intensity_range(&self) -> (f64, f64) {
        let min = self.intensity.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .intensity
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    /// 2θ 范围
    pub fn two_theta_range(&self) -> (f64, f64) {
        (self.two_theta[0], self.two_theta[self.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_creation() {
        let scan = Scan::new("test", vec![10.0, 10.5, 11.0], vec![5.0, 8.0, 4.0]).unwrap();

        assert_eq!(scan.name, "test");
        assert_eq!(scan.len(), 3);
        assert!(!scan.is_empty());
    }

    #[test]
    fn test_scan_length_mismatch() {
        let result = Scan::new("test", vec![10.0, 10.5], vec![5.0, 8.0, 4.0]);
        assert!(matches!(
            result,
            Err(PeakmarkError::InvalidSignal { .. })
        ));
    }

    #[test]
    fn test_scan_empty() {
        let result = Scan::new("test", vec![], vec![]);
        assert!(matches!(
            result,
            Err(PeakmarkError::InvalidSignal { .. })
        ));
    }

    #[test]
    fn test_scan_non_increasing_positions() {
        let result = Scan::new("test", vec![10.0, 10.5, 10.5], vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(PeakmarkError::InvalidSignal { .. })
        ));

        let result = Scan::new("test", vec![10.0, 9.5, 11.0], vec![1.0, 2.0, 3.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mean_intensity() {
        let scan = Scan::new("test", vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 6.0]).unwrap();
        assert!((scan.mean_intensity() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_intensity_range() {
        let scan = Scan::new("test", vec![1.0, 2.0, 3.0], vec![4.0, 1.0, 9.0]).unwrap();
        let (min, max) = scan.intensity_range();
        assert_eq!(min, 1.0);
        assert_eq!(max, 9.0);
    }
}
