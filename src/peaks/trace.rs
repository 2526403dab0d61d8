//! # 工作迹线（掩膜引擎）
//!
//! 检测过程使用的强度工作副本。低于噪声阈值或已归属某峰的样本被掩膜，
//! 掩膜用 `Option<f64>` 的 `None` 表示，避免 NaN 哨兵值的浮点比较陷阱。
//! 掩膜单调：一旦掩膜，永不恢复。
//!
//! ## 依赖关系
//! - 被 `peaks/detector.rs` 与 `peaks/boundary.rs` 使用
//! - 无外部模块依赖

use std::ops::Range;

/// 强度工作迹线，`None` 为掩膜哨兵
#[derive(Debug, Clone)]
pub struct Trace {
    samples: Vec<Option<f64>>,
}

impl Trace {
    /// 从强度序列创建，初始全部未掩膜
    pub fn from_intensities(intensity: &[f64]) -> Self {
        Trace {
            samples: intensity.iter().map(|&y| Some(y)).collect(),
        }
    }

    /// 样本数量
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 读取样本值，掩膜或越界返回 `None`
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied().flatten()
    }

    /// 样本是否已掩膜（越界视为掩膜）
    #[inline]
    pub fn is_masked(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// 掩膜所有低于 `cutoff` 的样本（检测前调用一次，cutoff = 噪声阈值 × 均值）
    pub fn mask_below(&mut self, cutoff: f64) {
        for sample in &mut self.samples {
            if matches!(sample, Some(y) if *y < cutoff) {
                *sample = None;
            }
        }
    }

    /// 掩膜一段区间（某峰的归属范围，右端开）
    pub fn mask_range(&mut self, range: Range<usize>) {
        let end = range.end.min(self.samples.len());
        for sample in &mut self.samples[range.start..end] {
            *sample = None;
        }
    }

    /// 自 `upto - 1` 向下扫描的连续未掩膜游程长度。
    /// `upto` 为 0、越界、或紧邻样本已掩膜时返回 0；
    /// 下方不存在掩膜样本时返回整个前缀长度。
    pub fn backward_run(&self, upto: usize) -> usize {
        if upto == 0 || upto > self.samples.len() {
            return 0;
        }

        let mut count = 0;
        for j in (0..upto).rev() {
            if self.is_masked(j) {
                break;
            }
            count += 1;
        }
        count
    }

    /// 自 `from` 向上扫描的连续未掩膜游程长度。
    /// `from` 越界或自身已掩膜时返回 0；可一直延伸到迹线末尾。
    pub fn forward_run(&self, from: usize) -> usize {
        let mut count = 0;
        for j in from..self.samples.len() {
            if self.is_masked(j) {
                break;
            }
            count += 1;
        }
        count
    }

    /// 区间内未掩膜样本的最大值
    pub fn max_over(&self, range: Range<usize>) -> Option<f64> {
        let end = range.end.min(self.samples.len());
        self.samples[range.start..end]
            .iter()
            .filter_map(|s| *s)
            .fold(None, |acc, y| match acc {
                Some(m) if m >= y => Some(m),
                _ => Some(y),
            })
    }

    /// 区间内未掩膜样本的平均值
    pub fn mean_over(&self, range: Range<usize>) -> Option<f64> {
        let end = range.end.min(self.samples.len());
        let values: Vec<f64> = self.samples[range.start..end]
            .iter()
            .filter_map(|s| *s)
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// 区间内未掩膜样本最小值的位置（绝对索引，取第一个达到最小值者）
    pub fn min_position(&self, range: Range<usize>) -> Option<usize> {
        let end = range.end.min(self.samples.len());
        let mut best: Option<(usize, f64)> = None;

        for j in range.start..end {
            if let Some(y) = self.get(j) {
                match best {
                    Some((_, m)) if m <= y => {}
                    _ => best = Some((j, y)),
                }
            }
        }

        best.map(|(j, _)| j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_from(values: &[Option<f64>]) -> Trace {
        let mut t = Trace::from_intensities(&vec![0.0; values.len()]);
        t.samples = values.to_vec();
        t
    }

    #[test]
    fn test_mask_below() {
        let mut t = Trace::from_intensities(&[1.0, 5.0, 0.5, 3.0]);
        t.mask_below(2.0);

        assert!(t.is_masked(0));
        assert_eq!(t.get(1), Some(5.0));
        assert!(t.is_masked(2));
        assert_eq!(t.get(3), Some(3.0));
    }

    #[test]
    fn test_mask_range_is_monotonic() {
        let mut t = Trace::from_intensities(&[1.0, 2.0, 3.0, 4.0]);
        t.mask_range(1..3);
        assert!(t.is_masked(1));
        assert!(t.is_masked(2));

        // 重复掩膜与越界端点均无害
        t.mask_range(2..10);
        assert!(t.is_masked(3));
        assert_eq!(t.get(0), Some(1.0));
    }

    #[test]
    fn test_backward_run_stops_at_mask() {
        let t = trace_from(&[None, Some(2.0), Some(3.0), Some(4.0)]);
        // 自索引 3 向下：2, 1 未掩膜，0 已掩膜
        assert_eq!(t.backward_run(3), 2);
    }

    #[test]
    fn test_backward_run_adjacent_masked() {
        let t = trace_from(&[Some(1.0), None, Some(3.0)]);
        // 紧邻样本（索引 1）已掩膜
        assert_eq!(t.backward_run(2), 0);
        assert_eq!(t.backward_run(0), 0);
    }

    #[test]
    fn test_backward_run_full_prefix() {
        let t = trace_from(&[Some(1.0), Some(2.0), Some(3.0)]);
        // 下方无掩膜样本：返回整个前缀
        assert_eq!(t.backward_run(3), 3);
        assert_eq!(t.backward_run(2), 2);
    }

    #[test]
    fn test_forward_run() {
        let t = trace_from(&[Some(1.0), Some(2.0), None, Some(4.0)]);
        assert_eq!(t.forward_run(0), 2);
        assert_eq!(t.forward_run(2), 0);
        assert_eq!(t.forward_run(3), 1);
        assert_eq!(t.forward_run(4), 0);
    }

    #[test]
    fn test_max_over_skips_masked() {
        let t = trace_from(&[Some(1.0), None, Some(9.0), Some(2.0)]);
        assert_eq!(t.max_over(0..4), Some(9.0));
        assert_eq!(t.max_over(1..2), None);
    }

    #[test]
    fn test_mean_over_skips_masked() {
        let t = trace_from(&[Some(2.0), None, Some(4.0)]);
        assert_eq!(t.mean_over(0..3), Some(3.0));
        assert_eq!(t.mean_over(1..2), None);
    }

    #[test]
    fn test_min_position_first_of_ties() {
        let t = trace_from(&[Some(5.0), Some(1.0), None, Some(1.0), Some(3.0)]);
        assert_eq!(t.min_position(0..5), Some(1));
        assert_eq!(t.min_position(2..3), None);
    }
}
