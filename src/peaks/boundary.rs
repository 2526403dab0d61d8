//! # 峰边界求解
//!
//! 给定峰顶索引，确定峰的左右边界。
//! 左边界由向下掩膜游程得出；右边界按三分支策略判定：
//! - **isolated**: 前瞻位置已掩膜，峰右侧与后续峰无接触
//! - **flat**: 前瞻区间未掩膜但平均强度接近峰顶，视为同一宽峰
//! - **overlapping**: 与后续峰重叠，以两峰之间的谷底为共享边界
//!
//! ## 依赖关系
//! - 被 `peaks/detector.rs` 调用
//! - 使用 `peaks/trace.rs`

use crate::peaks::trace::Trace;
use serde::Serialize;

/// 右边界判定策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoundaryKind {
    /// 孤立峰
    Isolated,
    /// 平顶宽峰
    Flat,
    /// 与后续峰重叠
    Overlapping,
}

impl std::fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryKind::Isolated => write!(f, "isolated"),
            BoundaryKind::Flat => write!(f, "flat"),
            BoundaryKind::Overlapping => write!(f, "overlapping"),
        }
    }
}

/// 求解结果：峰的索引范围与判定策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakBounds {
    pub left: usize,
    pub right: usize,
    pub kind: BoundaryKind,
}

/// 求解峰边界。
///
/// `apex` 为峰顶索引，`apex_value` 为峰顶强度，`left_len` 为峰顶左侧
/// 未掩膜游程长度（调用方保证非零），`overlap_threshold` 为平顶判据。
pub fn resolve(
    trace: &Trace,
    apex: usize,
    apex_value: f64,
    left_len: usize,
    overlap_threshold: f64,
) -> PeakBounds {
    let n = trace.len();
    let left = apex - left_len;

    // 前瞻跨度取左游程长度，越界时截断
    let x = left_len.min(n - apex - 1);

    let (right, kind) = if trace.is_masked(apex + x) {
        (apex + trace.forward_run(apex), BoundaryKind::Isolated)
    } else {
        let lookahead_mean = trace.mean_over(apex..apex + x).unwrap_or(apex_value);
        if lookahead_mean / apex_value > overlap_threshold {
            // 前瞻区间平均强度接近峰顶：整个平台归属本峰
            (apex + trace.forward_run(apex), BoundaryKind::Flat)
        } else {
            // 谷底成为共享边界；半开掩膜区间不含谷底，后续峰自谷底起算
            let valley = trace.min_position(apex..apex + x).unwrap_or(apex + x);
            (valley, BoundaryKind::Overlapping)
        }
    };

    // 游程可延伸至迹线末尾，右边界截断到最后一个样本
    PeakBounds {
        left,
        right: right.min(n - 1),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_of(values: &[f64], cutoff: f64) -> Trace {
        let mut t = Trace::from_intensities(values);
        t.mask_below(cutoff);
        t
    }

    #[test]
    fn test_isolated_peak() {
        // 峰顶 2，左游程 1，前瞻位置 3 已掩膜
        let t = trace_of(&[0.0, 4.0, 9.0, 0.0, 0.0], 1.0);
        let bounds = resolve(&t, 2, 9.0, 1, 0.65);

        assert_eq!(bounds.kind, BoundaryKind::Isolated);
        assert_eq!(bounds.left, 1);
        assert_eq!(bounds.right, 3);
    }

    #[test]
    fn test_flat_topped_peak() {
        // 前瞻区间未掩膜且平均接近峰顶：右边界取整个前向游程
        let t = trace_of(&[0.0, 8.0, 9.0, 8.5, 8.0, 0.0], 1.0);
        let bounds = resolve(&t, 2, 9.0, 1, 0.65);

        assert_eq!(bounds.kind, BoundaryKind::Flat);
        assert_eq!(bounds.left, 1);
        assert_eq!(bounds.right, 5);
    }

    #[test]
    fn test_overlapping_peaks_share_valley() {
        // 峰顶 3，左游程 2，前瞻含深谷：谷底（索引 4）为边界
        let t = trace_of(&[0.0, 3.0, 6.0, 9.0, 2.0, 1.5, 4.0, 8.0, 0.0], 1.0);
        let bounds = resolve(&t, 3, 9.0, 2, 0.65);

        assert_eq!(bounds.kind, BoundaryKind::Overlapping);
        assert_eq!(bounds.left, 1);
        // min over [3..5) = 2.0 at index 4
        assert_eq!(bounds.right, 4);
    }

    #[test]
    fn test_lookahead_capped_at_end() {
        // 左游程 3 但右侧仅剩 1 个样本：前瞻跨度截断为 1
        let t = trace_of(&[0.0, 2.0, 3.0, 4.0, 9.0, 8.0], 1.0);
        let bounds = resolve(&t, 4, 9.0, 3, 0.65);

        // 前向游程到迹线末尾，右边界截断到最后样本
        assert_eq!(bounds.kind, BoundaryKind::Flat);
        assert_eq!(bounds.left, 1);
        assert_eq!(bounds.right, 5);
    }

    #[test]
    fn test_overlap_ratio_boundary() {
        // mean([10, 4]) / 10 = 0.7 > 0.65 -> flat
        let t = trace_of(&[0.0, 5.0, 6.0, 10.0, 4.0, 6.0, 0.0], 1.0);
        let bounds = resolve(&t, 3, 10.0, 2, 0.65);
        assert_eq!(bounds.kind, BoundaryKind::Flat);

        // 阈值提高后同一形状转为 overlapping，谷底 4 为边界
        let bounds = resolve(&t, 3, 10.0, 2, 0.75);
        assert_eq!(bounds.kind, BoundaryKind::Overlapping);
        assert_eq!(bounds.left, 1);
        assert_eq!(bounds.right, 4);
    }
}
