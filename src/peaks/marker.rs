//! # 交互式峰位标记
//!
//! 每个峰对应一个标记，保存可变的显示位置（2θ）。标记支持两种重定位操作：
//! - **拖拽**（连续）：`Idle -> Dragging -> Idle` 状态机，位移取指针坐标差
//! - **步进**（离散）：按峰顶处的采样栅格间距左右移动一格
//!
//! 显示位置与注册表中峰的中心位置解耦：拖拽或步进不会改写峰记录。
//! 操作返回更新后的位置，由调用方（表格/绘图层）据此重新渲染。
//!
//! ## 依赖关系
//! - 被 `peaks/detector.rs` 创建，被 `commands/adjust.rs` 驱动
//! - 使用 `error.rs`

use crate::error::{PeakmarkError, Result};

/// 步进方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// 向低角度移动一格
    Left,
    /// 向高角度移动一格
    Right,
}

impl StepDirection {
    fn factor(self) -> f64 {
        match self {
            StepDirection::Left => -1.0,
            StepDirection::Right => 1.0,
        }
    }
}

/// 拖拽状态
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// 捕获拖拽起始时的显示位置与指针参考坐标
    Dragging { origin: f64, reference: f64 },
}

/// 峰位标记
#[derive(Debug, Clone)]
pub struct PeakMarker {
    /// 所属峰的序号（1 起）
    label: usize,

    /// 产生该峰的峰顶样本索引（创建后固定）
    apex_index: usize,

    /// 当前显示位置（2θ），初值为峰中心
    two_theta: f64,

    /// 栅格间距：峰顶与其右邻样本的 2θ 差，创建时计算一次，不随移动刷新。
    /// 峰顶为最后一个样本时无间距可取。
    step: Option<f64>,

    drag: DragState,
}

impl PeakMarker {
    /// 创建标记，`grid` 为扫描的 2θ 序列
    pub(crate) fn new(label: usize, apex_index: usize, two_theta: f64, grid: &[f64]) -> Self {
        let step = if apex_index + 1 < grid.len() {
            Some(grid[apex_index + 1] - grid[apex_index])
        } else {
            None
        };

        PeakMarker {
            label,
            apex_index,
            two_theta,
            step,
            drag: DragState::Idle,
        }
    }

    /// 所属峰序号
    #[inline]
    pub fn label(&self) -> usize {
        self.label
    }

    /// 峰顶样本索引
    #[inline]
    pub fn apex_index(&self) -> usize {
        self.apex_index
    }

    /// 当前显示位置
    #[inline]
    pub fn two_theta(&self) -> f64 {
        self.two_theta
    }

    /// 步进栅格间距
    #[inline]
    pub fn step_size(&self) -> Option<f64> {
        self.step
    }

    /// 是否处于拖拽中
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// 开始拖拽：捕获当前位置与指针参考坐标
    pub fn drag_start(&mut self, pointer: f64) {
        self.drag = DragState::Dragging {
            origin: self.two_theta,
            reference: pointer,
        };
    }

    /// 拖拽移动：仅在 Dragging 状态下生效，返回更新后的位置。
    /// 位移不受峰原始范围约束。
    pub fn drag_move(&mut self, pointer: f64) -> Option<f64> {
        match self.drag {
            DragState::Dragging { origin, reference } => {
                self.two_theta = origin + (pointer - reference);
                Some(self.two_theta)
            }
            DragState::Idle => None,
        }
    }

    /// 结束拖拽：回到 Idle，保留最终位置并返回
    pub fn drag_end(&mut self) -> f64 {
        self.drag = DragState::Idle;
        self.two_theta
    }

    /// 按栅格间距步进一格，返回更新后的位置。
    /// 无栅格间距（峰顶为最后样本）时返回 `StepOutOfRange`，调用方按 no-op 恢复。
    pub fn step(&mut self, direction: StepDirection) -> Result<f64> {
        let step = self
            .step
            .ok_or(PeakmarkError::StepOutOfRange { label: self.label })?;

        self.two_theta += direction.factor() * step;
        Ok(self.two_theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> PeakMarker {
        // 均匀栅格，峰顶 2，中心 5.0
        PeakMarker::new(1, 2, 5.0, &[4.0, 4.5, 5.0, 5.5, 6.0])
    }

    #[test]
    fn test_drag_sequence() {
        let mut m = marker();

        m.drag_start(5.1);
        assert!(m.is_dragging());

        assert_eq!(m.drag_move(5.6), Some(5.5));
        assert_eq!(m.drag_move(4.1), Some(4.0));

        let final_pos = m.drag_end();
        assert_eq!(final_pos, 4.0);
        assert!(!m.is_dragging());
        assert_eq!(m.two_theta(), 4.0);
    }

    #[test]
    fn test_drag_move_without_start_is_ignored() {
        let mut m = marker();
        assert_eq!(m.drag_move(7.0), None);
        assert_eq!(m.two_theta(), 5.0);
    }

    #[test]
    fn test_drag_is_unconstrained() {
        let mut m = marker();
        m.drag_start(5.0);
        // 可拖出峰的原始区间
        assert_eq!(m.drag_move(100.0), Some(100.0));
        m.drag_end();
    }

    #[test]
    fn test_step_determinism() {
        let mut m = marker();
        let step = m.step_size().unwrap();

        m.step(StepDirection::Right).unwrap();
        m.step(StepDirection::Right).unwrap();
        let pos = m.step(StepDirection::Left).unwrap();

        assert!((pos - (5.0 + step)).abs() < 1e-12);
    }

    #[test]
    fn test_step_uses_spacing_at_apex_not_at_current_position() {
        // 非均匀栅格：峰顶 1 处间距 2.0，远处间距 4.0
        let mut m = PeakMarker::new(1, 1, 1.0, &[0.0, 1.0, 3.0, 7.0, 15.0]);
        assert_eq!(m.step_size(), Some(2.0));

        // 连续步进后间距保持创建时的值，不随标记位置刷新
        assert_eq!(m.step(StepDirection::Right).unwrap(), 3.0);
        assert_eq!(m.step(StepDirection::Right).unwrap(), 5.0);
        assert_eq!(m.step(StepDirection::Right).unwrap(), 7.0);
    }

    #[test]
    fn test_step_without_grid_spacing() {
        // 峰顶为最后一个样本：无间距可取
        let mut m = PeakMarker::new(3, 2, 2.0, &[0.0, 1.0, 2.0]);
        assert_eq!(m.step_size(), None);

        let result = m.step(StepDirection::Right);
        assert!(matches!(
            result,
            Err(PeakmarkError::StepOutOfRange { label: 3 })
        ));
        // no-op：位置不变
        assert_eq!(m.two_theta(), 2.0);
    }
}
