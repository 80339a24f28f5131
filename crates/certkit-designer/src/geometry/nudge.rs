use super::to_px;
use crate::model::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NudgeDirection {
    pub fn delta(self, step: i32) -> (i32, i32) {
        match self {
            Self::Up => (0, -step),
            Self::Down => (0, step),
            Self::Left => (-step, 0),
            Self::Right => (step, 0),
        }
    }
}

/// Moves a box by `step` in `direction`. Both axes clamp at 0; there is no
/// upper clamp.
pub fn nudge(geometry: Geometry, direction: NudgeDirection, step: i32) -> Geometry {
    let (dx, dy) = direction.delta(step);
    Geometry {
        x: geometry.x.saturating_add(dx).max(0),
        y: geometry.y.saturating_add(dy).max(0),
        ..geometry
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterAxis {
    Horizontal,
    Vertical,
    Both,
}

/// Centers a single box on the canvas along `axis`.
pub fn center_on_canvas(geometry: Geometry, canvas: (i32, i32), axis: CenterAxis) -> Geometry {
    let centered = |extent: i32, size: i32| to_px(f64::from(extent - size) / 2.0).max(0);
    let mut g = geometry;
    if matches!(axis, CenterAxis::Horizontal | CenterAxis::Both) {
        g.x = centered(canvas.0, g.width);
    }
    if matches!(axis, CenterAxis::Vertical | CenterAxis::Both) {
        g.y = centered(canvas.1, g.height);
    }
    g
}
