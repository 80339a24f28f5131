use super::{to_px, Placement};
use crate::model::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

impl Alignment {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Align Left",
            Self::CenterHorizontal => "Align Horizontal Center",
            Self::Right => "Align Right",
            Self::Top => "Align Top",
            Self::CenterVertical => "Align Vertical Center",
            Self::Bottom => "Align Bottom",
        }
    }
}

/// Whether locked elements take part in alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockPolicy {
    #[default]
    Include,
    Exclude,
}

impl LockPolicy {
    pub fn admits(self, element: &Element) -> bool {
        self == Self::Include || !element.is_locked()
    }
}

/// Calculates where each element goes to satisfy `alignment`.
///
/// Edges align to the extreme edge of the set. Centers align to the
/// **average of each element's own center**, not to the midpoint of the
/// selection's bounding box. Elements already in place are left out of the
/// result.
pub fn align(elements: &[&Element], alignment: Alignment) -> Vec<Placement> {
    if elements.is_empty() {
        return Vec::new();
    }
    let count = elements.len() as f64;

    let target = match alignment {
        Alignment::Left => elements
            .iter()
            .map(|e| f64::from(e.geometry.x))
            .fold(f64::INFINITY, f64::min),
        Alignment::Right => elements
            .iter()
            .map(|e| f64::from(e.geometry.right()))
            .fold(f64::NEG_INFINITY, f64::max),
        Alignment::CenterHorizontal => {
            elements.iter().map(|e| e.geometry.center_x()).sum::<f64>() / count
        }
        Alignment::Top => elements
            .iter()
            .map(|e| f64::from(e.geometry.y))
            .fold(f64::INFINITY, f64::min),
        Alignment::Bottom => elements
            .iter()
            .map(|e| f64::from(e.geometry.bottom()))
            .fold(f64::NEG_INFINITY, f64::max),
        Alignment::CenterVertical => {
            elements.iter().map(|e| e.geometry.center_y()).sum::<f64>() / count
        }
    };

    elements
        .iter()
        .filter_map(|element| {
            let mut g = element.geometry;
            let (w, h) = (f64::from(g.width), f64::from(g.height));
            match alignment {
                Alignment::Left => g.x = to_px(target),
                Alignment::Right => g.x = to_px(target - w),
                Alignment::CenterHorizontal => g.x = to_px(target - w / 2.0),
                Alignment::Top => g.y = to_px(target),
                Alignment::Bottom => g.y = to_px(target - h),
                Alignment::CenterVertical => g.y = to_px(target - h / 2.0),
            }
            let g = g.normalized();
            (g != element.geometry).then_some((element.id, g))
        })
        .collect()
}
