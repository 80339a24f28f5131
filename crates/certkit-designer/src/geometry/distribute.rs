use super::{to_px, Placement};
use crate::model::{Element, Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn near(self, g: &Geometry) -> i32 {
        match self {
            Self::Horizontal => g.x,
            Self::Vertical => g.y,
        }
    }

    fn size(self, g: &Geometry) -> i32 {
        match self {
            Self::Horizontal => g.width,
            Self::Vertical => g.height,
        }
    }

    fn with_near(self, g: Geometry, value: i32) -> Geometry {
        match self {
            Self::Horizontal => Geometry { x: value, ..g },
            Self::Vertical => Geometry { y: value, ..g },
        }
    }
}

/// Spaces elements evenly along `axis`.
///
/// Elements are sorted by their near edge; the first and last stay where they
/// are and the ones between are placed so every gap is the same. Fewer than
/// three elements produce no placements.
pub fn distribute(elements: &[&Element], axis: Axis) -> Vec<Placement> {
    if elements.len() < 3 {
        return Vec::new();
    }

    let mut sorted: Vec<&Element> = elements.to_vec();
    sorted.sort_by_key(|e| axis.near(&e.geometry));

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };
    let far = |e: &Element| f64::from(axis.near(&e.geometry)) + f64::from(axis.size(&e.geometry));
    let span = far(*last) - f64::from(axis.near(&first.geometry));
    let total_size: f64 = sorted.iter().map(|e| f64::from(axis.size(&e.geometry))).sum();
    let gap = (span - total_size) / (sorted.len() - 1) as f64;

    let mut cursor = far(*first) + gap;
    let mut placements = Vec::new();
    for element in &sorted[1..sorted.len() - 1] {
        let g = axis.with_near(element.geometry, to_px(cursor)).normalized();
        if g != element.geometry {
            placements.push((element.id, g));
        }
        cursor += f64::from(axis.size(&element.geometry)) + gap;
    }
    placements
}
