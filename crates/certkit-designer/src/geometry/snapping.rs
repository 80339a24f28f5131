use serde::Serialize;

use super::to_px;
use crate::model::{Element, ElementId, Geometry};

/// Snapping configuration for one drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOptions {
    pub enabled: bool,
    /// Screen pixels at 100% zoom
    pub threshold: f64,
    /// Current canvas zoom factor; the threshold shrinks in canvas units as zoom grows
    pub zoom: f64,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 5.0,
            zoom: 1.0,
        }
    }
}

impl SnapOptions {
    fn canvas_threshold(&self) -> f64 {
        if self.zoom.is_finite() && self.zoom > 0.0 {
            self.threshold / self.zoom
        } else {
            self.threshold
        }
    }
}

/// `Vertical` guides mark an x position, `Horizontal` guides a y position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideOrientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum GuideSource {
    CanvasEdge,
    CanvasCenter,
    Element(ElementId),
}

/// A transient guide line shown while dragging. Never stored in the template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapGuide {
    pub orientation: GuideOrientation,
    pub position: f64,
    pub source: GuideSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub x: i32,
    pub y: i32,
    pub guides: Vec<SnapGuide>,
}

struct Reference {
    value: f64,
    source: GuideSource,
}

fn references(
    canvas_extent: i32,
    others: &[&Element],
    near: impl Fn(&Geometry) -> i32,
    size: impl Fn(&Geometry) -> i32,
) -> Vec<Reference> {
    let extent = f64::from(canvas_extent);
    let mut refs = vec![
        Reference {
            value: 0.0,
            source: GuideSource::CanvasEdge,
        },
        Reference {
            value: extent / 2.0,
            source: GuideSource::CanvasCenter,
        },
        Reference {
            value: extent,
            source: GuideSource::CanvasEdge,
        },
    ];
    for other in others {
        let start = f64::from(near(&other.geometry));
        let length = f64::from(size(&other.geometry));
        let source = GuideSource::Element(other.id);
        refs.push(Reference { value: start, source });
        refs.push(Reference {
            value: start + length / 2.0,
            source,
        });
        refs.push(Reference {
            value: start + length,
            source,
        });
    }
    refs
}

/// Snaps one axis. Candidates are the moving box's near edge, center and far edge.
/// Returns the snapped near-edge coordinate and the winning reference.
fn snap_axis(position: i32, length: i32, refs: &[Reference], threshold: f64) -> (i32, Option<&Reference>) {
    let length = f64::from(length);
    let start = f64::from(position);
    let offsets = [0.0, length / 2.0, length];

    let mut best: Option<(f64, f64, &Reference)> = None;
    for offset in offsets {
        let point = start + offset;
        for reference in refs {
            let distance = (point - reference.value).abs();
            if distance <= threshold && best.is_none_or(|(d, _, _)| distance < d) {
                best = Some((distance, offset, reference));
            }
        }
    }

    match best {
        Some((_, offset, reference)) => (to_px(reference.value - offset), Some(reference)),
        None => (position, None),
    }
}

/// Snaps a dragged element's candidate box to canvas and sibling guides.
///
/// `others` are the reference elements; callers pass only visible elements
/// other than the one being dragged. Each axis is snapped independently and
/// yields at most one guide. With snapping disabled the candidate is returned
/// unchanged.
pub fn snap_position(
    candidate: Geometry,
    canvas: (i32, i32),
    others: &[&Element],
    options: &SnapOptions,
) -> SnapResult {
    if !options.enabled {
        return SnapResult {
            x: candidate.x,
            y: candidate.y,
            guides: Vec::new(),
        };
    }
    let threshold = options.canvas_threshold();

    let x_refs = references(canvas.0, others, |g| g.x, |g| g.width);
    let y_refs = references(canvas.1, others, |g| g.y, |g| g.height);
    let (x, x_ref) = snap_axis(candidate.x, candidate.width, &x_refs, threshold);
    let (y, y_ref) = snap_axis(candidate.y, candidate.height, &y_refs, threshold);

    let mut guides = Vec::new();
    if let Some(reference) = x_ref {
        guides.push(SnapGuide {
            orientation: GuideOrientation::Vertical,
            position: reference.value,
            source: reference.source,
        });
    }
    if let Some(reference) = y_ref {
        guides.push(SnapGuide {
            orientation: GuideOrientation::Horizontal,
            position: reference.value,
            source: reference.source,
        });
    }

    SnapResult { x, y, guides }
}
