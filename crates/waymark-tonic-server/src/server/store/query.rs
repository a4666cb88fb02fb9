//! Bounding-box normalization and containment.

use waymark_tonic_core::proto::{Point, Rectangle};

/// Axis-aligned bounds normalized from a [`Rectangle`].
///
/// The wire rectangle guarantees nothing about corner ordering, so the
/// bounds are taken per axis: `left`/`right` from the longitudes and
/// `bottom`/`top` from the latitudes. Containment is inclusive on all four
/// edges; the off-by-one behavior at box edges is observable and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    left: i32,
    right: i32,
    bottom: i32,
    top: i32,
}

impl Bounds {
    pub fn contains(&self, point: Point) -> bool {
        point.longitude >= self.left
            && point.longitude <= self.right
            && point.latitude >= self.bottom
            && point.latitude <= self.top
    }
}

impl From<&Rectangle> for Bounds {
    fn from(rect: &Rectangle) -> Self {
        // proto3 semantics: a missing corner reads as the default (0, 0).
        let lo = rect.lo.unwrap_or_default();
        let hi = rect.hi.unwrap_or_default();
        Self {
            left: lo.longitude.min(hi.longitude),
            right: lo.longitude.max(hi.longitude),
            bottom: lo.latitude.min(hi.latitude),
            top: lo.latitude.max(hi.latitude),
        }
    }
}
