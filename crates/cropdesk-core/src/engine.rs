//! Crop rectangle resize and move math.
//!
//! The engine is a pure function of the drag session snapshot, the current
//! pointer position, the buffer bounds and the minimum crop size. It never
//! accumulates state between pointer-move events: every event is computed
//! from the rectangle captured at pointer-down, so replaying the same
//! pointer position always yields the same rectangle.
//!
//! # Algorithm
//!
//! 1. The pointer delta is taken in display space and divided by the scale
//!    captured when the session started.
//! 2. Each axis is handled independently. A corner handle decomposes into a
//!    horizontal edge (west/east) and a vertical edge (north/south):
//!    - the opposite edge is pinned
//!    - the new length is `max(min_size, length -/+ delta)`
//!    - a west/north edge recomputes the origin from the pinned far edge
//!    - the result is clamped to the buffer by shrinking, never by moving
//!      the pinned edge
//! 3. The body (`HandleId::Move`) translates both axes, clamping the origin
//!    to `[0, extent - length]`.

use crate::geometry::{delta_to_buffer, Bounds, Point, Rect};
use crate::session::{DragSession, Edge};

/// Smallest crop side, in buffer pixels.
pub const DEFAULT_MIN_CROP_SIZE: f64 = 20.0;

/// Computes the next crop rectangle for an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropEngine {
    min_size: f64,
}

impl Default for CropEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CROP_SIZE)
    }
}

impl CropEngine {
    pub fn new(min_size: f64) -> Self {
        let min_size = if min_size.is_finite() && min_size > 0.0 {
            min_size
        } else {
            1.0
        };
        Self { min_size }
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Rectangle for `session` with the pointer at `pointer` (display space).
    ///
    /// The result always lies inside `bounds` with each side at least
    /// `min_size`, or the full axis when the buffer is smaller than that.
    pub fn next_rect(&self, session: &DragSession, pointer: Point, bounds: Bounds) -> Rect {
        let start = session.rect_at_origin.clamp_to(bounds, self.min_size);
        let delta = buffer_delta(session, pointer);

        let (x, width) = match session.handle.horizontal() {
            Some(edge) => {
                resize_axis(start.x, start.width, delta.x, bounds.width, self.min_size, edge)
            }
            None => move_axis(start.x, start.width, delta.x, bounds.width),
        };
        let (y, height) = match session.handle.vertical() {
            Some(edge) => {
                resize_axis(start.y, start.height, delta.y, bounds.height, self.min_size, edge)
            }
            None => move_axis(start.y, start.height, delta.y, bounds.height),
        };

        Rect::new(x, y, width, height)
    }
}

/// Pointer travel since pointer-down, in buffer units.
///
/// A session whose scale cannot be inverted (the layout collapsed before
/// the drag began) does not move the rectangle.
fn buffer_delta(session: &DragSession, pointer: Point) -> Point {
    let delta = pointer.delta_from(session.origin_pointer);
    let delta = delta_to_buffer(delta, session.scale).unwrap_or_default();
    Point::new(finite_or_zero(delta.x), finite_or_zero(delta.y))
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Translate one axis, keeping the length.
fn move_axis(start: f64, size: f64, delta: f64, extent: f64) -> (f64, f64) {
    let max_start = (extent - size).max(0.0);
    ((start + delta).clamp(0.0, max_start), size)
}

/// Drag one edge of one axis.
///
/// `start`/`size` must already lie inside `[0, extent]`.
fn resize_axis(
    start: f64,
    size: f64,
    delta: f64,
    extent: f64,
    min_size: f64,
    edge: Edge,
) -> (f64, f64) {
    let min_size = min_size.min(extent);
    match edge {
        Edge::Low => {
            // far edge pinned
            let far = (start + size).min(extent).max(min_size);
            let length = (size - delta).max(min_size);
            let near = (far - length).max(0.0);
            (near, far - near)
        }
        Edge::High => {
            // near edge pinned
            let near = start.clamp(0.0, extent - min_size);
            let length = (size + delta).max(min_size);
            let far = (near + length).min(extent);
            (near, far - near)
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::Scale;
    use crate::session::HandleId;
    use proptest::prelude::*;

    const EPS: f64 = 1e-6;

    fn handle_strategy() -> impl Strategy<Value = HandleId> {
        prop::sample::select(HandleId::ALL.to_vec())
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (50.0f64..2000.0, 50.0f64..2000.0).prop_map(|(w, h)| Bounds::new(w, h))
    }

    fn pointer_strategy() -> impl Strategy<Value = Point> {
        (-3000.0f64..3000.0, -3000.0f64..3000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Chain drags the way the editor does: each session starts from the
    /// rectangle the previous one published.
    fn run_drags(
        bounds: Bounds,
        steps: &[(HandleId, Point)],
        scale: Scale,
    ) -> Vec<(HandleId, Rect, Rect)> {
        let engine = CropEngine::default();
        let mut rect = Rect::default_crop(bounds, 0.8);
        let mut out = Vec::new();
        for (handle, pointer) in steps {
            let session = DragSession::new(*handle, Point::new(0.0, 0.0), rect, scale);
            let next = engine.next_rect(&session, *pointer, bounds);
            out.push((*handle, rect, next));
            rect = next;
        }
        out
    }

    proptest! {
        /// Property: every published rectangle stays inside the buffer with
        /// each side at least the minimum size.
        #[test]
        fn prop_rect_invariant_holds(
            bounds in bounds_strategy(),
            steps in prop::collection::vec((handle_strategy(), pointer_strategy()), 1..20),
            sx in 0.1f64..4.0,
            sy in 0.1f64..4.0,
        ) {
            for (_, _, rect) in run_drags(bounds, &steps, Scale::new(sx, sy)) {
                prop_assert!(rect.x >= 0.0, "x = {}", rect.x);
                prop_assert!(rect.y >= 0.0, "y = {}", rect.y);
                prop_assert!(rect.width >= DEFAULT_MIN_CROP_SIZE - EPS, "width = {}", rect.width);
                prop_assert!(rect.height >= DEFAULT_MIN_CROP_SIZE - EPS, "height = {}", rect.height);
                prop_assert!(rect.right() <= bounds.width + EPS);
                prop_assert!(rect.bottom() <= bounds.height + EPS);
            }
        }

        /// Property: move-only drags never change the rectangle's size.
        #[test]
        fn prop_move_preserves_size(
            bounds in bounds_strategy(),
            pointers in prop::collection::vec(pointer_strategy(), 1..20),
        ) {
            let steps: Vec<_> = pointers.into_iter().map(|p| (HandleId::Move, p)).collect();
            let start = Rect::default_crop(bounds, 0.8);
            for (_, _, rect) in run_drags(bounds, &steps, Scale::IDENTITY) {
                prop_assert!((rect.width - start.width).abs() < EPS);
                prop_assert!((rect.height - start.height).abs() < EPS);
            }
        }

        /// Property: corner drags leave the opposite (pinned) edges in place.
        #[test]
        fn prop_corner_pins_opposite_edges(
            bounds in bounds_strategy(),
            handle in prop::sample::select(vec![HandleId::Nw, HandleId::Ne, HandleId::Sw, HandleId::Se]),
            pointer in pointer_strategy(),
        ) {
            let (_, before, after) = run_drags(bounds, &[(handle, pointer)], Scale::IDENTITY)[0];
            match handle.horizontal() {
                Some(Edge::Low) => prop_assert!((after.right() - before.right()).abs() < EPS),
                Some(Edge::High) => prop_assert!((after.x - before.x).abs() < EPS),
                None => unreachable!(),
            }
            match handle.vertical() {
                Some(Edge::Low) => prop_assert!((after.bottom() - before.bottom()).abs() < EPS),
                Some(Edge::High) => prop_assert!((after.y - before.y).abs() < EPS),
                None => unreachable!(),
            }
        }

        /// Property: the engine is a pure function of its inputs.
        #[test]
        fn prop_next_rect_is_deterministic(
            bounds in bounds_strategy(),
            handle in handle_strategy(),
            pointer in pointer_strategy(),
        ) {
            let engine = CropEngine::default();
            let session = DragSession::new(
                handle,
                Point::new(0.0, 0.0),
                Rect::default_crop(bounds, 0.8),
                Scale::IDENTITY,
            );
            let a = engine.next_rect(&session, pointer, bounds);
            let b = engine.next_rect(&session, pointer, bounds);
            prop_assert_eq!(a, b);
        }
    }
}
