//! Hierarchical stack of model matrices.
//!
//! This module provides the [`TransformStack`] used to compose model
//! matrices during a scene walk. Each `push` opens a nested frame that
//! inherits the parent's cumulative transform; `pop` restores the parent
//! frame for siblings. Draw code brackets every subtree in a balanced
//! `push`/`pop` pair.
//!
//! # Example
//!
//! ```
//! use glam::{Mat4, Vec3};
//! use mstack_scene::TransformStack;
//!
//! let mut stack = TransformStack::new();
//!
//! stack.push()?;
//! stack.translate(Vec3::new(1.0, 0.0, 0.0));
//! // hand stack.top() to the draw call for this object
//! stack.pop();
//!
//! // siblings see the parent frame again
//! assert_eq!(stack.top(), Mat4::IDENTITY);
//! # Ok::<(), mstack_core::Error>(())
//! ```

use glam::{Mat4, Vec3};
use tracing::warn;

use mstack_core::Result;

/// Number of frames reserved before the stack has to grow.
pub const DEFAULT_CAPACITY: usize = 32;

/// A stack of 4x4 model matrices for hierarchical draws.
///
/// The base frame at depth 0 always exists and starts as identity; it can
/// be overwritten with [`save`](TransformStack::save) but never removed.
/// Matrices returned by [`top`](TransformStack::top) are snapshots, not
/// live views into the stack's storage.
#[derive(Debug, Clone)]
pub struct TransformStack {
    entries: Vec<Mat4>,
}

impl TransformStack {
    /// Create a stack holding an identity base frame, with room for
    /// [`DEFAULT_CAPACITY`] frames before the first growth.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a stack with an explicit initial capacity.
    ///
    /// The capacity is clamped to at least 1 so the base frame always fits.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity.max(1));
        entries.push(Mat4::IDENTITY);
        Self { entries }
    }

    /// Open a new frame that starts as a copy of the current top.
    ///
    /// When the backing storage is full its capacity doubles before the
    /// push. Growth failure is the only error path and leaves the stack
    /// unchanged.
    pub fn push(&mut self) -> Result<()> {
        if self.entries.len() == self.entries.capacity() {
            self.entries.try_reserve_exact(self.entries.capacity())?;
        }
        let top = self.top();
        self.entries.push(top);
        Ok(())
    }

    /// Discard the top frame, exposing the parent transform again.
    ///
    /// Popping the base frame is disallowed; a misbalanced `pop` is
    /// reported and ignored rather than corrupting the stack.
    pub fn pop(&mut self) {
        if self.is_base() {
            warn!("unbalanced pop: transform stack is at the base frame");
            return;
        }
        self.entries.pop();
    }

    /// The matrix of the current frame.
    pub fn top(&self) -> Mat4 {
        self.entries[self.entries.len() - 1]
    }

    /// Overwrite the current frame with `matrix`.
    pub fn save(&mut self, matrix: Mat4) {
        let depth = self.depth();
        self.entries[depth] = matrix;
    }

    /// Compose a translation onto the current frame.
    pub fn translate(&mut self, offset: Vec3) {
        let composed = self.top() * Mat4::from_translation(offset);
        self.save(composed);
    }

    /// Compose a rotation of `angle` radians about `axis` onto the current
    /// frame.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        let composed = self.top() * Mat4::from_axis_angle(axis.normalize(), angle);
        self.save(composed);
    }

    /// Compose a scale onto the current frame.
    pub fn scale(&mut self, factor: Vec3) {
        let composed = self.top() * Mat4::from_scale(factor);
        self.save(composed);
    }

    /// Number of active frames, the base frame included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Current nesting depth; 0 at the base frame.
    pub fn depth(&self) -> usize {
        self.entries.len() - 1
    }

    /// Whether the cursor sits on the base frame.
    pub fn is_base(&self) -> bool {
        self.depth() == 0
    }

    /// Frames the backing storage can hold before the next growth.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq_mat4(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, EPSILON)
    }

    fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(x, y, z))
    }

    #[test]
    fn test_new_stack_is_identity_base() {
        let stack = TransformStack::new();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.depth(), 0);
        assert!(stack.is_base());
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_push_duplicates_top() {
        let mut stack = TransformStack::new();
        stack.save(translation(3.0, 0.0, -2.0));

        let before = stack.top();
        stack.push().unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), before);
    }

    #[test]
    fn test_balanced_sequence_preserves_len() {
        let mut stack = TransformStack::new();
        stack.push().unwrap();
        stack.save(translation(1.0, 2.0, 3.0));
        let len_before = stack.len();

        stack.push().unwrap();
        stack.translate(Vec3::X);
        stack.push().unwrap();
        stack.scale(Vec3::splat(0.5));
        stack.pop();
        stack.pop();

        assert_eq!(stack.len(), len_before);
    }

    #[test]
    fn test_save_then_top_roundtrips() {
        let mut stack = TransformStack::new();
        let matrix = translation(-4.0, 7.5, 0.25);
        stack.save(matrix);
        assert_eq!(stack.top(), matrix);
    }

    #[test]
    fn test_pop_at_base_is_reported_noop() {
        let mut stack = TransformStack::new();
        stack.save(translation(1.0, 1.0, 1.0));
        let top_before = stack.top();

        stack.pop();

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top(), top_before);
        assert!(stack.is_base());
    }

    #[test]
    fn test_growth_preserves_saved_frames() {
        let mut stack = TransformStack::with_capacity(2);

        for depth in 1..=5 {
            stack.push().unwrap();
            stack.save(translation(depth as f32, 0.0, 0.0));
        }
        assert_eq!(stack.len(), 6);

        for depth in (1..=5).rev() {
            assert_eq!(stack.top(), translation(depth as f32, 0.0, 0.0));
            stack.pop();
        }
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_push_past_capacity_one() {
        let mut stack = TransformStack::with_capacity(1);
        assert_eq!(stack.capacity(), 1);

        for _ in 0..10 {
            stack.push().unwrap();
        }

        assert_eq!(stack.len(), 11);
        assert!(stack.capacity() >= 11);
        // every frame inherited the identity base
        for _ in 0..10 {
            assert_eq!(stack.top(), Mat4::IDENTITY);
            stack.pop();
        }
    }

    #[test]
    fn test_nested_translate_scenario() {
        let mut stack = TransformStack::new();
        assert_eq!(stack.top(), Mat4::IDENTITY);

        stack.push().unwrap();
        stack.translate(Vec3::new(1.0, 0.0, 0.0));

        stack.push().unwrap();
        stack.translate(Vec3::new(0.0, 1.0, 0.0));
        assert!(approx_eq_mat4(
            stack.top(),
            translation(1.0, 0.0, 0.0) * translation(0.0, 1.0, 0.0)
        ));

        stack.pop();
        assert!(approx_eq_mat4(stack.top(), translation(1.0, 0.0, 0.0)));

        stack.pop();
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_rotate_composes_about_axis() {
        let mut stack = TransformStack::new();
        stack.rotate(std::f32::consts::FRAC_PI_2, Vec3::Y);

        let rotated = stack.top().transform_point3(Vec3::X);
        assert!((rotated - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_scale_composes_with_parent() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(0.0, 3.0, 0.0));
        stack.push().unwrap();
        stack.scale(Vec3::splat(0.5));

        let point = stack.top().transform_point3(Vec3::new(2.0, 0.0, 0.0));
        assert!((point - Vec3::new(1.0, 3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_capacity_is_monotonic() {
        let mut stack = TransformStack::with_capacity(2);
        for _ in 0..8 {
            stack.push().unwrap();
        }
        let grown = stack.capacity();

        for _ in 0..8 {
            stack.pop();
        }
        assert_eq!(stack.capacity(), grown);
    }
}
