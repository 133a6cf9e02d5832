//! Fly camera with a hand-derived view matrix.

use glam::{Mat4, Vec3, Vec4};

/// Movement directions understood by [`Camera::process_keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

const DEFAULT_YAW: f32 = 0.0;
const DEFAULT_PITCH: f32 = 0.0;
const DEFAULT_SPEED: f32 = 5.0;
const DEFAULT_SENSITIVITY: f32 = 0.1;
const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;

/// A yaw/pitch fly camera.
///
/// Angles are stored in degrees; `zoom` doubles as the vertical field of
/// view handed to [`Camera::perspective_matrix`]. The basis vectors
/// (`front`, `right`, `up`) are re-derived whenever yaw or pitch changes.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Direction the camera faces
    pub front: Vec3,
    /// Camera-local up
    pub up: Vec3,
    /// Camera-local right
    pub right: Vec3,
    /// World up reference used to derive the basis
    pub world_up: Vec3,

    /// Heading in degrees
    pub yaw: f32,
    /// Elevation in degrees, clamped to ±89
    pub pitch: f32,

    /// Movement speed in units per second
    pub movement_speed: f32,
    /// Mouse sensitivity applied to cursor deltas
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees, clamped to [1, 45]
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    /// Create a camera at `position` with the given up reference and
    /// starting angles (degrees).
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Create a camera at `position` with the remaining defaults.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Get the view matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        self.look_at_matrix(self.position + self.front)
    }

    /// Get a GL-clip-space perspective matrix using `zoom` as the vertical
    /// field of view.
    pub fn perspective_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, near, far)
    }

    /// Move the camera along its basis vectors.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a cursor delta to yaw and pitch.
    ///
    /// With `constrain_pitch` set, pitch is clamped to ±89° so the view
    /// never flips over the vertical.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Apply a scroll delta to the zoom, clamped to [1, 45] degrees.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(1.0, 45.0);
    }

    /// Re-derive `front`, `right`, and `up` from yaw and pitch by rotating
    /// the −Z reference direction.
    fn update_vectors(&mut self) {
        let rotation = Mat4::from_rotation_y((-self.yaw).to_radians())
            * Mat4::from_rotation_x(self.pitch.to_radians());
        let front = rotation * Vec4::new(0.0, 0.0, -1.0, 0.0);

        self.front = front.truncate().normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Build the look-at matrix from first principles: an orthonormal basis
    /// around the eye-to-target axis, assembled as rotation × translation.
    fn look_at_matrix(&self, target: Vec3) -> Mat4 {
        let zaxis = (self.position - target).normalize();
        let xaxis = self.world_up.normalize().cross(zaxis).normalize();
        let yaxis = zaxis.cross(xaxis).normalize();

        let rotation = Mat4::from_cols(
            Vec4::new(xaxis.x, yaxis.x, zaxis.x, 0.0),
            Vec4::new(xaxis.y, yaxis.y, zaxis.y, 0.0),
            Vec4::new(xaxis.z, yaxis.z, zaxis.z, 0.0),
            Vec4::W,
        );
        let translation = Mat4::from_translation(-self.position);

        rotation * translation
    }
}
