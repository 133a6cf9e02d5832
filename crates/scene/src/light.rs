//! Light parameter definitions for the scene.
//!
//! Each caster is its own type. Fields are plain data; the debug UI and
//! uniform-upload layers mutate and read them directly.

use glam::Vec3;

const DEFAULT_AMBIENT: Vec3 = Vec3::splat(0.1);
const DEFAULT_DIFFUSE: Vec3 = Vec3::splat(0.7);
const DEFAULT_SPECULAR: Vec3 = Vec3::splat(0.4);

const DEFAULT_LINEAR: f32 = 0.09;
const DEFAULT_QUADRATIC: f32 = 0.0032;

const DEFAULT_CUTOFF: f32 = 12.0;
const DEFAULT_OUTER_CUTOFF: f32 = 15.0;
const DEFAULT_EXPONENT: f32 = 128.0;

/// A directional light (sun-like).
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Light direction
    pub direction: Vec3,
    /// Ambient color term
    pub ambient: Vec3,
    /// Diffuse color term
    pub diffuse: Vec3,
    /// Specular color term
    pub specular: Vec3,
    /// Whether the light contributes this frame
    pub enabled: bool,
}

impl DirectionalLight {
    /// Create a directional light shining along `direction`.
    pub fn new(direction: Vec3, enabled: bool) -> Self {
        Self {
            direction,
            enabled,
            ..Self::default()
        }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, 0.1, 0.1),
            ambient: DEFAULT_AMBIENT,
            diffuse: DEFAULT_DIFFUSE,
            specular: DEFAULT_SPECULAR,
            enabled: true,
        }
    }
}

/// A point light (omnidirectional) with distance attenuation.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
    /// Ambient color term
    pub ambient: Vec3,
    /// Diffuse color term
    pub diffuse: Vec3,
    /// Specular color term
    pub specular: Vec3,
    /// Constant attenuation coefficient
    pub constant: f32,
    /// Linear attenuation coefficient
    pub linear: f32,
    /// Quadratic attenuation coefficient
    pub quadratic: f32,
    /// Whether the light contributes this frame
    pub enabled: bool,
}

impl PointLight {
    /// Create a point light at `position`.
    pub fn new(position: Vec3, enabled: bool) -> Self {
        Self {
            position,
            enabled,
            ..Self::default()
        }
    }

    /// Attenuation factor at `distance` from the light:
    /// `1 / (constant + linear·d + quadratic·d²)`.
    pub fn attenuation(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            ambient: DEFAULT_AMBIENT,
            diffuse: DEFAULT_DIFFUSE,
            specular: DEFAULT_SPECULAR,
            constant: 1.0,
            linear: DEFAULT_LINEAR,
            quadratic: DEFAULT_QUADRATIC,
            enabled: true,
        }
    }
}

/// A spot light (cone-shaped), usually attached to the camera.
#[derive(Clone, Copy, Debug)]
pub struct SpotLight {
    /// Light position in world space
    pub position: Vec3,
    /// Cone direction
    pub direction: Vec3,
    /// Ambient color term
    pub ambient: Vec3,
    /// Diffuse color term
    pub diffuse: Vec3,
    /// Specular color term
    pub specular: Vec3,
    /// Constant attenuation coefficient
    pub constant: f32,
    /// Linear attenuation coefficient
    pub linear: f32,
    /// Quadratic attenuation coefficient
    pub quadratic: f32,
    /// Inner cone angle in degrees
    pub cutoff: f32,
    /// Outer cone angle in degrees
    pub outer_cutoff: f32,
    /// Falloff exponent inside the cone
    pub exponent: f32,
    /// Whether the light contributes this frame
    pub enabled: bool,
}

impl SpotLight {
    /// Create a spot light at `position` shining along `direction`.
    pub fn new(position: Vec3, direction: Vec3, enabled: bool) -> Self {
        Self {
            position,
            direction,
            enabled,
            ..Self::default()
        }
    }

    /// Cosine of the inner cone angle, the form the lighting math consumes.
    pub fn cos_cutoff(&self) -> f32 {
        self.cutoff.to_radians().cos()
    }

    /// Cosine of the outer cone angle.
    pub fn cos_outer_cutoff(&self) -> f32 {
        self.outer_cutoff.to_radians().cos()
    }

    /// Attenuation factor at `distance` from the light.
    pub fn attenuation(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }

    /// Re-attach the cone to a new pose, e.g. the camera's each frame.
    pub fn follow(&mut self, position: Vec3, direction: Vec3) {
        self.position = position;
        self.direction = direction;
    }
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            ambient: DEFAULT_AMBIENT,
            diffuse: DEFAULT_DIFFUSE,
            specular: DEFAULT_SPECULAR,
            constant: 1.0,
            linear: DEFAULT_LINEAR,
            quadratic: DEFAULT_QUADRATIC,
            cutoff: DEFAULT_CUTOFF,
            outer_cutoff: DEFAULT_OUTER_CUTOFF,
            exponent: DEFAULT_EXPONENT,
            enabled: true,
        }
    }
}
