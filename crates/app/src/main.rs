//! Headless scene walk demo.
//!
//! Drives the camera, lights, and transform stack through a bounded number
//! of frames exactly as a render loop would, logging the matrices that the
//! draw calls would receive. No window or GPU context is involved.

use anyhow::Result;
use glam::{Mat4, Vec3};
use tracing::{debug, info};

use mstack_core::FrameClock;
use mstack_scene::{Camera, CameraMovement, DirectionalLight, PointLight, SpotLight, TransformStack};

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;
const FRAME_COUNT: u32 = 60;

const BOX_POSITIONS: [Vec3; 4] = [
    Vec3::new(2.0, 0.0, -3.0),
    Vec3::new(-4.0, 0.0, 1.5),
    Vec3::new(6.0, 0.0, 5.0),
    Vec3::new(-1.0, 0.0, -7.5),
];

struct Scene {
    camera: Camera,
    dir_light: DirectionalLight,
    point_lights: Vec<PointLight>,
    spot_light: SpotLight,
    model_matrix: TransformStack,
}

impl Scene {
    fn new() -> Self {
        let camera = Camera::at(Vec3::new(0.0, 2.0, 3.0));
        let spot_light = SpotLight::new(camera.position, camera.front, false);

        Self {
            camera,
            dir_light: DirectionalLight::new(Vec3::new(-0.2, -1.0, -0.3), false),
            point_lights: vec![
                PointLight::new(Vec3::new(8.0, 3.0, 8.0), true),
                PointLight::new(Vec3::new(-15.0, 7.5, 13.0), true),
                PointLight::new(Vec3::new(7.5, 6.25, -9.0), true),
                PointLight::new(Vec3::new(-16.0, 7.0, -18.0), true),
            ],
            spot_light,
            model_matrix: TransformStack::new(),
        }
    }

    /// Walk one frame: floor, boxes, then a marker sphere per enabled
    /// point light. Every subtree is bracketed by push/pop so the stack
    /// ends the frame back at its base.
    fn draw_frame(&mut self, view: Mat4, projection: Mat4) -> Result<()> {
        let stack = &mut self.model_matrix;

        debug!(view = ?view, projection = ?projection, "frame matrices");

        stack.push()?;
        debug!(model = ?stack.top(), "draw floor");
        stack.pop();

        stack.push()?;
        for position in BOX_POSITIONS {
            stack.push()?;
            stack.translate(Vec3::new(position.x, 0.5, position.z));
            debug!(model = ?stack.top(), "draw box");
            stack.pop();
        }
        stack.pop();

        for light in self.point_lights.iter().filter(|light| light.enabled) {
            stack.push()?;
            stack.translate(light.position);
            stack.scale(Vec3::splat(0.5));
            debug!(model = ?stack.top(), diffuse = ?light.diffuse, "draw light marker");
            stack.pop();
        }

        Ok(())
    }
}

/// Scripted stand-in for held movement keys.
fn movement_for_frame(frame: u32) -> CameraMovement {
    match (frame / 15) % 4 {
        0 => CameraMovement::Forward,
        1 => CameraMovement::Right,
        2 => CameraMovement::Backward,
        _ => CameraMovement::Left,
    }
}

fn main() -> Result<()> {
    mstack_core::init_logging();
    info!("starting scene walk");

    let mut scene = Scene::new();
    let mut clock = FrameClock::new();
    let aspect = SCR_WIDTH as f32 / SCR_HEIGHT as f32;

    for frame in 0..FRAME_COUNT {
        let delta_time = clock.tick();

        scene
            .camera
            .process_keyboard(movement_for_frame(frame), delta_time);
        scene
            .spot_light
            .follow(scene.camera.position, scene.camera.front);

        let view = scene.camera.view_matrix();
        let projection = scene.camera.perspective_matrix(aspect, 0.1, 250.0);

        scene.draw_frame(view, projection)?;

        debug_assert!(scene.model_matrix.is_base());
    }

    info!(
        frames = clock.frames(),
        elapsed_secs = clock.elapsed_secs(),
        camera_position = ?scene.camera.position,
        dir_light_enabled = scene.dir_light.enabled,
        "scene walk finished"
    );

    Ok(())
}
