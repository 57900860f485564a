use drape::{Anchor, Cloth, Environment, NoOpStepObserver, Preset, Quat, Vec3};
use wasm_bindgen::prelude::*;

fn preset_from_index(index: u32) -> Preset {
    match index {
        1 => Preset::Sheet,
        2 => Preset::Hammock,
        _ => Preset::Flag,
    }
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
    environment: Environment<f32>,
    anchor_position: Vec3<f32>,
    anchor_rotation: Vec3<f32>,
    /// Sphere centre at the previous `update`, for deriving its velocity.
    sphere_last: Option<Vec3<f32>>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// `preset`: 0 = flag, 1 = sheet, 2 = hammock.
    #[wasm_bindgen(constructor)]
    pub fn new(preset: u32) -> Result<ClothDemo, JsError> {
        let preset = preset_from_index(preset);
        let config = preset.config::<f32>();
        let anchor = preset.anchor(config.height);
        let cloth = Cloth::new(&config, anchor).map_err(|e| JsError::new(&e.to_string()))?;
        let environment = preset.environment();
        let sphere_last = environment.spheres.first().map(|s| s.center);
        Ok(ClothDemo {
            cloth,
            environment,
            anchor_position: anchor.position,
            anchor_rotation: Vec3::zero(),
            sphere_last,
        })
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(sphere) = self.environment.spheres.first_mut() {
            let last = self.sphere_last.unwrap_or(sphere.center);
            sphere.velocity = if dt > 0.0 {
                (sphere.center - last).scale(1.0 / dt)
            } else {
                Vec3::zero()
            };
            self.sphere_last = Some(sphere.center);
        }
        self.cloth.animate(dt, &self.environment, &mut NoOpStepObserver);
    }

    pub fn move_anchor(&mut self, x: f32, y: f32, z: f32) {
        self.anchor_position = Vec3::new(x, y, z);
        self.sync_anchor();
    }

    /// Euler angles in radians, XYZ order.
    pub fn rotate_anchor(&mut self, x: f32, y: f32, z: f32) {
        self.anchor_rotation = Vec3::new(x, y, z);
        self.sync_anchor();
    }

    pub fn detach(&mut self) {
        self.cloth.detach();
    }

    pub fn is_attached(&self) -> bool {
        self.cloth.is_attached()
    }

    /// Move the first sphere. Its velocity is the displacement since the
    /// previous `update`, so it is zero once the sphere stops.
    pub fn move_sphere(&mut self, x: f32, y: f32, z: f32) {
        if let Some(sphere) = self.environment.spheres.first_mut() {
            sphere.center = Vec3::new(x, y, z);
        }
    }

    pub fn set_wind(&mut self, x: f32, y: f32, z: f32) {
        self.environment.air.velocity = Vec3::new(x, y, z);
    }

    /// Returns [x, y, z, radius] of the first sphere, or an empty array.
    pub fn sphere(&self) -> Vec<f32> {
        match self.environment.spheres.first() {
            Some(s) => vec![s.center.x, s.center.y, s.center.z, s.radius],
            None => Vec::new(),
        }
    }

    /// Returns flat [x0, y0, z0, x1, ...] vertex positions
    pub fn positions(&self) -> Vec<f32> {
        self.cloth.surface().position_buffer()
    }

    /// Returns flat smoothed vertex normals
    pub fn normals(&self) -> Vec<f32> {
        self.cloth.surface().normal_buffer()
    }

    pub fn uvs(&self) -> Vec<f32> {
        self.cloth.surface().uv_buffer()
    }

    pub fn indices(&self) -> Vec<u32> {
        self.cloth.surface().index_buffer()
    }

    /// True when positions or normals changed since the last `mark_clean`.
    pub fn dirty(&self) -> bool {
        let surface = self.cloth.surface();
        surface.positions_dirty() || surface.normals_dirty()
    }

    pub fn mark_clean(&mut self) {
        self.cloth.surface_mut().mark_clean();
    }

    pub fn particle_count(&self) -> usize {
        self.cloth.mesh().particle_count()
    }

    fn sync_anchor(&mut self) {
        let r = self.anchor_rotation;
        let orientation = Quat::from_euler_xyz(r.x, r.y, r.z);
        self.cloth.set_anchor(Anchor::new(self.anchor_position, orientation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(preset: u32) -> ClothDemo {
        match ClothDemo::new(preset) {
            Ok(demo) => demo,
            Err(_) => panic!("preset {preset} failed to build"),
        }
    }

    fn sphere_velocity(demo: &ClothDemo) -> Vec3<f32> {
        demo.environment.spheres[0].velocity
    }

    #[test]
    fn sphere_velocity_follows_the_last_frame() {
        let mut demo = demo(0);
        demo.move_sphere(0.0, -4.0, -0.6);
        demo.update(0.1);
        assert!((sphere_velocity(&demo).z - 1.0).abs() < 1e-4);

        for _ in 0..120 {
            demo.update(1.0 / 60.0);
        }
        assert_eq!(sphere_velocity(&demo), Vec3::zero());
    }

    #[test]
    fn first_update_without_moves_keeps_sphere_still() {
        let mut demo = demo(1);
        demo.update(1.0 / 60.0);
        assert_eq!(sphere_velocity(&demo), Vec3::zero());
        assert_eq!(demo.sphere(), vec![0.0, -4.0, -0.7, 0.5]);
    }
}
