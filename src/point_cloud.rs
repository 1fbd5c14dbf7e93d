//! Per-frame vertex data for whatever draws the swarm.

use bytemuck::{Pod, Zeroable};

use crate::swarm::SimulationState;

/// One particle as a renderable point
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Fully saturated, full value color whose hue is `type_id / num_types`.
pub fn color_for_type(type_id: usize, num_types: usize) -> [f32; 4] {
    let hue = type_id as f32 / num_types as f32;
    let [r, g, b] = hsv_to_rgb(hue, 1.0, 1.0);
    [r, g, b, 1.0]
}

/// `hue` in turns, `saturation` and `value` in `[0, 1]`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match sector as u32 {
        0 => [value, t, p],
        1 => [q, value, p],
        2 => [p, value, t],
        3 => [p, q, value],
        4 => [t, p, value],
        _ => [value, p, q],
    }
}

impl SimulationState {
    /// One vertex per particle, in particle order.
    pub fn point_cloud(&self) -> Vec<PointVertex> {
        let num_types = self.num_types();
        self.particles()
            .iter()
            .map(|p| PointVertex {
                position: [p.position.x as f32, p.position.y as f32],
                color: color_for_type(p.type_id, num_types),
            })
            .collect()
    }

    /// Writes the current positions into an existing vertex buffer, leaving
    /// colors alone. Types never change during a run, so colors only need
    /// to be set once from `point_cloud`.
    pub fn update_positions(&self, vertices: &mut [PointVertex]) {
        assert_eq!(vertices.len(), self.particles().len(), "vertex buffer size mismatch");
        for (vertex, particle) in vertices.iter_mut().zip(self.particles()) {
            vertex.position = [particle.position.x as f32, particle.position.y as f32];
        }
    }
}
