use crate::camera::{Camera, CameraUniform};
use game_core::{Color, Rect};
use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Upper bound on shapes drawn in one frame
pub const MAX_INSTANCES: usize = 512;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Quad instance covering `rect`
    pub fn rect(rect: &Rect, color: Color) -> Self {
        let center = rect.center();
        Self {
            transform: [center.x, center.y, rect.width, rect.height],
            tint: color.0,
        }
    }

    /// Disc instance of `radius` around `center`
    pub fn circle(center: Vec2, radius: f32, color: Color) -> Self {
        Self {
            transform: [center.x, center.y, radius * 2.0, radius * 2.0],
            tint: color.0,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_instance_is_centered() {
        let instance = InstanceData::rect(&Rect::new(50.0, 250.0, 15.0, 100.0), Color::WHITE);
        assert_eq!(instance.transform, [57.5, 300.0, 15.0, 100.0]);
        assert_eq!(instance.tint, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_circle_instance_scales_by_diameter() {
        let instance = InstanceData::circle(Vec2::new(400.0, 300.0), 10.0, Color::WHITE);
        assert_eq!(instance.transform, [400.0, 300.0, 20.0, 20.0]);
    }

    #[test]
    fn test_instance_layout_is_packed() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }
}
