use super::resources::{InstanceData, MAX_INSTANCES};
use super::Renderer;
use crate::error::RenderError;
use crate::scene::Scene;
use wgpu::*;

/// Number of rect and circle instances that fit the instance buffer
pub fn fit_instances(rects: usize, circles: usize) -> (usize, usize) {
    let rects = rects.min(MAX_INSTANCES);
    let circles = circles.min(MAX_INSTANCES - rects);
    (rects, circles)
}

/// Render pass clear value for a scene background
pub fn clear_color(color: game_core::Color) -> Color {
    let [r, g, b, a] = color.0;
    Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), RenderError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    let (rect_count, circle_count) = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(clear_color(scene.background)),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, rect_count, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload this frame's instances: rects first, circles after them
fn update_buffers(renderer: &Renderer, scene: &Scene) -> (u32, u32) {
    let (rect_count, circle_count) = fit_instances(scene.rects.len(), scene.circles.len());
    if rect_count + circle_count < scene.rects.len() + scene.circles.len() {
        tracing::warn!(
            rects = scene.rects.len(),
            circles = scene.circles.len(),
            "scene exceeds instance buffer, dropping shapes"
        );
    }

    let mut instances: Vec<InstanceData> = Vec::with_capacity(rect_count + circle_count);
    instances.extend_from_slice(&scene.rects[..rect_count]);
    instances.extend_from_slice(&scene.circles[..circle_count]);

    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(&instances));
    }

    (rect_count as u32, circle_count as u32)
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, rects: u32, circles: u32) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    // Rects (paddles, center line, score segments)
    let rect_mesh = &renderer.meshes.0;
    pass.set_vertex_buffer(0, rect_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..rect_mesh.index_count, 0, 0..rects);

    // Circle (Ball)
    let circle_mesh = &renderer.meshes.1;
    pass.set_vertex_buffer(0, circle_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..circle_mesh.index_count, 0, rects..rects + circles);
}
