use super::plan::{FramePlan, PlanError};
use super::resources::ResourceSet;
use super::uniforms::ObjectUniforms;
use super::{RenderCtx, RenderTarget, SceneLayouts};

/// Depth buffer format used by every depth-tested program.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

struct DepthTarget {
    size: (u32, u32),
    view: wgpu::TextureView,
}

/// Executes `FramePlan`s.
///
/// Owns the frame-sized depth buffer and one uniform buffer holding a slot
/// per draw, addressed with dynamic offsets. Both grow on demand.
#[derive(Default)]
pub struct ScenePass {
    depth: Option<DepthTarget>,

    uniform_buffer: Option<wgpu::Buffer>,
    uniform_bind_group: Option<wgpu::BindGroup>,
    uniform_capacity: usize,
    uniform_stride: u64,

    warned_missing: bool,
}

impl ScenePass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `plan` into `target`.
    ///
    /// A malformed plan is rejected before anything is recorded. Draws that
    /// reference unknown resources are skipped with a one-time warning.
    pub fn execute(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        layouts: &SceneLayouts,
        resources: &ResourceSet,
        plan: &FramePlan,
    ) -> Result<(), PlanError> {
        plan.validate()?;

        let draw_count = plan.draw_count();
        self.ensure_depth(ctx);
        self.ensure_uniform_capacity(ctx, layouts, draw_count);
        self.write_uniforms(ctx, plan);

        let Some(depth) = self.depth.as_ref() else { return Ok(()) };
        let Some(uniform_bind_group) = self.uniform_bind_group.as_ref() else { return Ok(()) };

        let mut slot = 0u64;
        let mut missing = false;

        for span in plan.passes() {
            let depth_attachment = span.depth_test.then(|| wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            });

            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lectern scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(span.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: depth_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            for call in span.draw_calls() {
                let offset = (slot * self.uniform_stride) as u32;
                slot += 1;

                let Some(program) = resources.program(call.program) else {
                    missing = true;
                    continue;
                };
                let Some(mesh) = resources.mesh(call.mesh) else {
                    missing = true;
                    continue;
                };
                // Pipeline depth state must match the pass attachments.
                if program.depth_tested() != span.depth_test {
                    missing = true;
                    continue;
                }

                rpass.set_pipeline(program.pipeline());
                rpass.set_bind_group(0, uniform_bind_group, &[offset]);

                if program.textured() {
                    let Some(texture) = call.texture.and_then(|id| resources.texture(id)) else {
                        missing = true;
                        continue;
                    };
                    rpass.set_bind_group(1, texture.bind_group(), &[]);
                }

                rpass.set_vertex_buffer(0, mesh.buffer().slice(..));
                rpass.draw(0..mesh.vertex_count(), 0..1);
            }
        }

        if missing && !self.warned_missing {
            log::warn!("ScenePass: skipped draws with unknown or incompatible resources");
            self.warned_missing = true;
        }

        Ok(())
    }

    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>) {
        let size = (ctx.surface_size.width.max(1), ctx.surface_size.height.max(1));
        if self.depth.as_ref().is_some_and(|d| d.size == size) {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("lectern depth"),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        log::debug!("depth buffer resized to {}x{}", size.0, size.1);
        self.depth = Some(DepthTarget { size, view });
    }

    fn ensure_uniform_capacity(&mut self, ctx: &RenderCtx<'_>, layouts: &SceneLayouts, draws: usize) {
        if draws <= self.uniform_capacity && self.uniform_buffer.is_some() {
            return;
        }

        let alignment = ctx.device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = uniform_stride(alignment);
        let capacity = draws.next_power_of_two().max(16);

        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lectern object uniforms"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lectern object uniforms"),
            layout: &layouts.uniforms,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(ObjectUniforms::SIZE),
                }),
            }],
        });

        self.uniform_buffer = Some(buffer);
        self.uniform_bind_group = Some(bind_group);
        self.uniform_capacity = capacity;
        self.uniform_stride = stride;
    }

    fn write_uniforms(&mut self, ctx: &RenderCtx<'_>, plan: &FramePlan) {
        let Some(buffer) = self.uniform_buffer.as_ref() else { return };
        let stride = self.uniform_stride as usize;

        let mut bytes = vec![0u8; stride * plan.draw_count()];
        for (i, call) in plan.draws().enumerate() {
            let start = i * stride;
            bytes[start..start + ObjectUniforms::SIZE as usize]
                .copy_from_slice(bytemuck::bytes_of(&call.uniforms));
        }

        if !bytes.is_empty() {
            ctx.queue.write_buffer(buffer, 0, &bytes);
        }
    }
}

/// Size of one uniform slot: the block rounded up to the offset alignment.
fn uniform_stride(alignment: u64) -> u64 {
    ObjectUniforms::SIZE.div_ceil(alignment.max(1)) * alignment.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stride_respects_alignment() {
        assert_eq!(uniform_stride(256), 512);
        assert_eq!(uniform_stride(64), 384);
        assert_eq!(uniform_stride(16), 336);
    }
}
