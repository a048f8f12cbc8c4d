use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{Geometry, Painter};
use crate::transform::Transform2D;

/// One clip-space vertex with a premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// CPU-side triangle batch filled by a scene traversal.
///
/// Each painted vertex is transformed by the world matrix it arrives with,
/// so the batch holds the frame's triangles in paint order.
#[derive(Debug, Default)]
pub struct MeshBatch {
    vertices: Vec<MeshVertex>,
}

impl MeshBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all vertices but keeps the allocation for the next frame.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Painter for MeshBatch {
    fn paint(&mut self, world: &Transform2D, geometry: &Geometry) {
        let color = geometry.color.to_array();
        self.vertices.extend(geometry.vertices.iter().map(|&v| {
            let p = world.transform_point(v);
            MeshVertex { pos: [p.x, p.y], color }
        }));
    }
}

/// Draws a [`MeshBatch`] as a single triangle list.
///
/// GPU resources are created lazily and the pipeline is rebuilt when the
/// surface format changes.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
}

impl MeshRenderer {
    const MIN_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `batch` and records one pass over `target`, blending on top
    /// of whatever the target already holds.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, batch: &MeshBatch) {
        if batch.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_capacity(ctx, batch.len());

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(batch.vertices()));

        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("skyline mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..batch.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skyline mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skyline mesh pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skyline mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Reflections and negative scales flip winding.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("mesh pipeline built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = grown_capacity(required);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("skyline mesh vbo"),
            size: (new_cap * std::mem::size_of::<MeshVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

#[inline]
fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().max(MeshRenderer::MIN_CAPACITY)
}

fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::shapes::RectShape;
    use crate::scene::SceneGraph;

    fn unit_triangle(color: Color) -> Geometry {
        Geometry::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            color,
        )
    }

    #[test]
    fn paint_applies_world_transform() {
        let mut batch = MeshBatch::new();
        let red = Color::from_premul(1.0, 0.0, 0.0, 1.0);
        batch.paint(&Transform2D::translation(2.0, 3.0), &unit_triangle(red));

        let pos: Vec<[f32; 2]> = batch.vertices().iter().map(|v| v.pos).collect();
        assert_eq!(pos, vec![[2.0, 3.0], [3.0, 3.0], [2.0, 4.0]]);
        assert!(batch.vertices().iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn batch_keeps_paint_order() {
        let mut batch = MeshBatch::new();
        let a = Color::from_premul(1.0, 0.0, 0.0, 1.0);
        let b = Color::from_premul(0.0, 0.0, 1.0, 1.0);
        batch.paint(&Transform2D::IDENTITY, &unit_triangle(a));
        batch.paint(&Transform2D::IDENTITY, &unit_triangle(b));

        assert_eq!(batch.len(), 6);
        assert_eq!(batch.vertices()[0].color, a.to_array());
        assert_eq!(batch.vertices()[5].color, b.to_array());
    }

    #[test]
    fn clear_empties_batch() {
        let mut batch = MeshBatch::new();
        batch.paint(&Transform2D::IDENTITY, &unit_triangle(Color::black()));
        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn scene_draw_fills_batch() {
        let mut g = SceneGraph::new();
        let root = g.add_composite();
        let rect = g.add_rect(RectShape::square(Vec2::zero(), 1.0), Color::black());
        g.add_child(root, rect).unwrap();
        g.set_local(rect, Transform2D::translation(1.0, 0.0)).unwrap();
        let scene = g.build().unwrap();

        let mut batch = MeshBatch::new();
        scene.draw(root, &Transform2D::IDENTITY, &mut batch);

        assert_eq!(batch.len(), 6);
        let min_x = batch.vertices().iter().map(|v| v.pos[0]).fold(f32::INFINITY, f32::min);
        assert!((min_x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn capacity_grows_by_powers_of_two() {
        assert_eq!(grown_capacity(1), 1024);
        assert_eq!(grown_capacity(1024), 1024);
        assert_eq!(grown_capacity(1025), 2048);
    }
}
