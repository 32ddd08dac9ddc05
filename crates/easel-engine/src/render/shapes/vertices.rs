use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{PrimitiveMode, Vertex, VertexArray};

use super::common::{premul_alpha_blend, uniform_entry, DynamicBuffer, ViewportUniform};

/// Renderer for `scene::VertexArray`.
///
/// Builds one pipeline per GPU topology on first use. Quads have no GPU topology
/// and are drawn as indexed triangle lists, two triangles per quad.
pub struct VertexArrayRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    shader: Option<wgpu::ShaderModule>,
    pipeline_layout: Option<wgpu::PipelineLayout>,
    pipelines: HashMap<wgpu::PrimitiveTopology, wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vbo: DynamicBuffer,
    ibo: DynamicBuffer,

    scratch_vertices: Vec<GpuVertex>,
    scratch_indices: Vec<u32>,
}

impl Default for VertexArrayRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            shader: None,
            pipeline_layout: None,
            pipelines: HashMap::new(),
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            vbo: DynamicBuffer::new("easel vertex array vbo", wgpu::BufferUsages::VERTEX),
            ibo: DynamicBuffer::new("easel vertex array ibo", wgpu::BufferUsages::INDEX),
            scratch_vertices: Vec::new(),
            scratch_indices: Vec::new(),
        }
    }
}

impl VertexArrayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the complete primitives of `vertices` over `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        vertices: &VertexArray,
    ) {
        let drawable = vertices.drawable();
        if drawable.is_empty() {
            return;
        }

        let mode = vertices.mode();
        let topology = topology_for(mode);

        self.ensure_layout(ctx);
        self.ensure_pipeline(ctx, topology);
        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);

        self.scratch_vertices.clear();
        self.scratch_vertices
            .extend(drawable.iter().copied().map(GpuVertex::from));
        if !self
            .vbo
            .upload(ctx, bytemuck::cast_slice(&self.scratch_vertices))
        {
            return;
        }

        let index_count = if mode == PrimitiveMode::Quads {
            self.scratch_indices.clear();
            quad_triangle_indices(drawable.len() / 4, &mut self.scratch_indices);
            if !self
                .ibo
                .upload(ctx, bytemuck::cast_slice(&self.scratch_indices))
            {
                return;
            }
            Some(self.scratch_indices.len() as u32)
        } else {
            None
        };

        let Some(pipeline) = self.pipelines.get(&topology) else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.buffer() else { return };

        let mut rpass = target.begin_load_pass("easel vertex array pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        match index_count {
            Some(count) => {
                let Some(ibo) = self.ibo.buffer() else { return };
                rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..count, 0, 0..1);
            }
            None => rpass.draw(0..drawable.len() as u32, 0..1),
        }
    }

    fn ensure_layout(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline_layout.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel vertex array shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/vertices.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("easel vertex array bgl"),
            entries: &[uniform_entry::<ViewportUniform>(0, wgpu::ShaderStages::VERTEX)],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("easel vertex array pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.shader = Some(shader);
        self.pipeline_layout = Some(pipeline_layout);
        self.bind_group_layout = Some(bgl);

        // Everything below depends on the layout; rebuild lazily.
        self.pipelines.clear();
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, topology: wgpu::PrimitiveTopology) {
        if self.pipelines.contains_key(&topology) {
            return;
        }
        let Some(shader) = self.shader.as_ref() else { return };
        let Some(layout) = self.pipeline_layout.as_ref() else { return };

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel vertex array pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GpuVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Clicked shapes have arbitrary winding.
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

        log::debug!("VertexArrayRenderer: built {topology:?} pipeline");
        self.pipelines.insert(topology, pipeline);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel vertex array viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("easel vertex array bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform::from_ctx(ctx);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}

/// GPU topology used to draw `mode`.
fn topology_for(mode: PrimitiveMode) -> wgpu::PrimitiveTopology {
    match mode {
        PrimitiveMode::Points => wgpu::PrimitiveTopology::PointList,
        PrimitiveMode::Lines => wgpu::PrimitiveTopology::LineList,
        PrimitiveMode::Triangles | PrimitiveMode::Quads => wgpu::PrimitiveTopology::TriangleList,
        PrimitiveMode::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
    }
}

/// Appends triangle-list indices for `quads` consecutive quads (a, b, c, d):
/// triangles (a, b, c) and (a, c, d).
fn quad_triangle_indices(quads: usize, out: &mut Vec<u32>) {
    out.reserve(quads * 6);
    for q in 0..quads as u32 {
        let base = q * 4;
        out.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct GpuVertex {
    pos: [f32; 2],
    color: [f32; 4], // linear premultiplied
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<Vertex> for GpuVertex {
    fn from(v: Vertex) -> Self {
        Self {
            pos: v.position.to_array(),
            color: Color::from(v.color).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Rgba8;

    #[test]
    fn every_mode_has_a_topology() {
        assert_eq!(topology_for(PrimitiveMode::Points), wgpu::PrimitiveTopology::PointList);
        assert_eq!(topology_for(PrimitiveMode::Lines), wgpu::PrimitiveTopology::LineList);
        assert_eq!(
            topology_for(PrimitiveMode::TriangleStrip),
            wgpu::PrimitiveTopology::TriangleStrip
        );
        assert_eq!(topology_for(PrimitiveMode::Quads), topology_for(PrimitiveMode::Triangles));
    }

    #[test]
    fn quads_split_into_two_triangles_each() {
        let mut out = Vec::new();
        quad_triangle_indices(2, &mut out);
        assert_eq!(out, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn zero_quads_emit_nothing() {
        let mut out = Vec::new();
        quad_triangle_indices(0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn gpu_vertex_keeps_position_and_converts_color() {
        let gv = GpuVertex::from(Vertex::new(Vec2::new(15.0, 20.0), Rgba8::RED));
        assert_eq!(gv.pos, [15.0, 20.0]);
        assert_eq!(gv.color[1], 0.0);
        assert!((gv.color[0] - 1.0).abs() < 1e-4);
        assert!((gv.color[3] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn gpu_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
    }
}
