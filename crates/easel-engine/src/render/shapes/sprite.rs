use std::collections::{HashMap, HashSet};

use bytemuck::{Pod, Zeroable};

use crate::bitmap::{Bitmap, BitmapId};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::Sprite;

use super::common::{
    premul_alpha_blend, sampler_entry, texture_entry, uniform_entry, DynamicBuffer, QuadBuffers,
    QuadVertex, ViewportUniform, QUAD_INDEX_COUNT,
};

/// A bitmap resident on the GPU.
struct SpriteTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Renderer for `scene::Sprite`.
///
/// Each bitmap is uploaded to an `Rgba8UnormSrgb` texture the first time it is
/// drawn and cached by [`BitmapId`]. Sprites are drawn at native pixel size with
/// nearest sampling. A bitmap larger than the device's 2D texture limit is
/// reported once and its sprites are skipped.
pub struct SpriteRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    textures: HashMap<BitmapId, SpriteTexture>,
    oversized: HashSet<BitmapId>,

    quad: Option<QuadBuffers>,
    instance_vbo: DynamicBuffer,
    instances: Vec<SpriteInstance>,
    draws: Vec<BitmapId>,
}

impl Default for SpriteRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            viewport_ubo: None,
            sampler: None,
            textures: HashMap::new(),
            oversized: HashSet::new(),
            quad: None,
            instance_vbo: DynamicBuffer::new("easel sprite instance vbo", wgpu::BufferUsages::VERTEX),
            instances: Vec::new(),
            draws: Vec::new(),
        }
    }
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `sprites` in order over `target`. Sprites without a bitmap are skipped.
    ///
    /// Instance data is uploaded per call, so issue a single call per frame.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        sprites: &[Sprite],
    ) {
        self.instances.clear();
        self.draws.clear();
        for sprite in sprites {
            let Some(bitmap) = sprite.bitmap.as_ref() else { continue };
            if bitmap.width() == 0 || bitmap.height() == 0 {
                continue;
            }
            self.instances.push(SpriteInstance::from(sprite));
            self.draws.push(bitmap.id());
        }
        if self.instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        for bitmap in sprites.iter().filter_map(|s| s.bitmap.as_ref()) {
            self.ensure_texture(ctx, bitmap);
        }
        self.write_viewport_uniform(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "easel sprite"));
        }
        if !self
            .instance_vbo
            .upload(ctx, bytemuck::cast_slice(&self.instances))
        {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.buffer() else { return };

        let mut rpass = target.begin_load_pass("easel sprite pass");
        rpass.set_pipeline(pipeline);
        quad.bind(&mut rpass);
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));

        for (i, id) in self.draws.iter().enumerate() {
            let Some(tex) = self.textures.get(id) else { continue };
            let i = i as u32;
            rpass.set_bind_group(0, &tex.bind_group, &[]);
            rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, i..i + 1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel sprite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("easel sprite bgl"),
            entries: &[
                uniform_entry::<ViewportUniform>(0, wgpu::ShaderStages::VERTEX),
                texture_entry(1),
                sampler_entry(2),
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("easel sprite pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel sprite pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), SpriteInstance::layout()],
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

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel sprite viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("easel sprite sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.viewport_ubo = Some(viewport_ubo);
        self.sampler = Some(sampler);

        // Bind groups reference the old layout and uniform buffer.
        self.textures.clear();
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>, bitmap: &Bitmap) {
        if self.textures.contains_key(&bitmap.id()) || self.oversized.contains(&bitmap.id()) {
            return;
        }

        let max = ctx.device.limits().max_texture_dimension_2d;
        if !fits_texture_limits(bitmap.width(), bitmap.height(), max) {
            log::warn!(
                "bitmap {}x{} exceeds the {max}px texture limit; sprite skipped",
                bitmap.width(),
                bitmap.height()
            );
            self.oversized.insert(bitmap.id());
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(viewport_ubo) = self.viewport_ubo.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let size = wgpu::Extent3d {
            width: bitmap.width(),
            height: bitmap.height(),
            depth_or_array_layers: 1,
        };
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("easel sprite texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bitmap.pixels(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bitmap.width() * 4),
                rows_per_image: Some(bitmap.height()),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("easel sprite bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        log::debug!(
            "SpriteRenderer: uploaded {}x{} bitmap",
            bitmap.width(),
            bitmap.height()
        );
        self.textures.insert(
            bitmap.id(),
            SpriteTexture {
                _texture: texture,
                bind_group,
            },
        );
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform::from_ctx(ctx);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}

/// Whether a `width` x `height` bitmap fits a 2D texture of at most `max` texels per side.
fn fits_texture_limits(width: u32, height: u32, max: u32) -> bool {
    width <= max && height <= max
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct SpriteInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
}

impl SpriteInstance {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2  // dst_max
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&Sprite> for SpriteInstance {
    fn from(sprite: &Sprite) -> Self {
        Self {
            dst_min: sprite.position.to_array(),
            dst_max: (sprite.position + sprite.size()).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn instance_covers_native_size_at_position() {
        let bmp = Bitmap::from_rgba8(4, 3, vec![255; 4 * 3 * 4]).expect("bitmap");
        let sprite = Sprite::new(Some(bmp)).with_position(Vec2::new(300.0, 180.0));
        let inst = SpriteInstance::from(&sprite);
        assert_eq!(inst.dst_min, [300.0, 180.0]);
        assert_eq!(inst.dst_max, [304.0, 183.0]);
    }

    #[test]
    fn texture_limit_applies_to_each_side() {
        assert!(fits_texture_limits(8192, 8192, 8192));
        assert!(fits_texture_limits(1, 1, 8192));
        assert!(!fits_texture_limits(9000, 10, 8192));
        assert!(!fits_texture_limits(10, 8193, 8192));
    }

    #[test]
    fn sprite_without_bitmap_is_empty() {
        let sprite = Sprite::new(None).with_position(Vec2::new(5.0, 5.0));
        let inst = SpriteInstance::from(&sprite);
        assert_eq!(inst.dst_min, inst.dst_max);
    }
}
