use std::collections::HashMap;
use std::f32::consts::FRAC_1_SQRT_2;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{
    CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle as LayoutStyle,
};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::Text;
use crate::text::FontSystem;

use super::common::{
    premul_alpha_blend, sampler_entry, texture_entry, uniform_entry, DynamicBuffer, QuadBuffers,
    QuadVertex, ViewportUniform, QUAD_INDEX_COUNT,
};

// ── atlas constants ────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas
/// Opaque block at the atlas origin, sampled for solid bars such as underlines.
const SOLID_BLOCK: u32 = 4;

// ── style constants ───────────────────────────────────────────────────────

const ITALIC_SHEAR: f32 = 0.2;
/// Offset of the second strike for bold, in logical pixels.
const BOLD_STRIKE: f32 = 1.0;
// Relative to character size.
const UNDERLINE_OFFSET: f32 = 0.08;
const UNDERLINE_THICKNESS: f32 = 0.06;

// ── cached glyph ──────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone)]
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// A glyph positioned in logical pixels, already resident in the atlas.
#[derive(Debug, Copy, Clone)]
struct PlacedGlyph {
    min: Vec2,
    max: Vec2,
    uv: CachedGlyph,
}

/// Laid-out glyphs of one `Text`, in logical pixels.
#[derive(Debug, Default)]
struct TextRun {
    glyphs: Vec<PlacedGlyph>,
    baseline: f32,
    left: f32,
    right: f32,
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `scene::Text`.
///
/// Maintains a 2048 × 2048 R8Unorm glyph atlas. Glyphs are rasterized on first
/// use via fontdue at the window's physical pixel size and cached for the
/// renderer's lifetime, keyed by `GlyphRasterConfig` (font, glyph, size).
///
/// Bold and italic are synthesized from the regular face: bold adds a second
/// strike offset to the right, italic shears each glyph around the baseline.
/// Outlines are drawn as eight offset copies in the outline color beneath the
/// fill.
pub struct TextRenderer {
    // pipeline
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    // bindings
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    // atlas
    atlas_texture: Option<wgpu::Texture>,
    atlas_view: Option<wgpu::TextureView>,
    atlas_cursor_x: u32,
    atlas_cursor_y: u32,
    atlas_row_height: u32,
    atlas_full: bool,

    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    // geometry
    quad: Option<QuadBuffers>,
    instance_vbo: DynamicBuffer,
    instances: Vec<GlyphInstance>,

    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            sampler: None,
            atlas_texture: None,
            atlas_view: None,
            atlas_cursor_x: SOLID_BLOCK + GLYPH_PADDING,
            atlas_cursor_y: 0,
            atlas_row_height: SOLID_BLOCK,
            atlas_full: false,
            glyph_cache: HashMap::new(),
            quad: None,
            instance_vbo: DynamicBuffer::new("easel text instance vbo", wgpu::BufferUsages::VERTEX),
            instances: Vec::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `texts` in order over `target`.
    ///
    /// Instance data is uploaded per call, so issue a single call per frame.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        texts: &[Text],
        fonts: &FontSystem,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_atlas(ctx);
        self.ensure_sampler(ctx);

        self.instances.clear();
        for text in texts {
            if !text.is_visible() {
                continue;
            }
            let Some(font) = text.font.and_then(|id| fonts.get(id)) else {
                log::warn!("TextRenderer: unknown FontId {:?}, skipping", text.font);
                continue;
            };

            let run = self.layout_run(ctx, text, font);
            build_instances(&run, text, &mut self.instances);
        }

        if self.instances.is_empty() {
            return;
        }

        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "easel text"));
        }
        if !self
            .instance_vbo
            .upload(ctx, bytemuck::cast_slice(&self.instances))
        {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.buffer() else { return };

        let mut rpass = target.begin_load_pass("easel text pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        quad.bind(&mut rpass);
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..self.instances.len() as u32);
    }

    /// Lays out `text` and makes sure every visible glyph is in the atlas.
    fn layout_run(&mut self, ctx: &RenderCtx<'_>, text: &Text, font: &fontdue::Font) -> TextRun {
        let scale = if ctx.scale_factor > 0.0 { ctx.scale_factor } else { 1.0 };

        self.layout.reset(&LayoutSettings {
            x: text.position.x * scale,
            y: text.position.y * scale,
            ..LayoutSettings::default()
        });
        self.layout
            .append(&[font], &LayoutStyle::new(&text.string, text.size * scale, 0));

        let baseline = self
            .layout
            .lines()
            .and_then(|lines| lines.first())
            .map_or(text.position.y + text.size, |line| line.baseline_y / scale);

        // Snapshot so the borrow on `self.layout` ends before atlas uploads.
        let glyph_snap: Vec<(GlyphRasterConfig, f32, f32, usize, usize)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y, g.width, g.height))
            .collect();

        let mut run = TextRun {
            glyphs: Vec::with_capacity(glyph_snap.len()),
            baseline,
            left: text.position.x,
            right: text.position.x,
        };

        for (key, x, y, w, h) in glyph_snap {
            let Some(uv) = self.cached_glyph(ctx, font, key) else { continue };
            let min = Vec2::new(x / scale, y / scale);
            let max = Vec2::new((x + w as f32) / scale, (y + h as f32) / scale);
            run.right = run.right.max(max.x);
            run.glyphs.push(PlacedGlyph { min, max, uv });
        }

        run
    }

    fn cached_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        font: &fontdue::Font,
        key: GlyphRasterConfig,
    ) -> Option<CachedGlyph> {
        if let Some(cached) = self.glyph_cache.get(&key) {
            return Some(*cached);
        }

        let (metrics, bitmap) = font.rasterize_config(key);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }
        let entry = self.try_place_glyph(ctx, &bitmap, metrics.width as u32, metrics.height as u32)?;
        self.glyph_cache.insert(key, entry);
        Some(entry)
    }

    // ── atlas helpers ──────────────────────────────────────────────────────

    fn try_place_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<CachedGlyph> {
        if self.atlas_full {
            return None;
        }

        if self.atlas_cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.atlas_cursor_y += self.atlas_row_height + GLYPH_PADDING;
            self.atlas_cursor_x = GLYPH_PADDING;
            self.atlas_row_height = 0;
        }

        if self.atlas_cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            log::warn!(
                "TextRenderer: glyph atlas is full ({ATLAS_SIZE}×{ATLAS_SIZE}); \
                 some glyphs will not be rendered"
            );
            self.atlas_full = true;
            return None;
        }

        let gx = self.atlas_cursor_x;
        let gy = self.atlas_cursor_y;
        let atlas = self.atlas_texture.as_ref()?;
        write_atlas(ctx, atlas, gx, gy, w, h, bitmap);

        self.atlas_cursor_x += w + GLYPH_PADDING;
        self.atlas_row_height = self.atlas_row_height.max(h);

        let atlas_f = ATLAS_SIZE as f32;
        Some(CachedGlyph {
            uv_min: [gx as f32 / atlas_f, gy as f32 / atlas_f],
            uv_max: [(gx + w) as f32 / atlas_f, (gy + h) as f32 / atlas_f],
        })
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("easel text bgl"),
            entries: &[
                uniform_entry::<ViewportUniform>(0, wgpu::ShaderStages::VERTEX),
                texture_entry(1),
                sampler_entry(2),
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("easel text pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel text pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), GlyphInstance::layout()],
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

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_atlas(&mut self, ctx: &RenderCtx<'_>) {
        if self.atlas_texture.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("easel text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let solid = [u8::MAX; (SOLID_BLOCK * SOLID_BLOCK) as usize];
        write_atlas(ctx, &texture, 0, 0, SOLID_BLOCK, SOLID_BLOCK, &solid);

        self.atlas_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.atlas_texture = Some(texture);
        self.atlas_cursor_x = SOLID_BLOCK + GLYPH_PADDING;
        self.atlas_cursor_y = 0;
        self.atlas_row_height = SOLID_BLOCK;
        self.atlas_full = false;
        self.glyph_cache.clear();
        self.bind_group = None;
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("easel text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(atlas_view) = self.atlas_view.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel text viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("easel text bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
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

fn write_atlas(
    ctx: &RenderCtx<'_>,
    atlas: &wgpu::Texture,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    bitmap: &[u8],
) {
    ctx.queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: atlas,
            mip_level: 0,
            origin: wgpu::Origin3d { x, y, z: 0 },
            aspect: wgpu::TextureAspect::All,
        },
        bitmap,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(w),
            rows_per_image: Some(h),
        },
        wgpu::Extent3d {
            width: w,
            height: h,
            depth_or_array_layers: 1,
        },
    );
}

// ── instance building ─────────────────────────────────────────────────────

/// Appends the instances for one text: outline copies first, then the fill.
fn build_instances(run: &TextRun, text: &Text, out: &mut Vec<GlyphInstance>) {
    let shear = if text.style.italic { ITALIC_SHEAR } else { 0.0 };
    let bold = [0.0, BOLD_STRIKE];
    let strikes: &[f32] = if text.style.bold { &bold } else { &bold[..1] };
    let underline = text
        .style
        .underlined
        .then(|| underline_rect(run, text.size));

    if text.outline_thickness > 0.0 && text.outline.a > 0 {
        let color = Color::from(text.outline).to_array();
        for offset in outline_offsets(text.outline_thickness) {
            push_glyphs(run, strikes, offset, shear, color, out);
        }
        if let Some((min, max)) = underline {
            let grow = Vec2::new(text.outline_thickness, text.outline_thickness);
            out.push(GlyphInstance::solid(min - grow, max + grow, color));
        }
    }

    let color = Color::from(text.fill).to_array();
    push_glyphs(run, strikes, Vec2::zero(), shear, color, out);
    if let Some((min, max)) = underline {
        out.push(GlyphInstance::solid(min, max, color));
    }
}

fn push_glyphs(
    run: &TextRun,
    strikes: &[f32],
    offset: Vec2,
    shear: f32,
    color: [f32; 4],
    out: &mut Vec<GlyphInstance>,
) {
    for glyph in &run.glyphs {
        for &strike in strikes {
            let d = offset + Vec2::new(strike, 0.0);
            out.push(GlyphInstance {
                dst_min: (glyph.min + d).to_array(),
                dst_max: (glyph.max + d).to_array(),
                uv_min: glyph.uv.uv_min,
                uv_max: glyph.uv.uv_max,
                color,
                shear: [shear, run.baseline + offset.y],
            });
        }
    }
}

/// Eight directions at distance `radius`, clockwise from the right.
fn outline_offsets(radius: f32) -> [Vec2; 8] {
    let d = radius * FRAC_1_SQRT_2;
    [
        Vec2::new(radius, 0.0),
        Vec2::new(d, d),
        Vec2::new(0.0, radius),
        Vec2::new(-d, d),
        Vec2::new(-radius, 0.0),
        Vec2::new(-d, -d),
        Vec2::new(0.0, -radius),
        Vec2::new(d, -d),
    ]
}

/// Underline bar spanning the run, just below the baseline.
fn underline_rect(run: &TextRun, size: f32) -> (Vec2, Vec2) {
    let top = run.baseline + size * UNDERLINE_OFFSET;
    let thickness = (size * UNDERLINE_THICKNESS).max(1.0);
    (
        Vec2::new(run.left, top),
        Vec2::new(run.right, top + thickness),
    )
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (56 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
///  offset 48  shear    [f32; 2]   loc 6  (factor, baseline y)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
    shear: [f32; 2],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4, // color
        6 => Float32x2  // shear
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// A solid bar sampled from the center of the opaque atlas block.
    fn solid(min: Vec2, max: Vec2, color: [f32; 4]) -> Self {
        let c = (SOLID_BLOCK as f32 * 0.5) / ATLAS_SIZE as f32;
        Self {
            dst_min: min.to_array(),
            dst_max: max.to_array(),
            uv_min: [c, c],
            uv_max: [c, c],
            color,
            shear: [0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgba8;
    use crate::scene::TextStyle;
    use crate::text::FontId;

    fn run_of(n: usize) -> TextRun {
        let uv = CachedGlyph {
            uv_min: [0.1, 0.1],
            uv_max: [0.2, 0.2],
        };
        let glyphs = (0..n)
            .map(|i| PlacedGlyph {
                min: Vec2::new(10.0 * i as f32, 0.0),
                max: Vec2::new(10.0 * i as f32 + 8.0, 12.0),
                uv,
            })
            .collect();
        TextRun {
            glyphs,
            baseline: 10.0,
            left: 0.0,
            right: 10.0 * n as f32,
        }
    }

    fn text() -> Text {
        Text::new("abc", Some(FontId(0)), 20.0).with_fill(Rgba8::BLACK)
    }

    #[test]
    fn plain_text_is_one_instance_per_glyph() {
        let mut out = Vec::new();
        build_instances(&run_of(3), &text(), &mut out);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|g| g.shear[0] == 0.0));
        assert!(out.iter().all(|g| g.color == [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn outline_is_drawn_beneath_the_fill() {
        let t = text().with_outline(Rgba8::RED, 3.0);
        let mut out = Vec::new();
        build_instances(&run_of(2), &t, &mut out);

        assert_eq!(out.len(), 2 * 8 + 2);
        let red = Color::from(Rgba8::RED).to_array();
        assert!(out[..16].iter().all(|g| g.color == red));
        assert!(out[16..].iter().all(|g| g.color == [0.0, 0.0, 0.0, 1.0]));
        assert_eq!(out[0].dst_min, [3.0, 0.0]);
    }

    #[test]
    fn transparent_outline_is_skipped() {
        let t = text().with_outline(Rgba8::TRANSPARENT, 3.0);
        let mut out = Vec::new();
        build_instances(&run_of(2), &t, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn bold_adds_a_second_strike_and_italic_shears() {
        let t = text().with_style(TextStyle {
            bold: true,
            italic: true,
            underlined: false,
        });
        let mut out = Vec::new();
        build_instances(&run_of(1), &t, &mut out);

        assert_eq!(out.len(), 2);
        assert!(out[1].dst_min[0] > out[0].dst_min[0]);
        assert!(out.iter().all(|g| g.shear == [ITALIC_SHEAR, 10.0]));
    }

    #[test]
    fn underline_spans_the_run_below_the_baseline() {
        let t = text().with_style(TextStyle {
            underlined: true,
            ..TextStyle::REGULAR
        });
        let mut out = Vec::new();
        build_instances(&run_of(3), &t, &mut out);

        assert_eq!(out.len(), 4);
        let bar = out[3];
        assert_eq!(bar.dst_min[0], 0.0);
        assert_eq!(bar.dst_max[0], 30.0);
        assert!(bar.dst_min[1] > 10.0);
        assert!(bar.dst_max[1] - bar.dst_min[1] >= 1.0);
        assert_eq!(bar.uv_min, bar.uv_max);
        assert_eq!(bar.shear, [0.0, 0.0]);
    }

    #[test]
    fn outline_offsets_lie_on_the_radius() {
        for o in outline_offsets(3.0) {
            let len = (o.x * o.x + o.y * o.y).sqrt();
            assert!((len - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn solid_uv_is_inside_the_opaque_block() {
        let g = GlyphInstance::solid(Vec2::zero(), Vec2::new(1.0, 1.0), [1.0; 4]);
        let block = SOLID_BLOCK as f32 / ATLAS_SIZE as f32;
        assert!(g.uv_min[0] > 0.0 && g.uv_min[0] < block);
    }
}
