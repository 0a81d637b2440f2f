use crate::constants::{EXPOSURE, RAY_FAR};
use crate::core::{Camera, PostEffect, SceneDescriptor, MAX_PROPS};
use web_sys as web;

mod helpers;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PropPacked {
    center: [f32; 4],
    half_ext: [f32; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    inv_view_proj: [[f32; 4]; 4],
    eye_time: [f32; 4],
    resolution: [f32; 4],
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    light_params: [f32; 4],
    backdrop_center: [f32; 4],
    backdrop_half: [f32; 4],
    backdrop_color: [f32; 4],
    model: [f32; 4],
    props: [PropPacked; MAX_PROPS],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 4],
    misc: [f32; 4],
}

/// Per-frame inputs the renderer needs besides the static scene tables.
pub struct FrameInputs<'s> {
    pub camera: &'s Camera,
    pub scene: &'s SceneDescriptor,
    pub model_yaw: f32,
    pub hovered: bool,
    pub effect: PostEffect,
    pub dt_sec: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Raymarched scene into HDR
    scene_pipeline: wgpu::RenderPipeline,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    // Composite to swapchain
    hdr_tex: wgpu::Texture,
    hdr_view: wgpu::TextureView,
    linear_sampler: wgpu::Sampler,
    post_bgl: wgpu::BindGroupLayout,
    post_uniform_buffer: wgpu::Buffer,
    post_bind_group: wgpu::BindGroup,
    composite_pipeline: wgpu::RenderPipeline,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (hdr_tex, hdr_view) = helpers::create_color_texture(
            &device,
            "hdr_tex",
            width,
            height,
            HDR_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );

        // Scene pass
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let scene_pipeline = helpers::make_fullscreen_pipeline(
            &device,
            "scene_pipeline",
            &scene_pl,
            &scene_shader,
            "fs_scene",
            HDR_FORMAT,
            None,
        );
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        // Composite pass
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    // tex
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    // sampler
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                // uniforms
                helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let post_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("post_uniforms"),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let post_bind_group = make_post_bind_group(
            &device,
            &post_bgl,
            &hdr_view,
            &linear_sampler,
            &post_uniform_buffer,
        );
        let post_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_pl"),
            bind_group_layouts: &[&post_bgl],
            push_constant_ranges: &[],
        });
        let composite_pipeline = helpers::make_fullscreen_pipeline(
            &device,
            "composite_pipeline",
            &post_pl,
            &post_shader,
            "fs_composite",
            format,
            Some(wgpu::BlendState::REPLACE),
        );

        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            hdr_tex,
            hdr_view,
            linear_sampler,
            post_bgl,
            post_uniform_buffer,
            post_bind_group,
            composite_pipeline,
            width,
            height,
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate the offscreen target and the bind group sampling it
            let (tex, view) = helpers::create_color_texture(
                &self.device,
                "hdr_tex",
                width,
                height,
                HDR_FORMAT,
                wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            );
            self.hdr_tex.destroy();
            self.hdr_tex = tex;
            self.hdr_view = view;
            self.post_bind_group = make_post_bind_group(
                &self.device,
                &self.post_bgl,
                &self.hdr_view,
                &self.linear_sampler,
                &self.post_uniform_buffer,
            );
        }
    }

    pub fn render(&mut self, frame_in: &FrameInputs<'_>) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += frame_in.dt_sec.max(0.0);
        let scene_u = pack_scene(frame_in, self.width, self.height, self.time_accum);
        let post_u = PostUniforms {
            resolution: [
                self.width as f32,
                self.height as f32,
                frame_in.effect.shader_mode() as f32,
                frame_in.effect.param(),
            ],
            misc: [self.time_accum, EXPOSURE, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&scene_u));
        self.queue
            .write_buffer(&self.post_uniform_buffer, 0, bytemuck::bytes_of(&post_u));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let [cr, cg, cb] = frame_in.scene.clear_color;
        let clear = wgpu::Color {
            r: cr as f64,
            g: cg as f64,
            b: cb as f64,
            a: 1.0,
        };

        // Pass 1: raymarched scene -> HDR
        self.blit(
            &mut encoder,
            "scene_pass",
            &self.hdr_view,
            clear,
            &self.scene_pipeline,
            &self.scene_bind_group,
        );

        // Pass 2: effect + tonemap -> swapchain
        self.blit(
            &mut encoder,
            "composite",
            &view,
            clear,
            &self.composite_pipeline,
            &self.post_bind_group,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigure the surface after `Lost`/`Outdated`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn blit(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        label: &str,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
        pipeline: &wgpu::RenderPipeline,
        bg0: &wgpu::BindGroup,
    ) {
        let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        r.set_pipeline(pipeline);
        r.set_bind_group(0, bg0, &[]);
        r.draw(0..3, 0..1);
        drop(r);
    }
}

fn make_post_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    src: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("post_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(src),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: uniforms.as_entire_binding(),
            },
        ],
    })
}

fn pack_scene(f: &FrameInputs<'_>, width: u32, height: u32, time: f32) -> SceneUniforms {
    let scene = f.scene;
    let v4 = |v: glam::Vec3, w: f32| [v.x, v.y, v.z, w];
    let mut props = [PropPacked::default(); MAX_PROPS];
    for (slot, p) in props.iter_mut().zip(scene.props.iter()) {
        *slot = PropPacked {
            center: v4(p.center, 0.0),
            half_ext: v4(p.half_extents, 0.0),
            color: v4(p.color, 1.0),
        };
    }
    let light = &scene.point_light;
    let inv_view_proj = f.camera.view_proj().inverse();
    SceneUniforms {
        inv_view_proj: inv_view_proj.to_cols_array_2d(),
        eye_time: v4(f.camera.eye, time),
        resolution: [
            width as f32,
            height as f32,
            scene.props.len().min(MAX_PROPS) as f32,
            scene.model.scale,
        ],
        ambient: v4(scene.ambient.color, scene.ambient.intensity),
        light_pos: v4(light.position, light.intensity),
        light_color: v4(light.color, if light.cast_shadow { 1.0 } else { 0.0 }),
        light_params: [
            light.distance,
            light.decay,
            if f.hovered { 1.0 } else { 0.0 },
            RAY_FAR,
        ],
        backdrop_center: v4(scene.backdrop.center, 0.0),
        backdrop_half: v4(scene.backdrop.size * 0.5, 0.0),
        backdrop_color: v4(scene.backdrop.color, 1.0),
        model: v4(scene.model.anchor, f.model_yaw),
        props,
    }
}
