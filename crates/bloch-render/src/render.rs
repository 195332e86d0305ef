use bloch_core::geometry::{cuboid, torus, uv_sphere};
use bloch_core::{
    SceneConfig, Scenery, CUBE_SIZE, EQUATOR_TUBE, SPHERE_SEGMENTS,
};
use wgpu;
use wgpu::util::DeviceExt;

pub(crate) mod helpers;
pub(crate) mod scene;
pub(crate) mod targets;

use helpers::MeshBuffers;
use scene::{FrameScene, Globals, GROUP_EQUATOR, GROUP_HEAD, GROUP_SPHERE};
use targets::DepthTarget;

pub struct Renderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,

    // Meshes
    sphere_hi: MeshBuffers,
    sphere_lo: MeshBuffers,
    equator: MeshBuffers,
    cube: MeshBuffers,

    // Instances
    star_instances: wgpu::Buffer,
    star_count: u32,
    cube_instances: wgpu::Buffer,
    cube_count: u32,
    group_instances: wgpu::Buffer,

    // Lines
    static_lines: wgpu::Buffer,
    static_line_count: u32,
    vector_line: wgpu::Buffer,

    radius: f32,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> Renderer<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        scene_config: &SceneConfig,
        scenery: &Scenery,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
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
        log::info!("[render] surface {}x{} format={:?}", width, height, format);

        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(bloch_core::SCENE_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline = helpers::make_mesh_pipeline(&device, &pl, &shader, format, false);
        let translucent_pipeline =
            helpers::make_mesh_pipeline(&device, &pl, &shader, format, true);
        let line_pipeline = helpers::make_line_pipeline(&device, &pl, &shader, format);

        let radius = scene_config.sphere_radius;
        let sphere_hi = helpers::upload_mesh(
            &device,
            "sphere_hi",
            &uv_sphere(1.0, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        );
        let sphere_lo = helpers::upload_mesh(&device, "sphere_lo", &uv_sphere(1.0, 16, 16));
        let equator = helpers::upload_mesh(
            &device,
            "equator",
            &torus(radius, EQUATOR_TUBE, 16, 100),
        );
        let cube = helpers::upload_mesh(&device, "cube", &cuboid(CUBE_SIZE));

        let stars = scene::star_instances(&scenery.stars);
        let cubes = scene::cube_instances(&scenery.cubes);
        let star_instances = helpers::instance_buffer(&device, "star_instances", &stars);
        let cube_instances = helpers::instance_buffer(&device, "cube_instances", &cubes);
        let group_instances = helpers::instance_buffer(
            &device,
            "group_instances",
            &scene::group_instances(0.0, glam::Vec3::new(0.0, 0.0, radius), radius),
        );

        let lines = scene::static_lines(radius);
        let static_lines = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("static_lines"),
            contents: bytemuck::cast_slice(&lines),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let vector_line = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vector_line"),
            contents: bytemuck::cast_slice(&scene::vector_line(glam::Vec3::new(0.0, 0.0, radius))),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            globals_buffer,
            globals_bind_group,
            opaque_pipeline,
            translucent_pipeline,
            line_pipeline,
            sphere_hi,
            sphere_lo,
            equator,
            cube,
            star_instances,
            star_count: stars.len() as u32,
            cube_instances,
            cube_count: cubes.len() as u32,
            group_instances,
            static_lines,
            static_line_count: lines.len() as u32,
            vector_line,
            radius,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            },
        })
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
    }

    /// Draw one frame. Lost or outdated surfaces are reconfigured for the
    /// next frame and reported to the caller.
    pub fn render(&mut self, frame: &FrameScene) -> Result<(), wgpu::SurfaceError> {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.reconfigure();
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals::for_frame(frame)),
        );
        self.queue.write_buffer(
            &self.group_instances,
            0,
            bytemuck::cast_slice(&scene::group_instances(
                frame.group_rotation,
                frame.tip,
                self.radius,
            )),
        );
        self.queue.write_buffer(
            &self.vector_line,
            0,
            bytemuck::cast_slice(&scene::vector_line(frame.tip)),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            // Opaque: stars, cubes, vector head
            rpass.set_pipeline(&self.opaque_pipeline);
            draw_mesh(&mut rpass, &self.sphere_lo, &self.star_instances, 0..self.star_count);
            draw_mesh(&mut rpass, &self.cube, &self.cube_instances, 0..self.cube_count);
            draw_mesh(
                &mut rpass,
                &self.sphere_lo,
                &self.group_instances,
                GROUP_HEAD..GROUP_HEAD + 1,
            );

            // Lines: wireframe, axes, state vector
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.static_lines.slice(..));
            rpass.draw(0..self.static_line_count, 0..1);
            rpass.set_vertex_buffer(0, self.vector_line.slice(..));
            rpass.draw(0..2, 0..1);

            // Translucent: equator ring, then the sphere shell
            rpass.set_pipeline(&self.translucent_pipeline);
            draw_mesh(
                &mut rpass,
                &self.equator,
                &self.group_instances,
                GROUP_EQUATOR..GROUP_EQUATOR + 1,
            );
            draw_mesh(
                &mut rpass,
                &self.sphere_hi,
                &self.group_instances,
                GROUP_SPHERE..GROUP_SPHERE + 1,
            );
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn draw_mesh(
    rpass: &mut wgpu::RenderPass<'_>,
    mesh: &MeshBuffers,
    instances: &wgpu::Buffer,
    range: std::ops::Range<u32>,
) {
    if range.is_empty() {
        return;
    }
    rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
    rpass.set_vertex_buffer(1, instances.slice(..));
    rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
    rpass.draw_indexed(0..mesh.index_count, 0, range);
}
