use crate::dom::DomImage;
use planes_core::constants::CLEAR_COLOR;
use planes_core::{
    ImageId, MeshFactory, MeshRelease, PlaneGeometry, PlaneMaterial, PlaneScene, PlanesError,
    SceneRenderer,
};
use web_sys as web;

mod helpers;
mod planes;
mod post;
mod targets;

pub use planes::PlaneMesh;
use planes::{CameraUniform, PlaneResources};
use post::PostResources;
use targets::RenderTargets;

/// WebGPU (or WebGL2 fallback) state: plane pass into an offscreen target,
/// then the wipe pass onto the canvas surface.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    planes: PlaneResources,
    post: PostResources,
    post_bind_group: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, (width, height): (u32, u32)) -> anyhow::Result<Self> {
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
                    // WebGL2 downlevel limits keep the fallback path working
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
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
        let width = width.max(1);
        let height = height.max(1);
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
        log::info!("surface {}x{} {:?}", width, height, format);

        let backend = adapter.get_info().backend;
        let scene_format = crate::constants::scene_format(backend);
        log::info!("{:?} backend, scene target {:?}", backend, scene_format);
        let targets = RenderTargets::new(&device, scene_format, width, height);
        let linear_sampler = helpers::linear_sampler(&device, "linear_sampler");
        let planes = planes::create_plane_resources(&device, planes_core::PLANE_WGSL, scene_format);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(planes_core::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let post_bind_group =
            post::create_post_bind_group(&device, &post, &targets.scene_view, &linear_sampler);

        let [r, g, b, a] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            planes,
            post,
            post_bind_group,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
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
            self.targets.recreate(&self.device, width, height);
            self.rebuild_post_bind_group();
        }
    }

    /// Re-applies the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn rebuild_post_bind_group(&mut self) {
        self.post_bind_group = post::create_post_bind_group(
            &self.device,
            &self.post,
            &self.targets.scene_view,
            &self.linear_sampler,
        );
    }
}

impl MeshRelease for GpuState {
    type Handle = PlaneMesh;

    fn release_mesh(&mut self, handle: PlaneMesh) {
        handle.destroy();
    }
}

impl MeshFactory<DomImage> for GpuState {
    fn create_mesh(
        &mut self,
        id: ImageId,
        source: &DomImage,
        geometry: &PlaneGeometry,
        material: &PlaneMaterial,
    ) -> Result<PlaneMesh, PlanesError> {
        planes::create_plane_mesh(
            &self.device,
            &self.queue,
            &self.planes,
            &self.linear_sampler,
            id,
            source,
            geometry,
            material,
        )
    }
}

impl SceneRenderer<PlaneMesh> for GpuState {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, scene: &PlaneScene<PlaneMesh>) -> Result<(), wgpu::SurfaceError> {
        let (w, h) = scene.viewport().backing_size();
        self.resize_if_needed(w, h);

        let camera = CameraUniform::new(scene.camera().view_projection());
        self.queue
            .write_buffer(&self.planes.camera_buffer, 0, bytemuck::bytes_of(&camera));
        for record in scene.records() {
            self.queue.write_buffer(
                &record.handle.uniform_buffer,
                0,
                bytemuck::bytes_of(&record.material.uniforms),
            );
        }
        self.queue.write_buffer(
            &self.post.uniform_buffer,
            0,
            bytemuck::bytes_of(scene.post().uniforms()),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.planes.pipeline);
            rpass.set_bind_group(0, &self.planes.camera_bind_group, &[]);
            for record in scene.records() {
                let mesh = &record.handle;
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        post::blit(
            &mut encoder,
            "wipe_pass",
            &view,
            self.clear_color,
            &self.post.wipe_pipeline,
            &self.post_bind_group,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
