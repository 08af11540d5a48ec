use super::helpers;

/// Offscreen colour target the plane pass renders into and the wipe pass
/// samples from. Matches the surface size.
pub(crate) struct RenderTargets {
    pub(crate) format: wgpu::TextureFormat,
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (scene_tex, scene_view) = create_scene_texture(device, format, width, height);
        Self {
            format,
            scene_tex,
            scene_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.scene_tex.destroy();
        (self.scene_tex, self.scene_view) =
            create_scene_texture(device, self.format, width, height);
    }
}

fn create_scene_texture(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture(
        device,
        "scene_tex",
        width,
        height,
        format,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}
