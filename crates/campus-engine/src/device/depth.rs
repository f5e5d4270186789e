use winit::dpi::PhysicalSize;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Depth attachment sized to the surface.
///
/// Recreated lazily whenever the surface size changes.
#[derive(Default)]
pub struct DepthBuffer {
    view: Option<wgpu::TextureView>,
    size: PhysicalSize<u32>,
}

impl DepthBuffer {
    /// Returns a depth view matching `size`, recreating the texture if needed.
    pub fn ensure(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) -> &wgpu::TextureView {
        let size = PhysicalSize::new(size.width.max(1), size.height.max(1));
        let view = match self.view.take() {
            Some(view) if self.size == size => view,
            _ => {
                log::debug!("depth buffer sized to {}x{}", size.width, size.height);
                create_depth_view(device, size)
            }
        };
        self.size = size;
        self.view.insert(view)
    }

    /// Current view, if [`ensure`](Self::ensure) has run.
    #[inline]
    pub fn view(&self) -> Option<&wgpu::TextureView> {
        self.view.as_ref()
    }
}

fn create_depth_view(device: &wgpu::Device, size: PhysicalSize<u32>) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("campus depth"),
        size: wgpu::Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
