use std::path::PathBuf;

use campus_engine::device::GpuInit;
use campus_engine::logging::LoggingConfig;
use campus_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Font files tried in order until one parses.
pub const DEFAULT_FONT_PATHS: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Seed for the cloud layout. Fixed so every launch shows the same sky.
pub const DEFAULT_CLOUD_SEED: u64 = 0x00C1_0D5E;

/// Everything `main` can tweak before the window opens.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub vsync: bool,
    pub font_paths: Vec<PathBuf>,
    pub cloud_seed: u64,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "3D Smart Campus Simulation - Enhanced Realism".to_string(),
            width: 1280.0,
            height: 720.0,
            vsync: true,
            font_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
            cloud_seed: DEFAULT_CLOUD_SEED,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width.max(1.0), self.height.max(1.0)),
        }
    }

    /// Scene colours are display values, so the surface stays non-sRGB.
    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            prefer_srgb: false,
            present_mode: if self.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            ..GpuInit::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_a_720p_window() {
        let cfg = AppConfig::default();
        let rt = cfg.runtime_config();
        assert_eq!(rt.title, "3D Smart Campus Simulation - Enhanced Realism");
        assert_eq!(rt.initial_size, LogicalSize::new(1280.0, 720.0));
    }

    #[test]
    fn degenerate_size_is_clamped() {
        let cfg = AppConfig { width: 0.0, height: -5.0, ..AppConfig::default() };
        assert_eq!(cfg.runtime_config().initial_size, LogicalSize::new(1.0, 1.0));
    }

    #[test]
    fn surface_is_not_srgb() {
        let gpu = AppConfig::default().gpu_init();
        assert!(!gpu.prefer_srgb);
        assert_eq!(gpu.present_mode, wgpu::PresentMode::AutoVsync);

        let no_vsync = AppConfig { vsync: false, ..AppConfig::default() }.gpu_init();
        assert_eq!(no_vsync.present_mode, wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn font_paths_start_with_dejavu() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.font_paths.len(), DEFAULT_FONT_PATHS.len());
        assert!(cfg.font_paths[0].ends_with("DejaVuSans.ttf"));
    }
}
