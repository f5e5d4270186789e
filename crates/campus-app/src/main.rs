mod app;
mod config;
mod hud;
mod scene;

use anyhow::Result;
use campus_engine::logging::init_logging;
use campus_engine::text::FontSystem;
use campus_engine::window::Runtime;

use crate::app::CampusApp;
use crate::config::AppConfig;

fn main() -> Result<()> {
    // Startup banner, printed before the window opens.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║      INTERACTIVE 3D SMART CAMPUS       ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  N           toggle day / night        ║");
    println!("  ║  left drag   orbit camera              ║");
    println!("  ║  right drag  pan camera                ║");
    println!("  ║  wheel       zoom                      ║");
    println!("  ║  arrows      pan                       ║");
    println!("  ║  click       select building / HUD     ║");
    println!("  ║  ESC         exit                      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let config = AppConfig::default();
    init_logging(config.logging.clone());

    let mut fonts = FontSystem::new();
    let font = match fonts.load_first_available(&config.font_paths) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("{e}; HUD text and labels are disabled");
            None
        }
    };

    let app = CampusApp::new(fonts, font, config.cloud_seed);
    Runtime::run(config.runtime_config(), config.gpu_init(), app)
}
