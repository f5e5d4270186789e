use campus_engine::coords::Viewport;
use campus_engine::core::{App, AppControl, FrameCtx};
use campus_engine::mesh::MeshList;
use campus_engine::paint::Color;
use campus_engine::render::shapes::{RectRenderer, TextRenderer};
use campus_engine::render::{Lighting, MeshRenderer};
use campus_engine::scene::DrawList;
use campus_engine::text::{FontId, FontSystem};
use campus_engine::time::FixedStep;
use campus_engine::window::CursorIcon;
use campus_world::ambient::Clouds;
use campus_world::sky::{self as world_sky, GLOBAL_AMBIENT};
use campus_world::{Action, CampusState, ClickOutcome, Controller, DayNight, OrbitCamera};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::hud::{self, HudInput};
use crate::scene::{self, sky, SceneInput};

/// The campus viewer: world state plus the per-frame geometry it is drawn from.
pub struct CampusApp {
    camera: OrbitCamera,
    controller: Controller,
    state: CampusState,
    day_night: DayNight,
    clouds: Clouds,
    step: FixedStep,
    stars: Vec<Vec3>,
    twinkle: StdRng,

    fonts: FontSystem,
    font: Option<FontId>,
    cursor: CursorIcon,

    mesh: MeshList,
    sky: DrawList,
    hud: DrawList,

    // The sky and HUD each upload their own instance buffer, so they need
    // separate renderers to coexist in one frame.
    sky_rects: RectRenderer,
    hud_rects: RectRenderer,
    text: TextRenderer,
    meshes: MeshRenderer,
}

impl CampusApp {
    pub fn new(fonts: FontSystem, font: Option<FontId>, cloud_seed: u64) -> Self {
        Self {
            camera: OrbitCamera::default(),
            controller: Controller::new(),
            state: CampusState::new(),
            day_night: DayNight::default(),
            clouds: Clouds::seeded(cloud_seed),
            step: FixedStep::default(),
            stars: world_sky::star_offsets(),
            twinkle: StdRng::seed_from_u64(cloud_seed.rotate_left(17)),
            fonts,
            font,
            cursor: CursorIcon::Default,
            mesh: MeshList::new(),
            sky: DrawList::new(),
            hud: DrawList::new(),
            sky_rects: RectRenderer::new(),
            hud_rects: RectRenderer::new(),
            text: TextRenderer::new(),
            meshes: MeshRenderer::new(),
        }
    }

    /// Re-casts the pointer ray so hover follows both pointer and camera motion.
    fn refresh_hover(&mut self, viewport: Viewport) {
        match self.controller.pointer() {
            Some(cursor) => {
                let ray = self.camera.ray_through(cursor, viewport);
                self.state.update_hover(&ray, cursor, viewport.width);
            }
            None => self.state.clear_hover(),
        }
    }

    fn lighting(&self) -> Lighting {
        let palette = self.day_night.palette();
        Lighting {
            position: self.day_night.sun_position(),
            diffuse: palette.light_diffuse(),
            ambient: [GLOBAL_AMBIENT + palette.light_ambient(); 3],
        }
    }
}

impl App for CampusApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();

        // ── Input ─────────────────────────────────────────────────────────
        let out = self.controller.process(&mut self.camera, ctx.input_frame);
        if out.pointer_left {
            self.state.clear_hover();
        } else if out.pointer_moved || out.camera_moved {
            self.refresh_hover(viewport);
        }

        for action in out.actions {
            match action {
                Action::ToggleNight => self.day_night.toggle(),
                Action::Quit => {
                    log::info!("exit requested");
                    return AppControl::Exit;
                }
                Action::Click => {
                    if let ClickOutcome::StatusUnchanged = self.state.click() {
                        log::debug!("status change ignored for role {}", self.state.role());
                    }
                }
            }
        }

        let cursor = if self.state.hud_hover().any() { CursorIcon::Pointer } else { CursorIcon::Default };
        if cursor != self.cursor {
            ctx.window.set_cursor(cursor);
            self.cursor = cursor;
        }

        // ── Animation ─────────────────────────────────────────────────────
        for _ in 0..self.step.advance(ctx.time.dt) {
            self.day_night.tick();
            self.clouds.tick();
        }

        // ── Scene + overlay ───────────────────────────────────────────────
        scene::build(
            &mut self.mesh,
            &SceneInput {
                state: &self.state,
                day_night: &self.day_night,
                clouds: &self.clouds,
                look_at: self.camera.look_at,
            },
        );

        self.sky.clear();
        sky::push_backdrop(
            &mut self.sky,
            viewport,
            &self.day_night,
            &self.camera,
            &self.stars,
            &mut self.twinkle,
        );

        hud::build(
            &mut self.hud,
            &HudInput {
                state: &self.state,
                day_night: &self.day_night,
                camera: &self.camera,
                viewport,
                fonts: &self.fonts,
                font: self.font,
            },
        );

        // ── Render ────────────────────────────────────────────────────────
        let clear = Color::from_rgb_array(self.day_night.palette().clear_color());
        let view_proj = self.camera.view_projection(viewport);
        let lighting = self.lighting();

        let sky_list = &mut self.sky;
        let hud_list = &mut self.hud;
        let mesh = &self.mesh;
        let fonts = &self.fonts;
        let r_sky = &mut self.sky_rects;
        let r_hud = &mut self.hud_rects;
        let r_text = &mut self.text;
        let r_mesh = &mut self.meshes;

        ctx.render(clear, |rctx, target| {
            r_sky.render(rctx, target, sky_list);
            r_mesh.render(rctx, target, mesh, view_proj, &lighting);
            r_hud.render(rctx, target, hud_list);
            r_text.render(rctx, target, hud_list, fonts);
        })
    }
}
