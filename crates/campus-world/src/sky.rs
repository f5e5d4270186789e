//! Day/night cycle: sun or moon angle, sky palette and the star dome.

use glam::Vec3;

/// Distance of the sun/moon from the world origin used for lighting.
pub const SUN_ORBIT_RADIUS: f32 = 200.0;
/// The visible disc is drawn this fraction of the way along the light vector.
pub const SUN_DRAW_FRACTION: f32 = 0.8;

pub const STAR_CANDIDATES: u32 = 150;
pub const STAR_DOME_RADIUS: f32 = 250.0;
pub const STAR_COLOR: [f32; 3] = [1.0, 1.0, 0.9];
/// Stars at or below this `sin(elevation)` are culled as under the horizon.
const STAR_MIN_SIN_ELEVATION: f32 = 0.05;

/// Ambient term added regardless of the light source.
pub const GLOBAL_AMBIENT: f32 = 0.3;

const DAY_STEP_DEG: f32 = 0.08;
const NIGHT_STEP_DEG: f32 = 0.04;

/// Colours and light strength for one half of the cycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SkyPalette {
    /// Sky colour at the bottom of the screen.
    pub horizon: [f32; 3],
    /// Sky colour at the top of the screen.
    pub zenith: [f32; 3],
    /// Sun or moon disc colour.
    pub body: [f32; 3],
    pub body_radius: f32,
    pub light_intensity: f32,
}

pub const DAY_PALETTE: SkyPalette = SkyPalette {
    horizon: [0.6, 0.8, 1.0],
    zenith: [0.3, 0.6, 0.9],
    body: [1.0, 0.85, 0.2],
    body_radius: 12.0,
    light_intensity: 1.0,
};

pub const NIGHT_PALETTE: SkyPalette = SkyPalette {
    horizon: [0.02, 0.02, 0.1],
    zenith: [0.1, 0.1, 0.3],
    body: [0.85, 0.85, 0.75],
    body_radius: 10.0,
    light_intensity: 0.35,
};

impl SkyPalette {
    /// Framebuffer clear colour, the mean of the gradient ends.
    pub fn clear_color(&self) -> [f32; 3] {
        [
            (self.horizon[0] + self.zenith[0]) * 0.5,
            (self.horizon[1] + self.zenith[1]) * 0.5,
            (self.horizon[2] + self.zenith[2]) * 0.5,
        ]
    }

    pub fn light_diffuse(&self) -> [f32; 3] {
        self.body.map(|c| c * self.light_intensity)
    }

    pub fn light_ambient(&self) -> f32 {
        GLOBAL_AMBIENT * self.light_intensity
    }
}

/// Day/night flag and the current sun (or moon) angle in degrees.
///
/// By day the sun climbs from 0 and restarts at sunrise after 180. At night
/// the moon keeps climbing from wherever the sun was, restarting at 180 once
/// it passes 360.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DayNight {
    night: bool,
    sun_angle_deg: f32,
}

impl Default for DayNight {
    fn default() -> Self {
        Self { night: false, sun_angle_deg: 0.0 }
    }
}

impl DayNight {
    #[inline]
    pub fn is_night(&self) -> bool {
        self.night
    }

    #[inline]
    pub fn sun_angle_deg(&self) -> f32 {
        self.sun_angle_deg
    }

    pub fn toggle(&mut self) {
        self.night = !self.night;
        if !self.night {
            self.sun_angle_deg = 0.0;
        }
        log::info!("switched to {}", self.mode_label());
    }

    /// One animation tick.
    pub fn tick(&mut self) {
        if self.night {
            self.sun_angle_deg += NIGHT_STEP_DEG;
            if self.sun_angle_deg > 360.0 {
                self.sun_angle_deg = 180.0;
            }
        } else {
            self.sun_angle_deg += DAY_STEP_DEG;
            if self.sun_angle_deg > 180.0 {
                self.sun_angle_deg = 0.0;
            }
        }
    }

    pub fn palette(&self) -> &'static SkyPalette {
        if self.night { &NIGHT_PALETTE } else { &DAY_PALETTE }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.night { "Night Mode" } else { "Day Mode" }
    }

    /// Light position in world space.
    pub fn sun_position(&self) -> Vec3 {
        let a = self.sun_angle_deg.to_radians();
        SUN_ORBIT_RADIUS * Vec3::new(a.cos(), a.sin(), 0.0)
    }

    /// Where the sun or moon disc is drawn for a camera looking at `look_at`.
    pub fn body_position(&self, look_at: Vec3) -> Vec3 {
        look_at + self.sun_position() * SUN_DRAW_FRACTION
    }
}

/// Star offsets relative to the camera look-at point.
///
/// The layout is a fixed hash of the star index so it never changes between
/// frames; only stars above the horizon are returned.
pub fn star_offsets() -> Vec<Vec3> {
    (0..STAR_CANDIDATES)
        .filter_map(|i| {
            let theta = (((i * 97) % 360 + (i * 53) % 180) as f32).to_radians();
            let phi = (((i * 197) % 180) as f32 - 90.0).to_radians();
            if phi.sin() <= STAR_MIN_SIN_ELEVATION {
                return None;
            }
            Some(STAR_DOME_RADIUS * Vec3::new(phi.cos() * theta.cos(), phi.sin(), phi.cos() * theta.sin()))
        })
        .collect()
}
