//! Background motion: drifting clouds, flapping birds and twinkling stars.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CLOUD_COUNT: usize = 10;
pub const CLOUD_COLOR: [f32; 4] = [0.92, 0.92, 0.98, 0.75];

const CLOUD_DRIFT_PER_TICK: f32 = 0.1;
const CLOUD_DRIFT_LIMIT: f32 = 800.0;

/// Sphere puffs making up one cloud, as (offset, radius) in cloud-scale units.
///
/// Offsets are cumulative: each puff is placed relative to the previous one.
pub const CLOUD_PUFFS: [([f32; 3], f32); 4] = [
    ([0.0, 0.0, 0.0], 1.0),
    ([0.7, 0.15, 0.1], 0.85),
    ([-1.5, -0.1, 0.25], 0.9),
    ([0.5, -0.2, -0.3], 0.7),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cloud {
    pub position: Vec3,
    pub scale: f32,
    /// Fraction of the shared drift offset this cloud follows.
    pub speed: f32,
}

/// Cloud layer with a shared drift offset.
#[derive(Debug, Clone)]
pub struct Clouds {
    clouds: Vec<Cloud>,
    offset: f32,
}

impl Clouds {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: &mut impl Rng) -> Self {
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                position: Vec3::new(
                    rng.gen_range(-200..200) as f32,
                    rng.gen_range(70..100) as f32,
                    rng.gen_range(-200..200) as f32,
                ),
                scale: 6.0 + rng.gen_range(0..100) as f32 / 30.0,
                speed: 0.05 + rng.gen_range(0..100) as f32 / 2000.0,
            })
            .collect();
        Self { clouds, offset: 0.0 }
    }

    pub fn tick(&mut self) {
        self.offset += CLOUD_DRIFT_PER_TICK;
        if self.offset > CLOUD_DRIFT_LIMIT {
            self.offset = -CLOUD_DRIFT_LIMIT;
        }
    }

    /// Drift offset, also the clock driving the birds.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// Current position and scale of every cloud.
    pub fn drawn(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.clouds.iter().map(move |c| {
            let drift = Vec3::new(self.offset * c.speed * 2.0, 0.0, 0.0);
            (c.position + drift, c.scale)
        })
    }
}

// ── birds ─────────────────────────────────────────────────────────────────

pub const BIRD_COUNT: usize = 4;
pub const BIRD_COLOR: [f32; 3] = [0.15, 0.15, 0.15];
const WING_LENGTH: f32 = 2.0;
const WING_FLAP_DEG: f32 = 15.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bird {
    pub position: Vec3,
    pub wing_angle_deg: f32,
}

impl Bird {
    /// Wing tips relative to the body. Each wing is a line from the body.
    pub fn wing_tips(&self) -> [Vec3; 2] {
        let w = self.wing_angle_deg.to_radians();
        let (c, s) = (w.cos() * WING_LENGTH, w.sin() * WING_LENGTH);
        [Vec3::new(c, s, 0.0), Vec3::new(-c, s, 0.0)]
    }
}

/// Birds for the animation clock `t`. Birds roost at night.
pub fn birds(t: f32, night: bool) -> Vec<Bird> {
    if night {
        return Vec::new();
    }
    (0..BIRD_COUNT)
        .map(|i| {
            let fi = i as f32;
            Bird {
                position: Vec3::new(
                    20.0 + fi * 15.0 + (t * 0.1 + fi).sin() * 5.0,
                    60.0 + (t * 0.05 + fi * 0.5).sin() * 3.0,
                    20.0 + fi * 10.0,
                ),
                wing_angle_deg: (t * 0.2 + fi).sin() * WING_FLAP_DEG,
            }
        })
        .collect()
}

// ── stars ─────────────────────────────────────────────────────────────────

/// Point size of a star this frame.
pub fn twinkle_size(rng: &mut impl Rng) -> f32 {
    1.5 + rng.gen_range(0..10) as f32 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_clouds_are_reproducible_and_in_range() {
        let a = Clouds::seeded(7);
        let b = Clouds::seeded(7);
        assert_eq!(a.clouds(), b.clouds());
        assert_eq!(a.clouds().len(), CLOUD_COUNT);
        for c in a.clouds() {
            assert!((-200.0..200.0).contains(&c.position.x));
            assert!((-200.0..200.0).contains(&c.position.z));
            assert!((70.0..100.0).contains(&c.position.y));
            assert!((6.0..9.4).contains(&c.scale));
            assert!((0.05..0.1).contains(&c.speed));
        }
    }

    #[test]
    fn drift_wraps_around() {
        let mut clouds = Clouds::seeded(1);
        let mut prev = clouds.offset();
        for _ in 0..10_000 {
            clouds.tick();
            if clouds.offset() < prev {
                break;
            }
            prev = clouds.offset();
        }
        assert!(prev > CLOUD_DRIFT_LIMIT - 1.0);
        assert_eq!(clouds.offset(), -CLOUD_DRIFT_LIMIT);
    }

    #[test]
    fn drawn_clouds_follow_offset_by_speed() {
        let mut clouds = Clouds::seeded(3);
        for _ in 0..100 {
            clouds.tick();
        }
        let offset = clouds.offset();
        for (c, (pos, scale)) in clouds.clouds().iter().zip(clouds.drawn()) {
            assert!((pos.x - (c.position.x + offset * c.speed * 2.0)).abs() < 1e-4);
            assert_eq!(pos.y, c.position.y);
            assert_eq!(scale, c.scale);
        }
    }

    #[test]
    fn birds_only_fly_by_day() {
        assert!(birds(0.0, true).is_empty());
        let flock = birds(0.0, false);
        assert_eq!(flock.len(), BIRD_COUNT);
        assert_eq!(flock[0].position, Vec3::new(20.0, 60.0, 20.0));
        assert_eq!(flock[0].wing_angle_deg, 0.0);
    }

    #[test]
    fn wing_tips_mirror_each_other() {
        let bird = Bird { position: Vec3::ZERO, wing_angle_deg: 10.0 };
        let [right, left] = bird.wing_tips();
        assert_eq!(right.x, -left.x);
        assert_eq!(right.y, left.y);
        assert!((right.length() - WING_LENGTH).abs() < 1e-5);
    }

    #[test]
    fn twinkle_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let s = twinkle_size(&mut rng);
            assert!((1.5..2.5).contains(&s));
        }
    }
}
