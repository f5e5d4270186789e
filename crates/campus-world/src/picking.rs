use glam::Vec3;

/// Direction components below this magnitude are treated as parallel to a slab.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Half-line in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub const fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned box described by its center and full extents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub size: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min()).all() && p.cmple(self.max()).all()
    }
}

/// Slab test.
///
/// Returns the distance along the ray at which it enters the box, `0.0` when
/// the origin is already inside, or `None` when the ray misses or the box
/// lies entirely behind the origin. Touching an edge counts as a hit.
pub fn ray_box_hit(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let min = aabb.min();
    let max = aabb.max();

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];

        if d.abs() < PARALLEL_EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let mut t1 = (min[axis] - o) / d;
        let mut t2 = (max[axis] - o) / d;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        t_near = t_near.max(t1);
        t_far = t_far.min(t2);
        if t_near > t_far {
            return None;
        }
    }

    (t_far > 0.0).then(|| t_near.max(0.0))
}

#[inline]
pub fn ray_intersects_box(ray: &Ray, aabb: &Aabb) -> bool {
    ray_box_hit(ray, aabb).is_some()
}
