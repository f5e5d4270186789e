//! Fixed building catalog and the per-building status table.

use std::fmt;

use glam::Vec3;

use crate::picking::Aabb;

/// Identifies one of the campus buildings.
///
/// Variant order is the hover priority order: when several buildings are under
/// the pointer, the first one in [`BuildingId::ALL`] is the one reported.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum BuildingId {
    Admin,
    Academic1,
    Academic2,
    Academic3,
    Academic4,
    Library,
    WomensDorm1,
    WomensDorm2,
    MensDorm1,
    MensDorm2,
    Cafe,
}

impl BuildingId {
    pub const COUNT: usize = 11;

    pub const ALL: [BuildingId; Self::COUNT] = [
        BuildingId::Admin,
        BuildingId::Academic1,
        BuildingId::Academic2,
        BuildingId::Academic3,
        BuildingId::Academic4,
        BuildingId::Library,
        BuildingId::WomensDorm1,
        BuildingId::WomensDorm2,
        BuildingId::MensDorm1,
        BuildingId::MensDorm2,
        BuildingId::Cafe,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn spec(self) -> &'static BuildingSpec {
        &CATALOG[self.index()]
    }

    /// Picking box: footprint of the building, centred half its height above the base.
    pub fn bounds(self) -> Aabb {
        let s = self.spec();
        Aabb::new(s.base + Vec3::new(0.0, s.size.y * 0.5, 0.0), s.size)
    }

    /// Buildings that report `Unavailable` while it is night.
    pub fn closes_at_night(self) -> bool {
        matches!(self.spec().kind, BuildingKind::Admin | BuildingKind::Academic | BuildingKind::Cafe)
    }

    #[inline]
    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BuildingKind {
    Academic,
    Library,
    Dormitory,
    Admin,
    Cafe,
}

/// Geometry and naming for one building.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingSpec {
    pub id: BuildingId,
    pub kind: BuildingKind,
    /// Short label drawn above the roof.
    pub label: &'static str,
    /// Name shown in the HUD building box.
    pub display_name: &'static str,
    /// Centre of the footprint at ground level.
    pub base: Vec3,
    /// Width (x), height (y), depth (z).
    pub size: Vec3,
    pub color: [f32; 3],
    /// Windows per floor on the front and back faces.
    pub windows_x: u32,
    /// Windows per floor on each of the two side faces.
    pub windows_z_front: u32,
    pub floors: u32,
}

impl BuildingSpec {
    /// Whether a window is lit at night.
    ///
    /// Deterministic per window so the pattern is stable across frames;
    /// roughly one window in three is lit.
    pub fn window_lit(&self, face: u32, floor: u32, column: u32) -> bool {
        let mut h = (self.id.index() as u32).wrapping_mul(0x9E37_79B9);
        h ^= face.wrapping_mul(0x85EB_CA6B);
        h ^= floor.wrapping_mul(0xC2B2_AE35);
        h ^= column.wrapping_mul(0x27D4_EB2F);
        h ^= h >> 15;
        h = h.wrapping_mul(0x2C1B_3C6D);
        h ^= h >> 12;
        h % 3 == 0
    }
}

const ACADEMIC_SIZE: Vec3 = Vec3::new(35.0, 30.0, 18.0);
const ACADEMIC_COLOR: [f32; 3] = [0.75, 0.65, 0.58];
const DORM_SIZE: Vec3 = Vec3::new(18.0, 24.0, 12.0);

const fn academic(id: BuildingId, x: f32, z: f32, label: &'static str) -> BuildingSpec {
    BuildingSpec {
        id,
        kind: BuildingKind::Academic,
        label,
        display_name: label,
        base: Vec3::new(x, 0.0, z),
        size: ACADEMIC_SIZE,
        color: ACADEMIC_COLOR,
        windows_x: 3,
        windows_z_front: 5,
        floors: 4,
    }
}

const fn dorm(
    id: BuildingId,
    z: f32,
    color: [f32; 3],
    label: &'static str,
    display_name: &'static str,
) -> BuildingSpec {
    BuildingSpec {
        id,
        kind: BuildingKind::Dormitory,
        label,
        display_name,
        base: Vec3::new(70.0, 0.0, z),
        size: DORM_SIZE,
        color,
        windows_x: 2,
        windows_z_front: 3,
        floors: 4,
    }
}

static CATALOG: [BuildingSpec; BuildingId::COUNT] = [
    BuildingSpec {
        id: BuildingId::Admin,
        kind: BuildingKind::Admin,
        label: "Admin Block",
        display_name: "Admin Block",
        base: Vec3::new(0.0, 0.0, 25.0),
        size: Vec3::new(26.0, 20.0, 16.0),
        color: [0.85, 0.85, 0.7],
        windows_x: 2,
        windows_z_front: 3,
        floors: 3,
    },
    academic(BuildingId::Academic1, -60.0, -25.0, "Academic Block 1"),
    academic(BuildingId::Academic2, -60.0, 25.0, "Academic Block 2"),
    academic(BuildingId::Academic3, -100.0, -25.0, "Academic Block 3"),
    academic(BuildingId::Academic4, -100.0, 25.0, "Academic Block 4"),
    BuildingSpec {
        id: BuildingId::Library,
        kind: BuildingKind::Library,
        label: "Central Library",
        display_name: "Library",
        base: Vec3::new(0.0, 0.0, -25.0),
        size: Vec3::new(35.0, 45.0, 28.0),
        color: [0.85, 0.8, 0.75],
        windows_x: 5,
        windows_z_front: 4,
        floors: 5,
    },
    dorm(BuildingId::WomensDorm1, 35.0, [0.75, 0.75, 0.68], "Womens Dorm 1", "Womens Dormitory 1"),
    dorm(BuildingId::WomensDorm2, 60.0, [0.76, 0.75, 0.68], "Womens Dorm 2", "Womens Dormitory 2"),
    dorm(BuildingId::MensDorm1, -60.0, [0.74, 0.74, 0.67], "Mens Dorm 1", "Mens Dormitory 1"),
    dorm(BuildingId::MensDorm2, -35.0, [0.72, 0.74, 0.65], "Mens Dorm 2", "Mens Dormitory 2"),
    BuildingSpec {
        id: BuildingId::Cafe,
        kind: BuildingKind::Cafe,
        label: "Cafe",
        display_name: "Cafe",
        base: Vec3::new(0.0, 0.0, 50.0),
        size: Vec3::new(16.0, 12.0, 12.0),
        color: [0.9, 0.75, 0.75],
        windows_x: 2,
        windows_z_front: 2,
        floors: 2,
    },
];

// ── status ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BuildingStatus {
    #[default]
    Available,
    Unavailable,
    InUse,
    UnderMaintenance,
}

impl BuildingStatus {
    /// Next status in the admin cycle.
    pub const fn next(self) -> Self {
        match self {
            BuildingStatus::Available => BuildingStatus::Unavailable,
            BuildingStatus::Unavailable => BuildingStatus::InUse,
            BuildingStatus::InUse => BuildingStatus::UnderMaintenance,
            BuildingStatus::UnderMaintenance => BuildingStatus::Available,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BuildingStatus::Available => "Available",
            BuildingStatus::Unavailable => "Unavailable",
            BuildingStatus::InUse => "In Use",
            BuildingStatus::UnderMaintenance => "Under Maintenance",
        }
    }
}

impl fmt::Display for BuildingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status per building. Lives for the session only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusTable {
    entries: [BuildingStatus; BuildingId::COUNT],
}

impl StatusTable {
    #[inline]
    pub fn get(&self, id: BuildingId) -> BuildingStatus {
        self.entries[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: BuildingId, status: BuildingStatus) {
        self.entries[id.index()] = status;
    }

    /// Advances `id` to its next status and returns the new value.
    pub fn cycle(&mut self, id: BuildingId) -> BuildingStatus {
        let next = self.get(id).next();
        self.set(id, next);
        next
    }

    /// Status as presented to the user, with the night closing rule applied.
    pub fn displayed(&self, id: BuildingId, night: bool) -> BuildingStatus {
        if night && id.closes_at_night() {
            BuildingStatus::Unavailable
        } else {
            self.get(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── catalog ───────────────────────────────────────────────────────────

    #[test]
    fn catalog_is_indexed_by_id() {
        for id in BuildingId::ALL {
            assert_eq!(id.spec().id, id);
        }
    }

    #[test]
    fn bounds_sit_on_the_ground() {
        for id in BuildingId::ALL {
            let b = id.bounds();
            assert!(b.min().y.abs() < 1e-6, "{id} floats above ground");
            assert_eq!(b.max().y, id.spec().size.y);
        }
    }

    #[test]
    fn library_bounds() {
        let b = BuildingId::Library.bounds();
        assert_eq!(b.center, Vec3::new(0.0, 22.5, -25.0));
        assert_eq!(b.size, Vec3::new(35.0, 45.0, 28.0));
    }

    #[test]
    fn buildings_do_not_overlap() {
        for (i, a) in BuildingId::ALL.iter().enumerate() {
            for b in &BuildingId::ALL[i + 1..] {
                let (a0, a1) = (a.bounds().min(), a.bounds().max());
                let (b0, b1) = (b.bounds().min(), b.bounds().max());
                let overlap_x = a0.x < b1.x && b0.x < a1.x;
                let overlap_z = a0.z < b1.z && b0.z < a1.z;
                assert!(!(overlap_x && overlap_z), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(BuildingId::Library.to_string(), "Library");
        assert_eq!(BuildingId::MensDorm1.to_string(), "Mens Dormitory 1");
        assert_eq!(BuildingId::MensDorm1.spec().label, "Mens Dorm 1");
        assert_eq!(BuildingId::Academic3.to_string(), "Academic Block 3");
    }

    #[test]
    fn window_lighting_is_stable_and_partial() {
        let spec = BuildingId::Library.spec();
        let mut lit = 0;
        let mut total = 0;
        for face in 0..4 {
            for floor in 0..spec.floors {
                for col in 0..spec.windows_x {
                    assert_eq!(spec.window_lit(face, floor, col), spec.window_lit(face, floor, col));
                    lit += spec.window_lit(face, floor, col) as u32;
                    total += 1;
                }
            }
        }
        assert!(lit > 0 && lit < total);
    }

    // ── status ────────────────────────────────────────────────────────────

    #[test]
    fn status_cycles_through_four_values() {
        let mut s = BuildingStatus::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(s);
            s = s.next();
        }
        assert_eq!(s, BuildingStatus::Available);
        assert_eq!(
            seen,
            [
                BuildingStatus::Available,
                BuildingStatus::Unavailable,
                BuildingStatus::InUse,
                BuildingStatus::UnderMaintenance,
            ]
        );
        assert_eq!(BuildingStatus::InUse.to_string(), "In Use");
    }

    #[test]
    fn table_cycles_one_entry() {
        let mut t = StatusTable::default();
        assert_eq!(t.cycle(BuildingId::Cafe), BuildingStatus::Unavailable);
        assert_eq!(t.get(BuildingId::Cafe), BuildingStatus::Unavailable);
        assert_eq!(t.get(BuildingId::Library), BuildingStatus::Available);
    }

    #[test]
    fn night_closes_teaching_and_service_buildings() {
        let mut t = StatusTable::default();
        t.set(BuildingId::Admin, BuildingStatus::InUse);
        assert_eq!(t.displayed(BuildingId::Admin, true), BuildingStatus::Unavailable);
        assert_eq!(t.displayed(BuildingId::Admin, false), BuildingStatus::InUse);
        assert_eq!(t.displayed(BuildingId::Academic2, true), BuildingStatus::Unavailable);
        assert_eq!(t.displayed(BuildingId::Cafe, true), BuildingStatus::Unavailable);
        assert_eq!(t.displayed(BuildingId::Library, true), BuildingStatus::Available);
        assert_eq!(t.displayed(BuildingId::WomensDorm1, true), BuildingStatus::Available);
    }
}
