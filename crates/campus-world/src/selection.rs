use std::fmt;

use campus_engine::coords::Vec2;

use crate::buildings::{BuildingId, BuildingStatus, StatusTable};
use crate::hud::{self, HudHover};
use crate::picking::{ray_intersects_box, Ray};

/// Height a hovered building is lifted by.
pub const HOVER_LIFT: f32 = 0.5;

/// Who is using the viewer. Only admins may change building status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const fn toggled(self) -> Self {
        match self {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of hovered buildings, one bit per [`BuildingId`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HoverSet(u16);

impl HoverSet {
    #[inline]
    pub fn insert(&mut self, id: BuildingId) {
        self.0 |= 1 << id.index();
    }

    #[inline]
    pub fn remove(&mut self, id: BuildingId) {
        self.0 &= !(1 << id.index());
    }

    #[inline]
    pub fn contains(&self, id: BuildingId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Highest-priority member.
    pub fn first(&self) -> Option<BuildingId> {
        self.iter().next()
    }

    /// Members in priority order.
    pub fn iter(&self) -> impl Iterator<Item = BuildingId> + '_ {
        BuildingId::ALL.into_iter().filter(move |id| self.contains(*id))
    }
}

/// What a left click did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClickOutcome {
    Selected(BuildingId),
    StatusChanged(BuildingId, BuildingStatus),
    /// Status box clicked without admin rights or without a selection.
    StatusUnchanged,
    RoleChanged(Role),
    Cleared,
}

/// Interaction state: hover, selection, role and the status table.
#[derive(Debug, Clone, Default)]
pub struct CampusState {
    hovered: HoverSet,
    selected: Option<BuildingId>,
    role: Role,
    statuses: StatusTable,
    hud_hover: HudHover,
}

impl CampusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes hover flags for a pointer at `cursor` whose world ray is `ray`.
    ///
    /// Building and HUD hover are independent; a building behind an info box
    /// still counts as hovered.
    pub fn update_hover(&mut self, ray: &Ray, cursor: Vec2, viewport_width: f32) {
        self.hud_hover = hud::hover_at(cursor, viewport_width);
        self.hovered = HoverSet::default();
        for id in BuildingId::ALL {
            if ray_intersects_box(ray, &id.bounds()) {
                self.hovered.insert(id);
            }
        }
    }

    /// Drops all hover state, e.g. when the pointer leaves the window.
    pub fn clear_hover(&mut self) {
        self.hovered = HoverSet::default();
        self.hud_hover = HudHover::default();
    }

    /// Applies a left click at the current hover state.
    ///
    /// A hovered building wins over the info boxes.
    pub fn click(&mut self) -> ClickOutcome {
        if let Some(id) = self.hovered.first() {
            if self.selected != Some(id) {
                log::debug!("selected {id}");
            }
            self.selected = Some(id);
            return ClickOutcome::Selected(id);
        }

        if self.hud_hover.status_box {
            return match (self.role, self.selected) {
                (Role::Admin, Some(id)) => {
                    let status = self.statuses.cycle(id);
                    log::info!("{id}: status set to {status}");
                    ClickOutcome::StatusChanged(id, status)
                }
                _ => ClickOutcome::StatusUnchanged,
            };
        }

        if self.hud_hover.role_box {
            self.role = self.role.toggled();
            log::info!("role switched to {}", self.role);
            return ClickOutcome::RoleChanged(self.role);
        }

        if self.selected.take().is_some() {
            log::debug!("selection cleared");
        }
        ClickOutcome::Cleared
    }

    /// Building the HUD describes: the selection, else the top hovered building.
    pub fn focused(&self) -> Option<BuildingId> {
        self.selected.or_else(|| self.hovered.first())
    }

    pub fn displayed_status(&self, night: bool) -> Option<BuildingStatus> {
        self.focused().map(|id| self.statuses.displayed(id, night))
    }

    /// Vertical offset applied when drawing `id`.
    pub fn lift(&self, id: BuildingId) -> f32 {
        if self.hovered.contains(id) { HOVER_LIFT } else { 0.0 }
    }

    #[inline]
    pub fn hovered(&self) -> HoverSet {
        self.hovered
    }

    #[inline]
    pub fn selected(&self) -> Option<BuildingId> {
        self.selected
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn hud_hover(&self) -> HudHover {
        self.hud_hover
    }

    #[inline]
    pub fn statuses(&self) -> &StatusTable {
        &self.statuses
    }
}

#[cfg(test)]
mod tests {
    use campus_engine::coords::Viewport;
    use glam::Vec3;

    use super::*;
    use crate::camera::OrbitCamera;

    const W: f32 = 1280.0;
    const SCENE_CURSOR: Vec2 = Vec2::new(640.0, 400.0);
    const ROLE_CURSOR: Vec2 = Vec2::new(W - 50.0, 15.0);
    const STATUS_CURSOR: Vec2 = Vec2::new(W - 50.0, 70.0);

    /// Straight down onto the top of a building.
    fn ray_onto(id: BuildingId) -> Ray {
        let b = id.bounds();
        Ray::new(b.center + Vec3::new(0.0, 200.0, 0.0), -Vec3::Y)
    }

    fn ray_into_sky() -> Ray {
        Ray::new(Vec3::new(0.0, 300.0, 0.0), Vec3::Y)
    }

    fn hover(state: &mut CampusState, ray: Ray, cursor: Vec2) {
        state.update_hover(&ray, cursor, W);
    }

    // ── hover ─────────────────────────────────────────────────────────────

    #[test]
    fn hover_lifts_building() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Cafe), SCENE_CURSOR);
        assert!(s.hovered().contains(BuildingId::Cafe));
        assert_eq!(s.lift(BuildingId::Cafe), HOVER_LIFT);
        assert_eq!(s.lift(BuildingId::Library), 0.0);
        assert_eq!(s.focused(), Some(BuildingId::Cafe));
    }

    #[test]
    fn focused_prefers_priority_order() {
        // Horizontal ray along z through Admin and Cafe.
        let ray = Ray::new(Vec3::new(0.0, 5.0, 200.0), -Vec3::Z);
        let mut s = CampusState::new();
        hover(&mut s, ray, SCENE_CURSOR);
        assert!(s.hovered().contains(BuildingId::Admin));
        assert!(s.hovered().contains(BuildingId::Cafe));
        assert_eq!(s.focused(), Some(BuildingId::Admin));
        assert_eq!(s.lift(BuildingId::Cafe), HOVER_LIFT);
    }

    #[test]
    fn buildings_behind_hud_stay_hovered() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Cafe), ROLE_CURSOR);
        assert!(s.hovered().contains(BuildingId::Cafe));
        assert!(s.hud_hover().role_box);
    }

    #[test]
    fn camera_ray_through_projected_center_hovers_building() {
        let camera = OrbitCamera::default();
        let viewport = Viewport::new(W, 720.0);
        let center = BuildingId::Library.bounds().center;
        let pixel = camera.project(center, viewport).expect("library is in front of the camera");

        let mut s = CampusState::new();
        s.update_hover(&camera.ray_through(pixel, viewport), pixel, viewport.width);
        assert!(s.hovered().contains(BuildingId::Library));
    }

    #[test]
    fn hover_set_iterates_in_priority_order() {
        let mut h = HoverSet::default();
        h.insert(BuildingId::Cafe);
        h.insert(BuildingId::Library);
        h.insert(BuildingId::Admin);
        h.remove(BuildingId::Admin);
        assert_eq!(h.iter().collect::<Vec<_>>(), [BuildingId::Library, BuildingId::Cafe]);
    }

    // ── clicks ────────────────────────────────────────────────────────────

    #[test]
    fn hovered_building_wins_over_status_box() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Library), STATUS_CURSOR);
        assert!(s.hud_hover().status_box);
        assert_eq!(s.click(), ClickOutcome::Selected(BuildingId::Library));
        assert_eq!(s.selected(), Some(BuildingId::Library));
    }

    #[test]
    fn hovered_building_wins_over_role_box() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Cafe), ROLE_CURSOR);
        assert_eq!(s.click(), ClickOutcome::Selected(BuildingId::Cafe));
        assert_eq!(s.role(), Role::User);
    }

    #[test]
    fn click_selects_and_selection_outlives_hover() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Library), SCENE_CURSOR);
        assert_eq!(s.click(), ClickOutcome::Selected(BuildingId::Library));

        hover(&mut s, ray_onto(BuildingId::Cafe), SCENE_CURSOR);
        assert_eq!(s.focused(), Some(BuildingId::Library));
    }

    #[test]
    fn click_on_empty_space_clears_selection() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Library), SCENE_CURSOR);
        s.click();
        hover(&mut s, ray_into_sky(), SCENE_CURSOR);
        assert_eq!(s.click(), ClickOutcome::Cleared);
        assert_eq!(s.selected(), None);
        assert_eq!(s.focused(), None);
        assert_eq!(s.displayed_status(false), None);
    }

    #[test]
    fn role_box_toggles_role_and_keeps_selection() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Admin), SCENE_CURSOR);
        s.click();
        hover(&mut s, ray_into_sky(), ROLE_CURSOR);
        assert_eq!(s.click(), ClickOutcome::RoleChanged(Role::Admin));
        assert_eq!(s.click(), ClickOutcome::RoleChanged(Role::User));
        assert_eq!(s.selected(), Some(BuildingId::Admin));
    }

    #[test]
    fn users_cannot_change_status() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Library), SCENE_CURSOR);
        s.click();
        hover(&mut s, ray_into_sky(), STATUS_CURSOR);
        assert_eq!(s.click(), ClickOutcome::StatusUnchanged);
        assert_eq!(s.displayed_status(false), Some(BuildingStatus::Available));
        assert_eq!(s.selected(), Some(BuildingId::Library));
    }

    #[test]
    fn admin_cycles_selected_status() {
        let mut s = CampusState::new();
        hover(&mut s, ray_into_sky(), ROLE_CURSOR);
        s.click();
        assert_eq!(s.role(), Role::Admin);

        hover(&mut s, ray_onto(BuildingId::Library), SCENE_CURSOR);
        s.click();
        hover(&mut s, ray_into_sky(), STATUS_CURSOR);
        assert_eq!(
            s.click(),
            ClickOutcome::StatusChanged(BuildingId::Library, BuildingStatus::Unavailable)
        );
        s.click();
        assert_eq!(s.statuses().get(BuildingId::Library), BuildingStatus::InUse);
        assert_eq!(s.displayed_status(false), Some(BuildingStatus::InUse));
    }

    #[test]
    fn admin_without_selection_changes_nothing() {
        let mut s = CampusState::new();
        hover(&mut s, ray_into_sky(), ROLE_CURSOR);
        s.click();
        hover(&mut s, ray_into_sky(), STATUS_CURSOR);
        assert_eq!(s.click(), ClickOutcome::StatusUnchanged);
        assert_eq!(s.statuses(), &StatusTable::default());
    }

    #[test]
    fn night_override_applies_to_displayed_status() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Academic1), SCENE_CURSOR);
        assert_eq!(s.displayed_status(true), Some(BuildingStatus::Unavailable));
        assert_eq!(s.displayed_status(false), Some(BuildingStatus::Available));
    }

    #[test]
    fn clear_hover_forgets_everything_but_selection() {
        let mut s = CampusState::new();
        hover(&mut s, ray_onto(BuildingId::Cafe), SCENE_CURSOR);
        s.click();
        s.clear_hover();
        assert!(s.hovered().is_empty());
        assert_eq!(s.selected(), Some(BuildingId::Cafe));
    }
}
