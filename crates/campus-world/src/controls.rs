//! Mouse and keyboard bindings.
//!
//! | input      | effect                          |
//! |------------|---------------------------------|
//! | left drag  | orbit                           |
//! | right drag | pan                             |
//! | wheel      | zoom                            |
//! | arrows     | pan one step                    |
//! | `N`        | [`Action::ToggleNight`]         |
//! | `Esc`      | [`Action::Quit`]                |
//! | left press | [`Action::Click`]               |

use campus_engine::coords::Vec2;
use campus_engine::input::{
    InputEvent, InputFrame, Key, KeyState, MouseButton, MouseButtonState, MouseWheelDelta,
    PointerButtonEvent, PointerMoveEvent,
};

use crate::camera::{OrbitCamera, PanDirection};

/// Pixel-precise wheels (touchpads) report this many logical pixels per notch.
const PIXELS_PER_NOTCH: f32 = 40.0;

/// Discrete requests the application acts on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    ToggleNight,
    Quit,
    /// Left button pressed at the current pointer position.
    Click,
}

/// Result of processing one frame of input.
#[derive(Debug, Default, PartialEq)]
pub struct ControlOutput {
    /// Actions in the order their events arrived.
    pub actions: Vec<Action>,
    /// The pointer moved, entered or left; hover needs recomputing.
    pub pointer_moved: bool,
    /// Camera changed; hover under a resting pointer needs recomputing too.
    pub camera_moved: bool,
    /// Pointer left the window.
    pub pointer_left: bool,
}

/// Turns raw input events into camera motion and [`Action`]s.
#[derive(Debug, Default)]
pub struct Controller {
    last_pointer: Option<Vec2>,
    orbiting: bool,
    panning: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    /// Applies all events of `frame` to `camera`, in arrival order.
    pub fn process(&mut self, camera: &mut OrbitCamera, frame: &InputFrame) -> ControlOutput {
        let mut out = ControlOutput::default();

        for ev in &frame.events {
            match ev {
                InputEvent::Key { key, state: KeyState::Pressed, repeat, .. } => {
                    self.key_pressed(camera, *key, *repeat, &mut out);
                }

                InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                    let p = Vec2::new(*x, *y);
                    if let Some(last) = self.last_pointer {
                        let d = p - last;
                        if self.orbiting {
                            camera.orbit(d.x, d.y);
                            out.camera_moved = true;
                        } else if self.panning {
                            camera.pan_drag(d.x, d.y);
                            out.camera_moved = true;
                        }
                    }
                    self.last_pointer = Some(p);
                    out.pointer_moved = true;
                }

                InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, .. }) => {
                    self.last_pointer = Some(Vec2::new(*x, *y));
                    let pressed = *state == MouseButtonState::Pressed;
                    match button {
                        MouseButton::Left => {
                            self.orbiting = pressed;
                            if pressed {
                                out.actions.push(Action::Click);
                            }
                        }
                        MouseButton::Right => self.panning = pressed,
                        _ => {}
                    }
                }

                InputEvent::MouseWheel { delta, .. } => {
                    let notches = match delta {
                        MouseWheelDelta::Line { y, .. } => *y,
                        MouseWheelDelta::Pixel { y, .. } => *y / PIXELS_PER_NOTCH,
                    };
                    if notches != 0.0 {
                        camera.zoom(notches);
                        out.camera_moved = true;
                    }
                }

                InputEvent::PointerLeft => {
                    self.last_pointer = None;
                    out.pointer_left = true;
                    out.pointer_moved = true;
                }

                InputEvent::Focused(false) => {
                    self.orbiting = false;
                    self.panning = false;
                }

                _ => {}
            }
        }

        out
    }

    fn key_pressed(&mut self, camera: &mut OrbitCamera, key: Key, repeat: bool, out: &mut ControlOutput) {
        let pan = match key {
            Key::ArrowUp => Some(PanDirection::Forward),
            Key::ArrowDown => Some(PanDirection::Backward),
            Key::ArrowLeft => Some(PanDirection::Left),
            Key::ArrowRight => Some(PanDirection::Right),
            _ => None,
        };
        if let Some(dir) = pan {
            camera.pan_key(dir);
            out.camera_moved = true;
            return;
        }

        if repeat {
            return;
        }
        match key {
            Key::N => out.actions.push(Action::ToggleNight),
            Key::Escape => out.actions.push(Action::Quit),
            _ => {}
        }
    }
}
