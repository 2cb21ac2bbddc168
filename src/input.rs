use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Pixels of scroll per wheel line, matching what browsers report
const PIXELS_PER_LINE: f32 = 100.0;

/// Pointer buttons that drive the orbit controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Camera gesture derived from pointer input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Orbit around the target by a drag of (dx, dy) pixels
    Rotate { dx: f32, dy: f32 },
    /// Translate in the view plane by (dx, dy) pixels
    Pan { dx: f32, dy: f32 },
    /// Positive moves away from the target, negative toward it
    Dolly { delta: f32 },
}

/// Turns winit pointer events into [`PointerAction`]s
///
/// The button that started a drag decides the gesture until it is released:
/// left rotates, right pans, middle dollies.
#[derive(Debug, Clone, Default)]
pub struct OrbitInput {
    active: Option<PointerButton>,
    last_position: Option<(f32, f32)>,
}

impl OrbitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit event, returning the gesture it produced (if any)
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerAction> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::map_button(*button)?;
                match state {
                    ElementState::Pressed => self.press(button),
                    ElementState::Released => self.release(button),
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_position = None;
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
                    MouseScrollDelta::PixelDelta(position) => -position.y as f32,
                };
                self.wheel(dy)
            }
            _ => None,
        }
    }

    pub fn press(&mut self, button: PointerButton) {
        if self.active.is_none() {
            self.active = Some(button);
        }
    }

    pub fn release(&mut self, button: PointerButton) {
        if self.active == Some(button) {
            self.active = None;
        }
    }

    pub fn active(&self) -> Option<PointerButton> {
        self.active
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<PointerAction> {
        let previous = self.last_position.replace((x, y))?;
        let (dx, dy) = (x - previous.0, y - previous.1);

        match self.active? {
            PointerButton::Left => Some(PointerAction::Rotate { dx, dy }),
            PointerButton::Right => Some(PointerAction::Pan { dx, dy }),
            PointerButton::Middle => Some(PointerAction::Dolly { delta: dy }),
        }
    }

    /// Wheel scroll in pixels, positive meaning scroll down
    pub fn wheel(&mut self, dy: f32) -> Option<PointerAction> {
        (dy != 0.0).then_some(PointerAction::Dolly { delta: dy })
    }

    fn map_button(button: MouseButton) -> Option<PointerButton> {
        match button {
            MouseButton::Left => Some(PointerButton::Left),
            MouseButton::Middle => Some(PointerButton::Middle),
            MouseButton::Right => Some(PointerButton::Right),
            _ => None,
        }
    }
}
