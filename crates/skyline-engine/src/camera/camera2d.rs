use crate::coords::{Rect, Vec2};
use crate::input::{InputState, Key};
use crate::transform::Transform2D;

/// Camera tuning and clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// World units moved per tick while an arrow key is held.
    pub pan_step: f32,
    /// Zoom change per tick while Shift + Up/Down is held.
    pub zoom_step: f32,
    /// Lower zoom bound. `0.0` collapses the scene to a point.
    pub min_zoom: f32,
    /// Optional upper zoom bound.
    pub max_zoom: Option<f32>,
    /// Optional rectangle the camera position is kept inside.
    pub pan_bounds: Option<Rect>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_step: 0.02,
            zoom_step: 0.02,
            min_zoom: 0.0,
            max_zoom: None,
            pan_bounds: None,
        }
    }
}

/// Camera position and zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    pub position: Vec2,
    pub zoom: f32,
    pub config: CameraConfig,
}

impl Camera2D {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: Vec2::zero(),
            zoom: 1.0,
            config,
        }
    }

    /// Advances the camera by one tick of held input.
    ///
    /// Up/Down pan vertically, or zoom while Shift is held; Left/Right pan
    /// horizontally. Only one direction applies per tick, Up/Down first.
    /// Returns `true` if any key moved the camera.
    pub fn apply_input(&mut self, input: &InputState) -> bool {
        let shift = input.modifiers.shift || input.key_down(Key::Shift);
        let step = self.config.pan_step;
        let zoom_step = self.config.zoom_step;

        let moved = if input.key_down(Key::ArrowUp) {
            if shift {
                self.zoom += zoom_step;
            } else {
                self.position.y += step;
            }
            true
        } else if input.key_down(Key::ArrowDown) {
            if shift {
                self.zoom -= zoom_step;
            } else {
                self.position.y -= step;
            }
            true
        } else if input.key_down(Key::ArrowLeft) {
            self.position.x -= step;
            true
        } else if input.key_down(Key::ArrowRight) {
            self.position.x += step;
            true
        } else {
            false
        };

        self.clamp();
        moved
    }

    /// Enforces the zoom and pan limits from `config`.
    pub fn clamp(&mut self) {
        self.zoom = self.zoom.max(self.config.min_zoom);
        if let Some(max) = self.config.max_zoom {
            self.zoom = self.zoom.min(max);
        }
        if let Some(bounds) = self.config.pan_bounds {
            self.position = bounds.clamp_point(self.position);
        }
    }

    /// View transform: translate by `-position`, composed with a uniform zoom.
    ///
    /// Zoom is applied first and about the world origin; the pan offset is not
    /// scaled by it.
    pub fn view_transform(&self) -> Transform2D {
        let mut view = Transform2D::identity();
        view.translate(-self.position.x, -self.position.y);

        let mut zoom = Transform2D::identity();
        zoom.scale(self.zoom, self.zoom);

        view.compose_in_place(&zoom);
        view
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputFrame, KeyState, Modifiers};

    const EPS: f32 = 1e-6;

    fn press(state: &mut InputState, key: Key, shift: bool) {
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers { shift, ..Modifiers::default() },
            repeat: false,
        });
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn arrows_pan_by_step() {
        let mut cam = Camera2D::default();
        let mut input = InputState::default();
        press(&mut input, Key::ArrowRight, false);
        assert!(cam.apply_input(&input));
        assert!((cam.position.x - 0.02).abs() < EPS);
        assert_eq!(cam.position.y, 0.0);
    }

    #[test]
    fn shift_up_zooms_instead_of_panning() {
        let mut cam = Camera2D::default();
        let mut input = InputState::default();
        press(&mut input, Key::ArrowUp, true);
        cam.apply_input(&input);
        assert!((cam.zoom - 1.02).abs() < EPS);
        assert_eq!(cam.position, Vec2::zero());
    }

    #[test]
    fn vertical_keys_take_precedence() {
        let mut cam = Camera2D::default();
        let mut input = InputState::default();
        press(&mut input, Key::ArrowLeft, false);
        press(&mut input, Key::ArrowDown, false);
        cam.apply_input(&input);
        assert_eq!(cam.position.x, 0.0);
        assert!((cam.position.y + 0.02).abs() < EPS);
    }

    #[test]
    fn no_keys_no_motion() {
        let mut cam = Camera2D::default();
        assert!(!cam.apply_input(&InputState::default()));
        assert_eq!(cam, Camera2D::default());
    }

    // ── clamps ────────────────────────────────────────────────────────────

    #[test]
    fn zoom_never_goes_below_minimum() {
        let mut cam = Camera2D::default();
        cam.zoom = 0.01;
        let mut input = InputState::default();
        press(&mut input, Key::ArrowDown, true);
        cam.apply_input(&input);
        assert_eq!(cam.zoom, 0.0);
    }

    #[test]
    fn pan_stays_inside_bounds() {
        let mut cam = Camera2D::new(CameraConfig {
            pan_step: 5.0,
            pan_bounds: Some(Rect::new(-1.0, -1.0, 2.0, 2.0)),
            ..CameraConfig::default()
        });
        let mut input = InputState::default();
        press(&mut input, Key::ArrowRight, false);
        cam.apply_input(&input);
        assert_eq!(cam.position, Vec2::new(1.0, 0.0));
    }

    // ── view transform ────────────────────────────────────────────────────

    #[test]
    fn view_transform_zooms_then_offsets() {
        let mut cam = Camera2D::default();
        cam.position = Vec2::new(1.0, 2.0);
        cam.zoom = 2.0;
        let p = cam.view_transform().transform_point(Vec2::new(3.0, 3.0));
        assert!((p.x - 5.0).abs() < EPS && (p.y - 4.0).abs() < EPS, "got {p:?}");
    }

    #[test]
    fn default_view_is_identity() {
        assert!(Camera2D::default().view_transform().approx_eq(&Transform2D::identity(), EPS));
    }
}
