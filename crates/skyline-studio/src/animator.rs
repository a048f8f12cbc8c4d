use skyline_engine::camera::Camera2D;
use skyline_engine::input::InputState;
use skyline_engine::scene::{Animate, NodeId, Scene};
use skyline_engine::time::FixedStep;
use skyline_engine::transform::Transform2D;

use crate::city::{City, CloudLane, ORBIT_CENTER, ORBIT_RADIUS, PROPELLER_HUB, SUN_CENTER};

const SUN_SPIN: f64 = 0.5;
const ORBIT_SPEED: f64 = 0.6;
const PROPELLER_SPIN: f64 = 10.0;

/// Clouds leave on one side and come back on the other within this span.
const CLOUD_WRAP: f32 = 3.0;

/// Per-node motion of the city, as a pure function of scene time.
#[derive(Debug, Clone)]
pub struct CityMotion {
    sun: NodeId,
    airplane: NodeId,
    propeller: NodeId,
    clouds: Vec<CloudLane>,
}

impl CityMotion {
    pub fn new(city: &City) -> Self {
        Self {
            sun: city.sun,
            airplane: city.airplane,
            propeller: city.propeller,
            clouds: city.clouds.clone(),
        }
    }
}

impl Animate for CityMotion {
    fn animate(&mut self, id: NodeId, local: &mut Transform2D, time: f64) {
        if id == self.sun {
            local.set_rotation(SUN_CENTER.x, SUN_CENTER.y, (time * SUN_SPIN) as f32);
        } else if id == self.airplane {
            *local = orbit(time);
        } else if id == self.propeller {
            *local = Transform2D::translation(PROPELLER_HUB.x, PROPELLER_HUB.y)
                * Transform2D::rotation(0.0, 0.0, (time * PROPELLER_SPIN) as f32);
        } else if let Some(lane) = self.clouds.iter().find(|c| c.node == id) {
            local.set_translation(drift(lane, time), 0.0);
        }
    }
}

/// Airplane placement: spin about the orbit center, then push out by the radius.
pub fn orbit(time: f64) -> Transform2D {
    Transform2D::translation(ORBIT_CENTER.x, ORBIT_CENTER.y)
        * Transform2D::rotation(0.0, 0.0, (time * ORBIT_SPEED) as f32)
        * Transform2D::translation(ORBIT_RADIUS, 0.0)
}

/// Horizontal cloud position, wrapped so the cloud re-enters from the left.
fn drift(lane: &CloudLane, time: f64) -> f32 {
    let x = lane.start_x + lane.speed * time as f32;
    (x + CLOUD_WRAP * 0.5).rem_euclid(CLOUD_WRAP) - CLOUD_WRAP * 0.5
}

/// Turns measured frame time into whole animation ticks.
///
/// Every tick advances scene time by the tick length and applies one step of
/// held camera input; the scene is updated once per frame that ticked.
#[derive(Debug)]
pub struct Animator {
    step: FixedStep,
    time: f64,
    motion: CityMotion,
}

impl Animator {
    pub fn new(city: &City, tick_seconds: f64) -> Self {
        Self {
            step: FixedStep::new(tick_seconds),
            time: 0.0,
            motion: CityMotion::new(city),
        }
    }

    /// Scene time in seconds of simulated animation.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advances by `dt` seconds of wall time. Returns the number of ticks run.
    pub fn advance(
        &mut self,
        dt: f32,
        scene: &mut Scene,
        root: NodeId,
        camera: &mut Camera2D,
        input: &InputState,
    ) -> u32 {
        let ticks = self.step.advance(dt);
        for _ in 0..ticks {
            self.time += self.step.step();
            camera.apply_input(input);
        }

        if ticks > 0 {
            scene.update(root, self.time, &mut self.motion);
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::build_city;
    use skyline_engine::coords::Vec2;
    use skyline_engine::input::{InputEvent, InputFrame, Key, KeyState, Modifiers};

    const EPS: f32 = 1e-5;

    fn press(input: &mut InputState, key: Key) {
        let mut frame = InputFrame::default();
        input.apply_event(
            &mut frame,
            InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default(), repeat: false },
        );
    }

    #[test]
    fn orbit_starts_on_the_right_of_center() {
        let p = orbit(0.0).transform_point(Vec2::zero());
        assert!((p.x - (ORBIT_CENTER.x + ORBIT_RADIUS)).abs() < EPS);
        assert!((p.y - ORBIT_CENTER.y).abs() < EPS);
    }

    #[test]
    fn orbit_keeps_constant_radius() {
        for i in 0..20 {
            let p = orbit(i as f64 * 0.37).transform_point(Vec2::zero());
            assert!(((p - ORBIT_CENTER).length() - ORBIT_RADIUS).abs() < EPS);
        }
    }

    #[test]
    fn drift_wraps_inside_span() {
        let city = build_city().unwrap();
        let lane = CloudLane { start_x: 0.5, speed: 1.0, ..city.clouds[0] };
        for t in [0.0, 0.9, 1.1, 7.3, 120.0] {
            let x = drift(&lane, t);
            assert!((-CLOUD_WRAP * 0.5..CLOUD_WRAP * 0.5 + EPS).contains(&x), "x = {x}");
        }
        assert!((drift(&lane, 0.0) - 0.5).abs() < EPS);
        // 1.0 puts it past the right edge, so it comes back on the left.
        assert!((drift(&lane, 1.0) + 1.5).abs() < EPS);
    }

    #[test]
    fn advance_runs_whole_ticks_only() {
        let mut city = build_city().unwrap();
        let mut animator = Animator::new(&city, 0.02);
        let mut camera = Camera2D::default();
        let input = InputState::default();

        assert_eq!(animator.advance(0.01, &mut city.scene, city.root, &mut camera, &input), 0);
        assert_eq!(animator.time(), 0.0);

        assert_eq!(animator.advance(0.05, &mut city.scene, city.root, &mut camera, &input), 3);
        assert!((animator.time() - 0.06).abs() < 1e-9);
    }

    #[test]
    fn advance_moves_animated_nodes() {
        let mut city = build_city().unwrap();
        let mut animator = Animator::new(&city, 0.02);
        let mut camera = Camera2D::default();
        let input = InputState::default();

        animator.advance(0.5, &mut city.scene, city.root, &mut camera, &input);
        let t = animator.time();

        let sun = *city.scene.local(city.sun).unwrap();
        let expected = Transform2D::rotation(SUN_CENTER.x, SUN_CENTER.y, (t * SUN_SPIN) as f32);
        assert!(sun.approx_eq(&expected, EPS));

        // The sun spins about its own center, so the center stays put.
        assert!((sun.transform_point(SUN_CENTER) - SUN_CENTER).length() < EPS);

        let plane = *city.scene.local(city.airplane).unwrap();
        assert!(plane.approx_eq(&orbit(t), EPS));
        assert_eq!(*city.scene.local(city.root).unwrap(), Transform2D::IDENTITY);
    }

    #[test]
    fn held_arrow_pans_once_per_tick() {
        let mut city = build_city().unwrap();
        let mut animator = Animator::new(&city, 0.02);
        let mut camera = Camera2D::default();
        let mut input = InputState::default();
        press(&mut input, Key::ArrowRight);

        let ticks = animator.advance(0.1, &mut city.scene, city.root, &mut camera, &input);
        assert_eq!(ticks, 5);
        assert!((camera.position.x - 5.0 * camera.config.pan_step).abs() < EPS);
    }
}
