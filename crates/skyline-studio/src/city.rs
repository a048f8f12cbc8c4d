//! The skyline illustration: sky, ground, buildings, trees, sun, airplane
//! and clouds, assembled once into a validated [`Scene`].

use skyline_engine::coords::{Rect, Vec2};
use skyline_engine::paint::Color;
use skyline_engine::scene::shapes::{
    CircleShape, PolygonShape, QuadShape, RectShape, TriangleShape,
};
use skyline_engine::scene::{NodeId, Scene, SceneError, SceneGraph};
use skyline_engine::transform::Transform2D;

/// Top of the ground strip; everything standing rests on this line.
pub const GROUND_Y: f32 = -0.7;

pub const SUN_CENTER: Vec2 = Vec2::new(0.68, 0.68);
pub const ORBIT_CENTER: Vec2 = Vec2::new(-0.1, 0.3);
pub const ORBIT_RADIUS: f32 = 0.45;

/// Where the propeller hub sits in airplane space.
pub const PROPELLER_HUB: Vec2 = Vec2::new(0.0, 0.11);

/// Cloud drift lanes: start x, height and speed in world units per second.
const CLOUDS: [(f32, f32, f32); 3] = [(-0.7, 0.78, 0.06), (0.1, 0.55, 0.04), (0.8, 0.88, 0.05)];

/// Building footprints: center x, width, height, facade color.
const BUILDINGS: [(f32, f32, f32, u32); 5] = [
    (-0.78, 0.26, 0.55, 0x5B6C8F),
    (-0.46, 0.22, 0.85, 0x7D8AA8),
    (-0.14, 0.30, 0.62, 0x4A5677),
    (0.42, 0.24, 0.95, 0x6A7594),
    (0.74, 0.28, 0.48, 0x8C93AE),
];

/// The assembled scene and the handles the animation touches.
#[derive(Debug)]
pub struct City {
    pub scene: Scene,
    /// Camera root; every other node hangs below it.
    pub root: NodeId,
    pub sun: NodeId,
    pub airplane: NodeId,
    pub propeller: NodeId,
    /// Each cloud with its initial x offset and drift speed.
    pub clouds: Vec<CloudLane>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CloudLane {
    pub node: NodeId,
    pub start_x: f32,
    pub speed: f32,
}

/// Builds the skyline. Fails only if the assembly links a node under itself.
pub fn build_city() -> Result<City, SceneError> {
    let mut g = SceneGraph::with_capacity(96);
    let root = g.add_composite();

    let sky = add_sky(&mut g)?;
    g.add_child(root, sky)?;

    let sun = add_sun(&mut g)?;
    g.add_child(root, sun)?;

    let mut clouds = Vec::with_capacity(CLOUDS.len());
    for (start_x, y, speed) in CLOUDS {
        let node = add_cloud(&mut g, y)?;
        g.set_local(node, Transform2D::translation(start_x, 0.0))?;
        g.add_child(root, node)?;
        clouds.push(CloudLane { node, start_x, speed });
    }

    for (x, width, height, facade) in BUILDINGS {
        let building = add_building(&mut g, x, width, height, Color::from_hex_rgb(facade))?;
        g.add_child(root, building)?;
    }

    for x in [0.12, 0.2, 0.98] {
        let tree = add_tree(&mut g, x, x > 0.5)?;
        g.add_child(root, tree)?;
    }

    let ground = g.add_rect(
        RectShape::from_rect(Rect::new(-3.0, -3.0, 6.0, 3.0 + GROUND_Y)),
        Color::from_hex_rgb(0x3A6B35),
    );
    g.add_child(root, ground)?;

    let (airplane, propeller) = add_airplane(&mut g)?;
    g.add_child(root, airplane)?;

    let scene = g.build()?;
    log::info!("city assembled: {} nodes", scene.len());

    Ok(City { scene, root, sun, airplane, propeller, clouds })
}

fn add_sky(g: &mut SceneGraph) -> Result<NodeId, SceneError> {
    // Two bands so the horizon reads lighter than the zenith.
    let upper = g.add_rect(
        RectShape::from_rect(Rect::new(-3.0, 0.2, 6.0, 2.8)),
        Color::from_hex_rgb(0x4F86C6),
    );
    let lower = g.add_quad(
        QuadShape::new([
            Vec2::new(-3.0, GROUND_Y),
            Vec2::new(3.0, GROUND_Y),
            Vec2::new(3.0, 0.2),
            Vec2::new(-3.0, 0.2),
        ]),
        Color::from_hex_rgb(0x8DB8E2),
    );
    let sky = g.add_composite();
    g.add_child(sky, upper)?;
    g.add_child(sky, lower)?;
    Ok(sky)
}

fn add_sun(g: &mut SceneGraph) -> Result<NodeId, SceneError> {
    const RAYS: usize = 12;

    let sun = g.add_composite();
    for i in 0..RAYS {
        let angle = i as f32 / RAYS as f32 * std::f32::consts::TAU;
        let tip = SUN_CENTER + Vec2::from_polar(0.2, angle);
        let left = SUN_CENTER + Vec2::from_polar(0.1, angle - 0.18);
        let right = SUN_CENTER + Vec2::from_polar(0.1, angle + 0.18);
        let ray = g.add_triangle(TriangleShape::new(left, right, tip), Color::from_hex_rgb(0xF6C343));
        g.add_child(sun, ray)?;
    }

    let disc = g.add_circle(CircleShape::new(SUN_CENTER, 0.11), Color::from_hex_rgb(0xFFD95A));
    g.add_child(sun, disc)?;
    Ok(sun)
}

fn add_cloud(g: &mut SceneGraph, y: f32) -> Result<NodeId, SceneError> {
    let white = Color::from_straight(1.0, 1.0, 1.0, 0.92);

    let body = g.add_circle(CircleShape::new(Vec2::new(0.0, y), 0.08).with_segments(64), white);
    for (dx, dy, r) in [(-0.09, -0.02, 0.06), (0.09, -0.015, 0.065), (0.03, 0.05, 0.055)] {
        let puff = g.add_circle(CircleShape::new(Vec2::new(dx, y + dy), r).with_segments(48), white);
        g.add_child(body, puff)?;
    }
    Ok(body)
}

fn add_building(
    g: &mut SceneGraph,
    x: f32,
    width: f32,
    height: f32,
    facade: Color,
) -> Result<NodeId, SceneError> {
    let building = g.add_rect(
        RectShape::new(Vec2::new(x, GROUND_Y + height * 0.5), width, height),
        facade,
    );

    let lit = Color::from_hex_rgb(0xF7E59B);
    let dark = Color::from_hex_rgb(0x2B3350);
    let rows = ((height - 0.18) / 0.13).floor().max(0.0) as usize;
    for row in 0..rows {
        let wy = GROUND_Y + 0.22 + row as f32 * 0.13;
        for col in [-1.0f32, 1.0] {
            let color = if (row + col.max(0.0) as usize) % 3 == 0 { dark } else { lit };
            let window = g.add_rect(
                RectShape::new(Vec2::new(x + col * width * 0.25, wy), width * 0.22, 0.07),
                color,
            );
            g.add_child(building, window)?;
        }
    }

    let door = g.add_rect(
        RectShape::new(Vec2::new(x, GROUND_Y + 0.06), width * 0.28, 0.12),
        Color::from_hex_rgb(0x5A3A22),
    );
    let knob = g.add_circle(
        CircleShape::new(Vec2::new(x + width * 0.08, GROUND_Y + 0.06), 0.008).with_segments(16),
        Color::from_hex_rgb(0xE0C060),
    );
    g.add_child(door, knob)?;
    g.add_child(building, door)?;
    Ok(building)
}

fn add_tree(g: &mut SceneGraph, x: f32, pine: bool) -> Result<NodeId, SceneError> {
    let trunk = g.add_rect(
        RectShape::new(Vec2::new(x, GROUND_Y + 0.05), 0.03, 0.1),
        Color::from_hex_rgb(0x6B4423),
    );

    let leaves = Color::from_hex_rgb(0x2E7D32);
    let canopy = if pine {
        g.add_triangle(
            TriangleShape::new(
                Vec2::new(x - 0.07, GROUND_Y + 0.08),
                Vec2::new(x + 0.07, GROUND_Y + 0.08),
                Vec2::new(x, GROUND_Y + 0.3),
            ),
            leaves,
        )
    } else {
        g.add_circle(CircleShape::new(Vec2::new(x, GROUND_Y + 0.15), 0.065).with_segments(48), leaves)
    };
    g.add_child(trunk, canopy)?;
    Ok(trunk)
}

/// Airplane modeled nose-up around its own origin; the orbit moves it.
fn add_airplane(g: &mut SceneGraph) -> Result<(NodeId, NodeId), SceneError> {
    let plane = g.add_composite();

    let hull = Color::from_hex_rgb(0xD9DDE3);
    let trim = Color::from_hex_rgb(0xC0392B);

    let wings = g.add_quad(QuadShape::trapezoid(0.0, 0.0, 0.035, 0.2, 0.08), trim);
    let tail = g.add_triangle(
        TriangleShape::new(Vec2::new(-0.045, -0.09), Vec2::new(0.045, -0.09), Vec2::new(0.0, -0.05)),
        trim,
    );
    let body = g.add_polygon(
        PolygonShape::new([
            Vec2::new(0.0, 0.11),
            Vec2::new(-0.018, 0.08),
            Vec2::new(-0.018, -0.08),
            Vec2::new(0.0, -0.1),
            Vec2::new(0.018, -0.08),
            Vec2::new(0.018, 0.08),
        ]),
        hull,
    );
    g.add_child(plane, wings)?;
    g.add_child(plane, tail)?;
    g.add_child(plane, body)?;

    let propeller = g.add_composite();
    let blade = g.add_rect(RectShape::new(Vec2::zero(), 0.06, 0.008), Color::from_hex_rgb(0x333333));
    g.add_child(propeller, blade)?;
    g.set_local(propeller, Transform2D::translation(PROPELLER_HUB.x, PROPELLER_HUB.y))?;
    g.add_child(plane, propeller)?;

    Ok((plane, propeller))
}
