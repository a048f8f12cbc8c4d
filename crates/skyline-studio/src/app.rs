use skyline_engine::camera::Camera2D;
use skyline_engine::coords::Viewport;
use skyline_engine::core::{App, AppControl, FrameCtx};
use skyline_engine::render::{MeshBatch, MeshRenderer};
use skyline_engine::transform::Transform2D;

use crate::animator::Animator;
use crate::city::City;
use crate::config::StudioConfig;

/// Host application: animates the city, follows the camera and draws.
pub struct Studio {
    config: StudioConfig,
    city: City,
    animator: Animator,
    camera: Camera2D,
    batch: MeshBatch,
    renderer: MeshRenderer,
}

impl Studio {
    pub fn new(config: StudioConfig, city: City) -> Self {
        let animator = Animator::new(&city, config.tick_seconds);
        let camera = Camera2D::new(config.camera.clone());
        Self {
            config,
            city,
            animator,
            camera,
            batch: MeshBatch::new(),
            renderer: MeshRenderer::new(),
        }
    }
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let City { scene, root, .. } = &mut self.city;

        self.animator
            .advance(ctx.time.dt, scene, *root, &mut self.camera, ctx.input);

        // The camera drives the root's local transform, above every other node.
        scene.set_local(*root, self.camera.view_transform());

        let projection = projection(ctx.gpu.viewport(), self.config.world_extent);
        self.batch.clear();
        scene.draw(*root, &projection, &mut self.batch);

        if ctx.time.frame_index % 600 == 0 {
            log::debug!(
                "frame {}: t={:.2}s, {} vertices, camera {:?} x{:.2}",
                ctx.time.frame_index,
                self.animator.time(),
                self.batch.len(),
                self.camera.position,
                self.camera.zoom,
            );
        }

        let batch = &self.batch;
        let renderer = &mut self.renderer;
        ctx.render(self.config.clear, |rctx, target| {
            renderer.render(rctx, target, batch);
        })
    }
}

/// Projection showing `extent` world units above and below the origin,
/// widened or heightened to keep shapes undistorted.
fn projection(viewport: Viewport, extent: f32) -> Transform2D {
    let aspect = viewport.aspect();
    let (half_w, half_h) = if aspect >= 1.0 {
        (extent * aspect, extent)
    } else {
        (extent, extent / aspect)
    };
    Transform2D::ortho_clip(-half_w, half_w, half_h, -half_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_engine::coords::Vec2;

    #[test]
    fn square_viewport_is_identity_at_unit_extent() {
        let p = projection(Viewport::new(640.0, 640.0), 1.0);
        assert!(p.approx_eq(&Transform2D::IDENTITY, 1e-6));
    }

    #[test]
    fn wide_viewport_squeezes_x() {
        let p = projection(Viewport::new(1280.0, 640.0), 1.0);
        let q = p.transform_point(Vec2::new(2.0, 1.0));
        assert!((q.x - 1.0).abs() < 1e-6);
        assert!((q.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tall_viewport_squeezes_y() {
        let p = projection(Viewport::new(320.0, 640.0), 1.0);
        let q = p.transform_point(Vec2::new(1.0, 2.0));
        assert!((q.x - 1.0).abs() < 1e-6);
        assert!((q.y - 1.0).abs() < 1e-6);
    }
}
