use skyline_engine::camera::CameraConfig;
use skyline_engine::coords::Rect;
use skyline_engine::device::GpuInit;
use skyline_engine::logging::LoggingConfig;
use skyline_engine::paint::Color;
use skyline_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Everything the studio needs to open a window and run the scene.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
    pub camera: CameraConfig,

    /// Background behind the sky layer.
    pub clear: Color,
    /// Seconds of scene time per animation tick.
    pub tick_seconds: f64,
    /// Half-height of the visible world at zoom 1; the width follows the aspect ratio.
    pub world_extent: f32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                title: "skyline studio".to_string(),
                initial_size: LogicalSize::new(640.0, 640.0),
                ..RuntimeConfig::default()
            },
            // Colors are authored as raw byte values, as on a plain framebuffer.
            gpu: GpuInit { prefer_srgb: false, ..GpuInit::default() },
            logging: LoggingConfig::default(),
            camera: CameraConfig {
                max_zoom: Some(8.0),
                pan_bounds: Some(Rect::new(-2.0, -2.0, 4.0, 4.0)),
                ..CameraConfig::default()
            },
            clear: Color::from_hex_rgb(0x1B1F3B),
            tick_seconds: 0.02,
            world_extent: 1.0,
        }
    }
}
