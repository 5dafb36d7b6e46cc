// ── Letterbox viewport ────────────────────────────────────────────────────────
//
// The game always renders at its logical resolution (640 × 480). When the
// window is a different size the picture is scaled uniformly and centred, with
// bars on the short axis.

use crate::window::WindowConfig;

/// Rectangle in physical pixels the logical frame is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Largest uniformly scaled copy of the logical resolution that fits the
/// physical window, centred on both axes.
///
/// ```text
/// scale = min(physical_w / logical_w, physical_h / logical_h)
/// x     = (physical_w - logical_w * scale) / 2
/// y     = (physical_h - logical_h * scale) / 2
/// ```
///
/// A zero logical dimension yields `Viewport::ZERO`.
pub fn letterbox_viewport(config: &WindowConfig) -> Viewport {
    if config.logical_width == 0 || config.logical_height == 0 {
        return Viewport::ZERO;
    }

    let pw = config.physical_width as f32;
    let ph = config.physical_height as f32;
    let lw = config.logical_width as f32;
    let lh = config.logical_height as f32;

    let scale = (pw / lw).min(ph / lh);
    let width = lw * scale;
    let height = lh * scale;

    Viewport { x: (pw - width) / 2.0, y: (ph - height) / 2.0, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(pw: u32, ph: u32) -> WindowConfig {
        WindowConfig::new(640, 480).with_physical_size(pw, ph)
    }

    #[test]
    fn native_size_fills_window() {
        assert_eq!(letterbox_viewport(&cfg(640, 480)), Viewport { x: 0.0, y: 0.0, width: 640.0, height: 480.0 });
    }

    #[test]
    fn double_size_scales_without_bars() {
        let v = letterbox_viewport(&cfg(1280, 960));
        assert_eq!((v.x, v.y, v.width, v.height), (0.0, 0.0, 1280.0, 960.0));
    }

    #[test]
    fn widescreen_window_gets_side_bars() {
        // scale = min(2.0, 1.5) = 1.5 → 960×720, bars of 160 left and right.
        let v = letterbox_viewport(&cfg(1280, 720));
        assert!((v.x - 160.0).abs() < 1e-3, "x={}", v.x);
        assert!(v.y.abs() < 1e-3, "y={}", v.y);
        assert!((v.width - 960.0).abs() < 1e-3);
        assert!((v.height - 720.0).abs() < 1e-3);
    }

    #[test]
    fn tall_window_gets_top_and_bottom_bars() {
        // scale = min(1.0, 2.0) = 1.0 → bars of (960-480)/2 = 240.
        let v = letterbox_viewport(&cfg(640, 960));
        assert!((v.y - 240.0).abs() < 1e-3, "y={}", v.y);
        assert_eq!(v.width, 640.0);
    }

    #[test]
    fn minimised_window_is_empty() {
        assert!(letterbox_viewport(&cfg(0, 0)).is_empty());
    }
}
