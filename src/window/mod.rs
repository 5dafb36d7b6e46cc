use winit::dpi::PhysicalSize;
use winit::window::WindowAttributes;

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window size snapshot.
///
/// - **physical** dimensions are the actual pixel size of the OS window and
///   follow resizes.
/// - **logical** dimensions are the fixed game resolution everything is laid
///   out in (640 × 480 for this game).
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub physical_width: u32,
    pub physical_height: u32,
    pub logical_width: u32,
    pub logical_height: u32,
}

impl WindowConfig {
    /// A window whose physical size starts equal to the logical size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            physical_width: width,
            physical_height: height,
            logical_width: width,
            logical_height: height,
        }
    }

    pub fn with_physical_size(mut self, width: u32, height: u32) -> Self {
        self.physical_width = width;
        self.physical_height = height;
        self
    }

    /// Record a new physical size after the OS resized the window.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.physical_width = size.width;
        self.physical_height = size.height;
    }

    /// Aspect ratio of the logical resolution, `0.0` when the height is zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.logical_height == 0 {
            return 0.0;
        }
        self.logical_width as f32 / self.logical_height as f32
    }

    /// Attributes for opening the window at the physical size.
    pub fn attributes(&self, title: &str) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(self.physical_width, self.physical_height))
            .with_resizable(false)
    }
}

impl Default for WindowConfig {
    /// 640 × 480.
    fn default() -> Self {
        Self::new(640, 480)
    }
}
