use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window creation parameters.
pub struct WindowOptions {
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl WindowOptions {
    /// Width / height as an f32 aspect ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::WindowOptions;

    #[test]
    fn aspect_matches_dimensions() {
        let opts = WindowOptions::default();
        assert_eq!(opts.aspect(), 800.0 / 600.0);
    }

    #[test]
    fn aspect_tolerates_zero_height() {
        let opts = WindowOptions {
            width: 640,
            height: 0,
        };
        assert_eq!(opts.aspect(), 640.0);
    }
}
