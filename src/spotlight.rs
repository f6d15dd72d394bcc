pub const SPOTLIGHT_RADIUS_PX: u32 = 600;
pub const SPOTLIGHT_COLOR: &str = "rgba(14, 165, 233, 0.12)";

/// Pointer position relative to a card's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpotlightPosition {
    pub x: f64,
    pub y: f64,
}

impl SpotlightPosition {
    /// From a mouse event's client coordinates and the card's bounding rect.
    pub fn from_client(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
        }
    }

    pub fn gradient(&self) -> String {
        format!(
            "radial-gradient({SPOTLIGHT_RADIUS_PX}px circle at {}px {}px, {SPOTLIGHT_COLOR}, transparent 80%)",
            self.x, self.y
        )
    }
}
