//! Plain sprite records as they are edited and saved.
//!
//! Field names serialize in PascalCase to match the sprite sheet format read
//! by the game engine.

use serde::{Deserialize, Serialize};

/// Collider type tag. Only rectangles exist today.
pub const RECTANGLE_COLLIDER: &str = "rectangle";

/// Integer X/Y pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointOffset {
    pub x: i32,
    pub y: i32,
}

/// Integer rectangle in atlas pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RectSource {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RectSource {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Collision rectangle, independent of the sprite's visual source rect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Collider {
    #[serde(rename = "Type", default = "default_collider_type")]
    pub collider_type: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

fn default_collider_type() -> String {
    RECTANGLE_COLLIDER.to_string()
}

impl Collider {
    pub fn rectangle(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            collider_type: default_collider_type(),
            x,
            y,
            width,
            height,
        }
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::rectangle(0, 0, 16, 16)
    }
}

/// Frames played when a breakable sprite is destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BreakingAnimation {
    pub source: RectSource,
    pub offset: PointOffset,
    pub x_inverted: i32,
    /// Milliseconds per frame
    pub frame_duration: i32,
    #[serde(rename = "NbFrames")]
    pub frame_count: i32,
}

impl Default for BreakingAnimation {
    fn default() -> Self {
        Self {
            source: RectSource::default(),
            offset: PointOffset::default(),
            x_inverted: 0,
            frame_duration: 100,
            frame_count: 0,
        }
    }
}

/// One annotated region of the atlas.
///
/// Identity is the `id`: two items with the same id are the same logical
/// sprite, no matter where they currently live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpriteItem {
    pub id: u32,
    pub name: String,
    #[serde(rename = "YSort")]
    pub y_sort: i32,
    #[serde(default)]
    pub fragile: bool,
    #[serde(default)]
    pub breakable: bool,
    #[serde(default)]
    pub offset: PointOffset,
    pub source: RectSource,
    #[serde(default)]
    pub shadow_offset: PointOffset,
    #[serde(default)]
    pub shadow_source: RectSource,
    #[serde(default)]
    pub colliders: Vec<Collider>,
    #[serde(default)]
    pub breaking_animation: BreakingAnimation,
}

impl SpriteItem {
    /// A freshly drawn sprite with the editor's default shape
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: "New Sprite".to_string(),
            y_sort: 0,
            fragile: false,
            breakable: false,
            offset: PointOffset::default(),
            source: RectSource::new(0, 0, 32, 32),
            shadow_offset: PointOffset::default(),
            shadow_source: RectSource::default(),
            colliders: Vec::new(),
            breaking_animation: BreakingAnimation::default(),
        }
    }

    /// Position of the first collider equal to `collider`
    pub fn collider_index(&self, collider: &Collider) -> Option<usize> {
        self.colliders.iter().position(|c| c == collider)
    }
}
