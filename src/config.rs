use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// The line the NPC says when the player starts a conversation.
pub const DEFAULT_DIALOGUE: &str = "Listen, son, times are tough. I know it's not easy, but you have to learn to survive on your own. There's a gun on the table over there. Take it. Go out into the world and do what you can to survive.";

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window title, logical resolution and update rate.
///
/// All room geometry is derived from `width × height`; the window is not
/// resizable, so these are also the render-space dimensions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Fixed update ticks per second.
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "zombie-room".to_string(),
            width: 800,
            height: 600,
            target_fps: 60,
        }
    }
}

// ── Actors ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed in pixels per second.
    pub speed: f32,
    /// Side length of the player square in pixels.
    pub size: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { speed: 200.0, size: 50 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NpcConfig {
    /// Side length of the NPC square in pixels.
    pub size: u32,
    pub dialogue: String,
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self { size: 50, dialogue: DEFAULT_DIALOGUE.to_string() }
    }
}

// ── DialogueStyle ─────────────────────────────────────────────────────────────

/// Geometry and metrics of the dialogue box along the bottom of the screen.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialogueStyle {
    pub font_size: f32,
    /// Extra vertical space between lines; line height is `font_size + line_spacing`.
    pub line_spacing: f32,
    pub box_height: f32,
    /// Gap between the box and the screen edges.
    pub margin: f32,
    /// Gap between the box border and the text.
    pub padding: f32,
}

impl Default for DialogueStyle {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            line_spacing: 2.0,
            box_height: 100.0,
            margin: 10.0,
            padding: 10.0,
        }
    }
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Complete demo configuration. Every field is optional in JSON; missing
/// fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub npc: NpcConfig,
    pub dialogue: DialogueStyle,
    /// Hint shown while the player stands near something interactive.
    pub prompt: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            player: PlayerConfig::default(),
            npc: NpcConfig::default(),
            dialogue: DialogueStyle::default(),
            prompt: "Press E to interact".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Line height of dialogue text in pixels.
    pub fn dialogue_line_height(&self) -> f32 {
        self.dialogue.font_size + self.dialogue.line_spacing
    }
}
