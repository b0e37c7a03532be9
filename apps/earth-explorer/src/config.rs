use serde::{Deserialize, Serialize};

/// App-level tuning. Every field has a default, so a partial JSON object
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Sun orbit advance per fixed step (radians).
    pub sun_step: f32,
    pub sun_radius: f32,
    pub sun_height: f32,
    /// Globe spin per fixed step while the user is not dragging (radians).
    pub spin_step: f32,

    /// Intro text fade, and delay before the camera turn (seconds).
    pub intro_fade_secs: f32,
    pub camera_turn_secs: f32,
    pub halo_fade_secs: f32,
    pub camera_start_distance: f32,
    pub camera_end_distance: f32,
    pub camera_height: f32,

    pub comet_url: String,
    pub manmade_url: String,
    pub image_dir: String,
    pub fallback_image: String,

    /// Seed for decoration placement.
    pub seed: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            sun_step: 0.001,
            sun_radius: 5.0,
            sun_height: 1.0,
            spin_step: 0.001,
            intro_fade_secs: 2.0,
            camera_turn_secs: 3.0,
            halo_fade_secs: 2.0,
            camera_start_distance: 3.0,
            camera_end_distance: 1.5,
            camera_height: 0.0,
            comet_url: "comet.xlsx".to_string(),
            manmade_url: "manmade.xlsx".to_string(),
            image_dir: "./images".to_string(),
            fallback_image: "default-satellite.jpg".to_string(),
            seed: 0x5EED_EA27,
        }
    }
}

impl ExplorerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
