use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Reader font-size presets, in pixels. The stored preference is an
/// index into this list and is always clamped to its bounds.
pub const FONT_PRESETS: [u16; 4] = [16, 18, 22, 26];

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Preferences {
    pub user_id: Uuid,
    pub font_index: i16,
    pub dark_mode: bool,
    pub edited_at: DateTime<Utc>,
}

impl Preferences {
    pub fn font_px(&self) -> u16 {
        FONT_PRESETS[clamp_font_index(self.font_index as i64)]
    }
}

/// Clamps any incoming index into the preset bounds.
pub fn clamp_font_index(index: i64) -> usize {
    index.clamp(0, FONT_PRESETS.len() as i64 - 1) as usize
}

/// Font size for a possibly-absent preference row (defaults to the
/// first preset).
pub fn font_px_for(prefs: Option<&Preferences>) -> u16 {
    prefs.map(Preferences::font_px).unwrap_or(FONT_PRESETS[0])
}

pub fn dark_mode_for(prefs: Option<&Preferences>) -> bool {
    prefs.map(|p| p.dark_mode).unwrap_or(false)
}
