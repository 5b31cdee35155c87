mod bandcamp;
mod extract;
mod soundcloud;
mod youtube;

use crate::archive::MediaEntry;
use tracing::debug;

/// Layout hint for the box a player is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// 16:9 video box
    Widescreen,
    /// Taller box for players with a cover and track list
    Tall,
}

impl AspectRatio {
    /// Height as a percentage of the box width.
    pub fn padding_percent(&self) -> f32 {
        match self {
            AspectRatio::Widescreen => 56.25,
            AspectRatio::Tall => 120.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTarget {
    pub player_url: String,
    pub aspect: AspectRatio,
    /// Player offers its own fullscreen control.
    pub fullscreen: bool,
    /// Player frame may scroll its content.
    pub scrolling: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Embed(EmbedTarget),
    Unsupported { tag: String },
}

/// Maps an entry to its third-party player. Pure: the same entry always
/// resolves to the same target.
pub fn resolve(entry: &MediaEntry) -> Resolution {
    let target = match entry.kind.as_str() {
        "youtube" => youtube::resolve(&entry.link),
        "soundcloud" => soundcloud::resolve(&entry.link),
        "bandcamp" => bandcamp::resolve(&entry.link),
        other => {
            debug!("No player for media type '{}'", other);
            return Resolution::Unsupported {
                tag: other.to_string(),
            };
        }
    };

    Resolution::Embed(target)
}
