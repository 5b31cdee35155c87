use super::extract::segment_after;
use super::{AspectRatio, EmbedTarget};

const ID_MARKERS: &[&str] = &["track=", "/album/"];
const ID_TERMINATORS: &[char] = &['/', '&'];

pub fn extract_item_id(link: &str) -> &str {
    segment_after(link, ID_MARKERS, ID_TERMINATORS)
}

pub fn resolve(link: &str) -> EmbedTarget {
    EmbedTarget {
        player_url: format!(
            "https://bandcamp.com/EmbeddedPlayer/track={}/size=large/bgcol=333333/linkcol=ffffff/artwork=none/",
            extract_item_id(link)
        ),
        aspect: AspectRatio::Tall,
        fullscreen: false,
        scrolling: true,
    }
}
