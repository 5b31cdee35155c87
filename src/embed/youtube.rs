use super::extract::segment_after;
use super::{AspectRatio, EmbedTarget};

const ID_MARKERS: &[&str] = &["v=", "/embed/", ".be/"];
const ID_TERMINATORS: &[char] = &['?', '&'];

pub fn extract_video_id(link: &str) -> &str {
    segment_after(link, ID_MARKERS, ID_TERMINATORS)
}

pub fn resolve(link: &str) -> EmbedTarget {
    EmbedTarget {
        player_url: format!("https://www.youtube.com/embed/{}", extract_video_id(link)),
        aspect: AspectRatio::Widescreen,
        fullscreen: true,
        scrolling: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=abc123&t=5"), "abc123");
        assert_eq!(extract_video_id("https://youtu.be/xyz789"), "xyz789");
        assert_eq!(extract_video_id("https://youtu.be/xyz789?si=share"), "xyz789");
        assert_eq!(extract_video_id("https://www.youtube.com/embed/q1w2e3?start=30"), "q1w2e3");
        assert_eq!(extract_video_id("https://www.youtube.com/@channel"), "");
    }

    #[test]
    fn test_resolve_with_empty_id() {
        let target = resolve("not a url");
        assert_eq!(target.player_url, "https://www.youtube.com/embed/");
        assert_eq!(target.aspect, AspectRatio::Widescreen);
    }
}
