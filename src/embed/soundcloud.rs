use super::{AspectRatio, EmbedTarget};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is when a whole URL is passed as one query value.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn resolve(link: &str) -> EmbedTarget {
    EmbedTarget {
        player_url: format!(
            "https://w.soundcloud.com/player/?url={}",
            utf8_percent_encode(link, COMPONENT)
        ),
        aspect: AspectRatio::Widescreen,
        fullscreen: false,
        scrolling: false,
    }
}
