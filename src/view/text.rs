use super::{ArchiveView, Panel, PAGE_TITLE};
use crate::archive::Category;
use crate::embed::{AspectRatio, Resolution};
use std::fmt;

fn aspect_label(aspect: AspectRatio) -> &'static str {
    match aspect {
        AspectRatio::Widescreen => "16:9",
        AspectRatio::Tall => "tall",
    }
}

struct TextPage<'a>(&'a ArchiveView);

impl fmt::Display for TextPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{PAGE_TITLE}")?;

        let tabs: Vec<String> = Category::ALL
            .iter()
            .map(|category| {
                if *category == view.category() {
                    format!("[{}]", category.label())
                } else {
                    format!(" {} ", category.label())
                }
            })
            .collect();
        writeln!(f, "{}\n", tabs.join(" "))?;

        let cards = match view.panel() {
            Panel::Empty => return Ok(()),
            Panel::Loading => return writeln!(f, "Loading..."),
            Panel::Error(message) => return writeln!(f, "Error: {message}"),
            Panel::Cards(cards) => cards,
        };

        if cards.is_empty() {
            writeln!(f, "Nothing here yet.")?;
        }
        for (index, card) in cards.iter().enumerate() {
            match &card.resolution {
                Resolution::Embed(target) => writeln!(
                    f,
                    "#{:<3} {} ({})",
                    index + 1,
                    target.player_url,
                    aspect_label(target.aspect)
                )?,
                Resolution::Unsupported { tag } => {
                    writeln!(f, "#{:<3} Unsupported media type: {}", index + 1, tag)?
                }
            }
            for line in [&card.entry.title, &card.entry.artist, &card.entry.description]
                .into_iter()
                .flatten()
            {
                writeln!(f, "     {line}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Plain-text rendering for terminals.
pub fn render_text(view: &ArchiveView) -> String {
    TextPage(view).to_string()
}
