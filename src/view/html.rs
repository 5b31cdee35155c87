use super::{ArchiveView, Card, Panel, PAGE_TITLE, THEME};
use crate::archive::Category;
use crate::embed::Resolution;
use crate::utils::escape_html;
use std::fmt;

const IFRAME_ALLOW: &str = "encrypted-media; fullscreen";

fn write_card(f: &mut fmt::Formatter<'_>, card: &Card<'_>) -> fmt::Result {
    writeln!(f, "<div class=\"card\">")?;

    match &card.resolution {
        Resolution::Embed(target) => writeln!(
            f,
            "<div class=\"embed\" style=\"padding-bottom: {}%\"><iframe src=\"{}\" allow=\"{}\"{}{}></iframe></div>",
            target.aspect.padding_percent(),
            escape_html(&target.player_url),
            IFRAME_ALLOW,
            if target.fullscreen { " allowfullscreen" } else { "" },
            if target.scrolling { "" } else { " scrolling=\"no\"" },
        )?,
        Resolution::Unsupported { .. } => writeln!(
            f,
            "<div class=\"alert\" role=\"alert\">Unsupported media type</div>"
        )?,
    }

    if let Some(title) = &card.entry.title {
        writeln!(f, "<h4>{}</h4>", escape_html(title))?;
    }
    if let Some(artist) = &card.entry.artist {
        writeln!(f, "<div class=\"artist\">{}</div>", escape_html(artist))?;
    }
    if let Some(description) = &card.entry.description {
        writeln!(
            f,
            "<div class=\"description\">{}</div>",
            escape_html(description)
        )?;
    }

    writeln!(f, "</div>")
}

struct HtmlPage<'a>(&'a ArchiveView);

impl fmt::Display for HtmlPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        write!(
            f,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{PAGE_TITLE}</title>\n<style>\n{}</style>\n</head>\n<body>\n\
             <div class=\"paper\">\n<h2>{PAGE_TITLE}</h2>\n",
            THEME.stylesheet()
        )?;

        writeln!(f, "<nav class=\"tabs\" role=\"tablist\">")?;
        for category in Category::ALL {
            let active = category == view.category();
            writeln!(
                f,
                "<span class=\"tab{}\" role=\"tab\" aria-selected=\"{}\">{}</span>",
                if active { " active" } else { "" },
                active,
                category.label()
            )?;
        }
        writeln!(f, "</nav>\n<section class=\"panel\" role=\"tabpanel\">")?;

        match view.panel() {
            Panel::Empty => {}
            Panel::Loading => {
                writeln!(f, "<div class=\"loader\" aria-busy=\"true\">Loading...</div>")?
            }
            Panel::Error(message) => writeln!(
                f,
                "<div class=\"alert\" role=\"alert\"><strong>Error</strong><p>{}</p></div>",
                escape_html(message)
            )?,
            Panel::Cards(cards) => {
                writeln!(f, "<div class=\"grid\">")?;
                for card in &cards {
                    write_card(f, card)?;
                }
                writeln!(f, "</div>")?;
            }
        }

        writeln!(f, "</section>\n</div>\n</body>\n</html>")
    }
}

/// Renders a self-contained themed page for the current view.
pub fn render_html(view: &ArchiveView) -> String {
    HtmlPage(view).to_string()
}
