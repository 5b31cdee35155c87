/// Color palettes run from lightest (0) to darkest (9).
#[derive(Debug)]
pub struct Theme {
    pub primary: [&'static str; 10],
    pub slate: [&'static str; 10],
    pub font_family: &'static str,
}

pub const THEME: Theme = Theme {
    // deepPurple
    primary: [
        "#f2ebff", "#d7c2ff", "#ba96ff", "#9d68ff", "#8040ff", "#6317ff", "#4d00e6", "#3a00b3",
        "#270080", "#14004d",
    ],
    // dungeonSlate
    slate: [
        "#f8f9fa", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#6c757d", "#495057", "#343a40",
        "#212529", "#181c20",
    ],
    font_family: "Cinzel, serif",
};

impl Theme {
    pub fn accent(&self) -> &'static str {
        self.primary[6]
    }

    pub fn stylesheet(&self) -> String {
        format!(
            r#"body {{ margin: 0; background: {page}; color: {text}; font-family: {font}; }}
.paper {{ max-width: 960px; margin: 0 auto; padding: 16px; border-radius: 8px; background: {surface}; }}
h2 {{ text-align: center; margin-bottom: 32px; }}
.tabs {{ display: flex; border-bottom: 2px solid {border}; }}
.tab {{ flex: 1; text-align: center; padding: 10px; color: {muted}; }}
.tab.active {{ color: {text}; border-bottom: 2px solid {accent}; margin-bottom: -2px; }}
.panel {{ padding-top: 20px; }}
.grid {{ display: grid; gap: 16px; }}
.card {{ padding: 16px; border: 1px solid {border}; border-radius: 8px; }}
.embed {{ position: relative; width: 100%; height: 0; margin-bottom: 1rem; }}
.embed iframe {{ position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0; border-radius: 4px; }}
.description {{ opacity: 0.8; }}
.alert {{ padding: 12px 16px; border-radius: 8px; border-left: 4px solid #fa5252; background: rgba(250, 82, 82, 0.1); }}
.loader {{ display: block; margin: 0 auto; text-align: center; color: {accent}; }}
"#,
            page = self.slate[9],
            surface = self.slate[8],
            border = self.slate[6],
            text = self.slate[1],
            muted = self.slate[4],
            accent = self.accent(),
            font = self.font_family,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_palette() {
        let css = THEME.stylesheet();
        assert!(css.contains("font-family: Cinzel, serif"));
        assert!(css.contains("#4d00e6"));
        assert!(css.contains("background: #181c20"));
    }
}
