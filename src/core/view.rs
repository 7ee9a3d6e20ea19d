//! # Renderer
//!
//! Pure projection of a [`ViewState`] into a [`View`]. Adapters (the TUI,
//! the HTML document) draw the `View`; they never look at `ViewState`
//! directly, so every surface shows the same branch.
//!
//! First match wins:
//!
//! 1. `loading` → [`View::Loading`]
//! 2. `error` set → [`View::Error`]
//! 3. otherwise → [`View::Cards`], one per tutorial, in list order

use crate::api::TutorialId;
use crate::core::state::ViewState;

pub const PAGE_TITLE: &str = "Welcome to My Tutorials";
pub const PAGE_SUBTITLE: &str = "Learn, Build, and Grow Your Skills";
pub const SECTION_TITLE: &str = "Featured Tutorials";
pub const FOOTER_TEXT: &str = "\u{a9} 2026 Tutorial Landing Page.";
pub const LOADING_TEXT: &str = "Loading tutorials...";
pub const LINK_LABEL: &str = "Learn More \u{2192}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Error(String),
    Cards(Vec<Card>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: TutorialId,
    pub title: String,
    pub description: String,
    pub link: OutboundLink,
}

/// A link that opens in a fresh browsing context.
///
/// It carries only the destination. There is no field for opener or
/// referrer state, and every rendering marks it `noopener noreferrer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLink {
    href: String,
}

impl OutboundLink {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";

    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// `<a>` element for this link with `label` as its text.
    pub fn to_html(&self, label: &str) -> String {
        format!(
            r#"<a href="{}" target="{}" rel="{}" class="card-link">{}</a>"#,
            escape_html(&self.href),
            Self::TARGET,
            Self::REL,
            escape_html(label)
        )
    }
}

pub fn render(state: &ViewState) -> View {
    if state.loading {
        return View::Loading;
    }
    if let Some(message) = &state.error {
        return View::Error(message.clone());
    }
    View::Cards(
        state
            .tutorials
            .iter()
            .map(|t| Card {
                id: t.id.clone(),
                title: t.title.clone(),
                description: t.description.clone(),
                link: OutboundLink::new(t.url.clone()),
            })
            .collect(),
    )
}

impl View {
    /// Standalone HTML document for this view.
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        match self {
            View::Loading => {
                body.push_str(&format!(
                    "      <div class=\"loading\">{}</div>\n",
                    escape_html(LOADING_TEXT)
                ));
            }
            View::Error(message) => {
                body.push_str(&format!(
                    "      <div class=\"error\">{}</div>\n",
                    escape_html(message)
                ));
            }
            View::Cards(cards) => {
                body.push_str("      <div class=\"tutorials-grid\">\n");
                for card in cards {
                    body.push_str(&format!(
                        "        <div class=\"tutorial-card\" data-id=\"{}\">\n",
                        escape_html(&card.id.to_string())
                    ));
                    body.push_str(&format!(
                        "          <h3 class=\"card-title\">{}</h3>\n",
                        escape_html(&card.title)
                    ));
                    body.push_str(&format!(
                        "          <p class=\"card-description\">{}</p>\n",
                        escape_html(&card.description)
                    ));
                    body.push_str(&format!("          {}\n", card.link.to_html(LINK_LABEL)));
                    body.push_str("        </div>\n");
                }
                body.push_str("      </div>\n");
            }
        }

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             \x20 <meta charset=\"utf-8\">\n\
             \x20 <meta name=\"referrer\" content=\"no-referrer\">\n\
             \x20 <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             \x20 <header class=\"hero\">\n\
             \x20   <h1 class=\"title\">{title}</h1>\n\
             \x20   <p class=\"subtitle\">{subtitle}</p>\n\
             \x20 </header>\n\
             \x20 <main class=\"main-content\">\n\
             \x20   <h2 class=\"section-title\">{section}</h2>\n\
             {body}\
             \x20 </main>\n\
             \x20 <footer class=\"footer\"><p>{footer}</p></footer>\n\
             </body>\n\
             </html>\n",
            title = escape_html(PAGE_TITLE),
            subtitle = escape_html(PAGE_SUBTITLE),
            section = escape_html(SECTION_TITLE),
            footer = escape_html(FOOTER_TEXT),
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
