use crate::domain::Newsletter;
use crate::error::NewsletterError;
use crate::store::NewsletterStore;
use axum::extract::State;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::sync::Arc;
use tracing::debug;

/// How often the page polls `/api/newsletter-data` for a new edition.
pub const POLL_INTERVAL_MS: u64 = 30_000;

const MEETING_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1588196749597-9ff075ee6b5b?w=800&h=400&fit=crop";
const COMIC_STRIP_PATH: &str = "/img/001.jpg";

const STYLES: &str = include_str!("newsletter.css");
const AUTO_REFRESH_SCRIPT: &str = include_str!("auto_refresh.js");

/// Handler for GET /
pub async fn page_handler(
    State(store): State<Arc<NewsletterStore>>,
) -> Result<Markup, NewsletterError> {
    let snapshot = store.current();
    debug!(generation = snapshot.generation, "Rendering newsletter page");
    render_page(&snapshot.newsletter)
}

/// Render the full newsletter page, including the polling script seeded with
/// the newsletter's JSON.
pub fn render_page(newsletter: &Newsletter) -> Result<Markup, NewsletterError> {
    let script = format!(
        "let currentData = {};\nconst POLL_INTERVAL_MS = {POLL_INTERVAL_MS};\n{AUTO_REFRESH_SCRIPT}",
        script_safe_json(newsletter)?
    );

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (newsletter.title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                div.newsletter {
                    div.header {
                        div { (newsletter.header.edition) }
                        div { (newsletter.header.date) }
                    }
                    hr;
                    h1.title { (newsletter.title) }
                    hr;
                    h2 { (newsletter.main_article.title) }
                    p { (newsletter.main_article.content) }
                    img.meeting-photo src=(MEETING_PHOTO_URL) alt="Company meeting - 80s style";
                    div.caption { (newsletter.main_article.image_caption) }
                    hr;
                    div.two-column {
                        div.column {
                            h2 { (newsletter.left_column.title) }
                            p { (newsletter.left_column.content) }
                        }
                        div.column {
                            h2 { (newsletter.right_column.title) }
                            p { (newsletter.right_column.content) }
                            div.joke-lines {
                                @for line in &newsletter.right_column.joke_lines {
                                    (line) br;
                                }
                            }
                            p.note { (newsletter.right_column.note) }
                        }
                    }
                    hr;
                    h2 { (newsletter.comic_section.title) }
                    img.comic-strip src=(COMIC_STRIP_PATH) alt="Comic strip of the month";
                    div.comic-caption { (newsletter.comic_section.caption) }
                    hr;
                    div.contribute {
                        h2 { (newsletter.contribute_section.title) }
                        @for paragraph in &newsletter.contribute_section.paragraphs {
                            p { (paragraph) }
                        }
                    }
                }
                script { (PreEscaped(script)) }
            }
        }
    })
}

/// JSON that cannot terminate the surrounding `<script>` element.
fn script_safe_json(newsletter: &Newsletter) -> Result<String, NewsletterError> {
    Ok(serde_json::to_string(newsletter)?.replace('<', "\\u003c"))
}
