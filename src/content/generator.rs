//! Assembles a [`Newsletter`] from the content pools.
//!
//! Draws are taken from the [`RandomSource`] in a fixed order: main article
//! title, main article content, caption date, left column title, left column
//! content, joke, edition number, header date. Titles and contents are drawn
//! independently, so a title may appear next to another title's article.

use crate::content::pools::{
    COMIC_CAPTION, COMIC_TITLE, CONTRIBUTE_PARAGRAPHS, CONTRIBUTE_TITLE, ContentPools, DATE_YEAR,
    DEFAULT_POOLS, MAX_DAY_OF_MONTH, MAX_EDITION, NEWSLETTER_TITLE, RIGHT_COLUMN_NOTE,
    RIGHT_COLUMN_TITLE,
};
use crate::domain::{
    Column, ComicSection, ContributeSection, Header, MainArticle, Newsletter, RightColumn,
};
use crate::port::RandomSource;

/// Generate a newsletter from the default pools.
pub fn generate<S: RandomSource + ?Sized>(source: &mut S) -> Newsletter {
    generate_with(&DEFAULT_POOLS, source)
}

/// Generate a newsletter from explicit pools.
pub fn generate_with<S: RandomSource + ?Sized>(pools: &ContentPools, source: &mut S) -> Newsletter {
    let main_article = MainArticle {
        title: pick(source, pools.main_article_titles).to_string(),
        content: pick(source, pools.main_article_contents).to_string(),
        image_caption: format!(
            "Photo of the online call via Google Meet held on Friday, {}.",
            random_date(pools, source)
        ),
    };

    let left_column = Column {
        title: pick(source, pools.left_column_titles).to_string(),
        content: pick(source, pools.left_column_contents).to_string(),
    };

    let joke = pick(source, pools.jokes);
    let right_column = RightColumn {
        title: RIGHT_COLUMN_TITLE.to_string(),
        content: joke.setup.to_string(),
        joke_lines: joke.lines.iter().map(ToString::to_string).collect(),
        note: RIGHT_COLUMN_NOTE.to_string(),
    };

    let header = Header {
        edition: format!("Edition nº {}", source.between(1, MAX_EDITION)),
        date: random_date(pools, source),
    };

    Newsletter {
        header,
        title: NEWSLETTER_TITLE.to_string(),
        main_article,
        left_column,
        right_column,
        comic_section: ComicSection {
            title: COMIC_TITLE.to_string(),
            caption: COMIC_CAPTION.to_string(),
        },
        contribute_section: ContributeSection {
            title: CONTRIBUTE_TITLE.to_string(),
            paragraphs: CONTRIBUTE_PARAGRAPHS.iter().map(ToString::to_string).collect(),
        },
    }
}

/// `"{weekday}, {month} {day}, {year}"`, e.g. `"Monday, January 1, 2014"`.
pub fn random_date<S: RandomSource + ?Sized>(pools: &ContentPools, source: &mut S) -> String {
    let weekday = pick(source, pools.weekdays);
    let month = pick(source, pools.months);
    let day = source.between(1, MAX_DAY_OF_MONTH);
    format!("{weekday}, {month} {day}, {DATE_YEAR}")
}

fn pick<'a, T, S: RandomSource + ?Sized>(source: &mut S, items: &'a [T]) -> &'a T {
    &items[source.index(items.len())]
}
