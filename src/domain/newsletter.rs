use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One generated edition of the newsletter. JSON keys are camelCase.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub header: Header,
    pub title: String,
    pub main_article: MainArticle,
    pub left_column: Column,
    pub right_column: RightColumn,
    pub comic_section: ComicSection,
    pub contribute_section: ContributeSection,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub edition: String,
    pub date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainArticle {
    pub title: String,
    pub content: String,
    pub image_caption: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RightColumn {
    pub title: String,
    pub content: String,
    pub joke_lines: Vec<String>,
    pub note: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComicSection {
    pub title: String,
    pub caption: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContributeSection {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// A published newsletter together with when and in which refresh it was built.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub newsletter: Newsletter,
    pub generated_at: DateTime<Utc>,
    /// 0 for the document built at startup, +1 per refresh.
    pub generation: u64,
}
