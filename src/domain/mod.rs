pub mod newsletter;

pub use newsletter::{
    Column, ComicSection, ContributeSection, Header, MainArticle, Newsletter, RightColumn,
    Snapshot,
};
