pub mod generator;
pub mod pools;

pub use generator::{generate, generate_with, random_date};
pub use pools::{ContentPools, DEFAULT_POOLS, Joke};
