//! Holder of the currently published newsletter.
//!
//! Each refresh builds a complete `Newsletter` first and then publishes it
//! with a single pointer swap, so readers see either the old snapshot or the
//! new one, never a mix.

use crate::content::generate;
use crate::domain::Snapshot;
use crate::port::RandomSource;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info};

pub struct NewsletterStore {
    current: RwLock<Arc<Snapshot>>,
    source: Mutex<Box<dyn RandomSource>>,
}

impl NewsletterStore {
    /// Create a store and generate its first newsletter from `source`.
    pub fn new(source: impl RandomSource + 'static) -> Self {
        let mut source: Box<dyn RandomSource> = Box::new(source);
        let snapshot = Snapshot {
            newsletter: generate(&mut *source),
            generated_at: Utc::now(),
            generation: 0,
        };
        info!(
            edition = %snapshot.newsletter.header.edition,
            "Generated initial newsletter content"
        );

        Self {
            current: RwLock::new(Arc::new(snapshot)),
            source: Mutex::new(source),
        }
    }

    /// Create a store backed by an OS-seeded RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// The latest published snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        // The guarded value is a complete `Arc`, so a poisoned lock is still safe to read.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Generate a new newsletter and publish it in place of the current one.
    pub fn refresh(&self) -> Arc<Snapshot> {
        let newsletter = {
            let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
            generate(&mut **source)
        };

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let snapshot = Arc::new(Snapshot {
            newsletter,
            generated_at: Utc::now(),
            generation: current.generation + 1,
        });
        *current = Arc::clone(&snapshot);
        drop(current);

        debug!(generation = snapshot.generation, "Published newsletter snapshot");
        info!(
            edition = %snapshot.newsletter.header.edition,
            "Generated new newsletter content"
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::pools::{
        JOKES, LEFT_COLUMN_CONTENTS, LEFT_COLUMN_TITLES, MAIN_ARTICLE_CONTENTS,
        MAIN_ARTICLE_TITLES,
    };
    use crate::test_support::FixedPick;
    use std::thread;
    use tracing_test::traced_test;

    #[test]
    fn current_is_stable_without_refresh() {
        let store = NewsletterStore::from_entropy();

        let first = store.current();
        let second = store.current();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.newsletter, second.newsletter);
        assert_eq!(first.generation, 0);
    }

    #[test]
    fn refresh_replaces_every_field() {
        let source = FixedPick::first();
        let store = NewsletterStore::new(source.clone());
        assert_eq!(
            store.current().newsletter.main_article.title,
            MAIN_ARTICLE_TITLES[0]
        );

        source.pick_last();
        let refreshed = store.refresh();
        let current = store.current();
        let newsletter = &current.newsletter;

        assert!(Arc::ptr_eq(&refreshed, &current));
        assert_eq!(current.generation, 1);
        assert_eq!(newsletter.header.edition, "Edition nº 100");
        assert_eq!(newsletter.header.date, "Friday, December 28, 2014");
        assert_eq!(newsletter.main_article.title, MAIN_ARTICLE_TITLES[4]);
        assert_eq!(newsletter.main_article.content, MAIN_ARTICLE_CONTENTS[4]);
        assert_eq!(
            newsletter.main_article.image_caption,
            "Photo of the online call via Google Meet held on Friday, Friday, December 28, 2014."
        );
        assert_eq!(newsletter.left_column.title, LEFT_COLUMN_TITLES[4]);
        assert_eq!(newsletter.left_column.content, LEFT_COLUMN_CONTENTS[4]);
        assert_eq!(newsletter.right_column.content, JOKES[2].setup);
        assert_eq!(
            newsletter.right_column.joke_lines,
            JOKES[2].lines.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }

    #[test]
    fn old_snapshot_survives_refresh() {
        let source = FixedPick::first();
        let store = NewsletterStore::new(source.clone());
        let before = store.current();

        source.pick_last();
        store.refresh();

        assert_eq!(before.newsletter.header.edition, "Edition nº 1");
        assert_eq!(store.current().newsletter.header.edition, "Edition nº 100");
    }

    #[test]
    fn readers_never_see_mixed_snapshots() {
        let source = FixedPick::first();
        let store = Arc::new(NewsletterStore::new(source.clone()));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..2000 {
                        let snapshot = store.current();
                        let newsletter = &snapshot.newsletter;
                        let first = newsletter.header.edition == "Edition nº 1";
                        let expected_title = if first {
                            MAIN_ARTICLE_TITLES[0]
                        } else {
                            MAIN_ARTICLE_TITLES[4]
                        };
                        assert_eq!(newsletter.main_article.title, expected_title);
                    }
                })
            })
            .collect();

        for i in 0..200 {
            if i % 2 == 0 {
                source.pick_last();
            } else {
                source.pick_first();
            }
            store.refresh();
        }

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(store.current().generation, 200);
    }

    #[traced_test]
    #[test]
    fn refresh_is_logged() {
        let store = NewsletterStore::new(FixedPick::first());
        store.refresh();
        assert!(logs_contain("Generated new newsletter content"));
    }
}
