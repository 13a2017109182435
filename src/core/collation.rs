//! Locale-aware name ordering
//!
//! Names are compared with the Unicode Collation Algorithm using the CLDR
//! root collation, the same ordering a browser's `localeCompare` produces
//! without a tailored locale. Base letters decide first, then accents, then
//! case (lowercase first), so `"Émile"` sorts next to `"Emile"` and `"Łukasz"`
//! next to `"Lima"` instead of after `"Zed"`.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::sync::OnceLock;

fn root_collator() -> &'static CollatorBorrowed<'static> {
    static COLLATOR: OnceLock<CollatorBorrowed<'static>> = OnceLock::new();
    COLLATOR.get_or_init(|| {
        Collator::try_new(Default::default(), CollatorOptions::default())
            .expect("compiled root collation data")
    })
}

/// Compare two names the way a reader expects an alphabetical list to look
///
/// Names that collate equal return `Ordering::Equal`; a stable sort keeps
/// them in input order.
pub fn compare(a: &str, b: &str) -> Ordering {
    root_collator().compare(a, b)
}
