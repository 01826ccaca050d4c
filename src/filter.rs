use crate::types::{Campaign, Lead};

/// Text fields a free-text query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> [&str; 3];
}

impl Searchable for Lead {
    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.company, &self.title]
    }
}

impl Searchable for Campaign {
    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.template, ""]
    }
}

/// Case-insensitive substring filter. Keeps input order; an empty query
/// keeps everything.
pub fn filter<'a, T, I>(records: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            needle.is_empty()
                || record
                    .search_fields()
                    .iter()
                    .any(|field| !field.is_empty() && field.to_lowercase().contains(&needle))
        })
        .collect()
}
