//! Fixed reference data for the classroom topic.
//!
//! The default game teaches Physiocracy, the 18th-century French school of
//! economics. Lists are kept in Portuguese, the language the class plays in.

mod physiocracy;

pub use physiocracy::{QUESTIONS, VOCABULARY};

/// Owned copy of a static list, for building configurations.
pub fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}
