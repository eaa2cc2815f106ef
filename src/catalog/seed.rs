use std::collections::HashMap;

use super::models::{Folder, Note};
use super::Catalog;

const PI_KB: &str = "pi_kb";

const HOSTNAME_NOTE: &str = "## Get the hostname\n\n```\nhostname\n```\n";

impl Catalog {
    /// The built-in catalog served when no catalog file is configured.
    pub fn seeded() -> Self {
        let folders = vec![Folder {
            id: 1,
            name: "Raspberry_Pi".to_string(),
            database: PI_KB.to_string(),
        }];

        let mut notes = HashMap::new();
        notes.insert(
            PI_KB.to_string(),
            vec![Note::from_markdown(1, "Bash", HOSTNAME_NOTE)],
        );

        Catalog::new(folders, notes)
    }
}
