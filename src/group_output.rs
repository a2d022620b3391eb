use std::io::{self, Write, Error, ErrorKind};

use log::debug;
use serde::{Serialize, Deserialize};

use crate::anagram_groups::GroupTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per group, words separated by a single space
    #[default]
    Plain,
    Json,
    Yaml,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramGroup {
    pub signature: String,
    pub words: Vec<String>,
}

/// Groups with more than one word, each sorted, in first-seen signature order.
pub fn qualifying_groups(table: &GroupTable) -> Vec<AnagramGroup> {
    table.iter()
        .filter(|g| g.len() > 1)
        .map(|g| {
            let mut words = g.words.clone();
            words.sort();
            AnagramGroup { signature: g.signature.clone(), words }
        }).collect()
}

pub fn write_groups(table: &GroupTable, out: &mut impl Write, format: OutputFormat) -> io::Result<()> {
    let groups = qualifying_groups(table);
    debug!("{} of {} groups have more than one word", groups.len(), table.len());

    match format {
        OutputFormat::Plain => {
            for group in groups {
                writeln!(out, "{}", group.words.join(" "))?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &groups)?;
            writeln!(out)?;
        },
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, &groups)
                .map_err(|err| Error::new(ErrorKind::Other, err))?;
        },
    }
    out.flush()
}
