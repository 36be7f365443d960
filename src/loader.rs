//! Corpus loading from JSON
//!
//! Two layouts are accepted: a single JSON array of records, or one record
//! per line (JSON lines). Each record becomes one `insert_paper` call, in
//! file order.

use crate::graph::{Author, AuthorId, GraphError, Paper, PaperId, PaperStore};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Loader errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid corpus: {0}")]
    Corpus(#[source] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Author as it appears in an input record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub name: String,
    pub id: u64,
    #[serde(default)]
    pub org: String,
}

/// One paper as it appears in an input record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub venue: String,
    pub year: i32,
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub references: Vec<u64>,
}

impl From<PaperRecord> for Paper {
    fn from(record: PaperRecord) -> Self {
        Paper {
            id: PaperId::new(record.id),
            title: record.title,
            venue: record.venue,
            year: record.year,
            authors: record
                .authors
                .into_iter()
                .map(|a| Author {
                    name: a.name,
                    id: AuthorId::new(a.id),
                    org: a.org,
                })
                .collect(),
            fields: record.fields,
            references: record.references.into_iter().map(PaperId::new).collect(),
        }
    }
}

/// Load one JSON record per non-blank line. Returns the number of papers inserted.
pub fn load_json_lines<R: BufRead>(reader: R, store: &mut PaperStore) -> LoadResult<usize> {
    let mut inserted = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: PaperRecord = serde_json::from_str(&line).map_err(|source| LoadError::Json {
            line: idx + 1,
            source,
        })?;
        store.insert_paper(record.into())?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Load a single JSON array of records. Returns the number of papers inserted.
pub fn load_json_array<R: Read>(reader: R, store: &mut PaperStore) -> LoadResult<usize> {
    let records: Vec<PaperRecord> = serde_json::from_reader(reader).map_err(LoadError::Corpus)?;
    let count = records.len();
    for record in records {
        store.insert_paper(record.into())?;
    }
    Ok(count)
}

/// Load a corpus file, picking the layout from its first non-whitespace byte
pub fn load_path(path: impl AsRef<Path>, store: &mut PaperStore) -> LoadResult<usize> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);

    let is_array = loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break false;
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(pos) => break buf[pos] == b'[',
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    };

    let inserted = if is_array {
        load_json_array(reader, store)?
    } else {
        load_json_lines(reader, store)?
    };
    info!("Loaded {} papers from {}", inserted, path.display());
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use std::io::{Cursor, Write};

    fn store() -> PaperStore {
        PaperStore::with_config(StoreConfig::compact())
    }

    const LINES: &str = r#"
{"id": 1, "title": "A", "venue": "V", "year": 2000, "authors": [{"name": "x", "id": 5, "org": "O"}], "fields": ["f"]}

{"id": 2, "title": "B", "venue": "V", "year": 2001, "references": [1, 99]}
"#;

    #[test]
    fn test_load_json_lines() {
        let mut s = store();
        let n = load_json_lines(Cursor::new(LINES), &mut s).unwrap();
        assert_eq!(n, 2);

        let a = s.find_paper(PaperId::new(1)).unwrap();
        assert_eq!(a.authors[0].org, "O");
        assert_eq!(a.fields, vec!["f".to_string()]);
        let b = s.find_paper(PaperId::new(2)).unwrap();
        assert!(b.authors.is_empty());
        assert_eq!(s.citation_count(PaperId::new(1)), 1);
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let mut s = store();
        let input = "{\"id\": 1, \"year\": 2000}\n{\"id\": 2}\n";
        match load_json_lines(Cursor::new(input), &mut s) {
            Err(LoadError::Json { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
        // The first record was already inserted
        assert_eq!(s.paper_count(), 1);
    }

    #[test]
    fn test_duplicate_in_corpus_is_an_error() {
        let mut s = store();
        let input = r#"[{"id": 1, "year": 2000}, {"id": 1, "year": 2001}]"#;
        assert!(matches!(
            load_json_array(Cursor::new(input), &mut s),
            Err(LoadError::Graph(GraphError::PaperAlreadyExists(_)))
        ));
    }

    #[test]
    fn test_load_path_detects_layout() {
        let mut array_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            array_file,
            "  \n[{{\"id\": 1, \"year\": 1999}}, {{\"id\": 2, \"year\": 2000, \"references\": [1]}}]"
        )
        .unwrap();
        let mut s = store();
        assert_eq!(load_path(array_file.path(), &mut s).unwrap(), 2);
        assert_eq!(s.citation_count(PaperId::new(1)), 1);

        let mut lines_file = tempfile::NamedTempFile::new().unwrap();
        lines_file.write_all(LINES.as_bytes()).unwrap();
        let mut s = store();
        assert_eq!(load_path(lines_file.path(), &mut s).unwrap(), 2);
    }

    #[test]
    fn test_missing_file() {
        let mut s = store();
        assert!(matches!(
            load_path("/nonexistent/corpus.json", &mut s),
            Err(LoadError::Io(_))
        ));
    }
}
