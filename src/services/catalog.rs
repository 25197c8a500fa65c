use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::{RawServiceRow, Service};

/// Columns every catalog must provide
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Service Name",
    "Skin Type",
    "Skin Problem",
    "Min Age",
    "Max Age",
    "Gender",
    "Price_PHP",
    "Notes",
];

/// Optional column; rows default to a base score of zero when it is absent
pub const BASE_SCORE_COLUMN: &str = "Base Score";

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column in catalog: {0}")]
    MissingColumn(String),
}

/// Immutable snapshot of the service catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// Load a catalog from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_reader(file)?;
        tracing::info!("Loaded {} services from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Read a catalog from CSV data
    ///
    /// Header names are trimmed. Rows are never rejected: short rows and
    /// malformed cells degrade to field defaults, and cells that are not
    /// valid UTF-8 are decoded lossily.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();
        let columns = ColumnMap::new(&headers)?;

        if columns.base_score.is_none() {
            tracing::warn!("Catalog has no '{}' column, defaulting to 0", BASE_SCORE_COLUMN);
        }

        let mut services = Vec::new();
        for (index, record) in reader.byte_records().enumerate() {
            let record = record?;
            let row = columns.read_row(&record, index + 1);
            let service = Service::from_row(&row);
            tracing::debug!("Catalog row {}: {:?}", index + 1, service);
            services.push(service);
        }

        Ok(Self { services })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Sorted unique skin types offered across the catalog
    pub fn skin_type_options(&self) -> Vec<String> {
        collect_options(self.services.iter().flat_map(|s| s.skin_types.iter()))
    }

    /// Sorted unique skin problems treated across the catalog
    pub fn skin_problem_options(&self) -> Vec<String> {
        collect_options(self.services.iter().flat_map(|s| s.problems.iter()))
    }
}

/// Header positions of the catalog columns
#[derive(Debug)]
struct ColumnMap {
    name: Option<usize>,
    skin_type: Option<usize>,
    skin_problem: Option<usize>,
    min_age: Option<usize>,
    max_age: Option<usize>,
    gender: Option<usize>,
    price: Option<usize>,
    base_score: Option<usize>,
    notes: Option<usize>,
}

impl ColumnMap {
    fn new(headers: &[String]) -> Result<Self, CatalogError> {
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column.to_string()));
            }
        }

        let position = |name: &str| headers.iter().position(|h| h == name);
        Ok(Self {
            name: position("Service Name"),
            skin_type: position("Skin Type"),
            skin_problem: position("Skin Problem"),
            min_age: position("Min Age"),
            max_age: position("Max Age"),
            gender: position("Gender"),
            price: position("Price_PHP"),
            base_score: position(BASE_SCORE_COLUMN),
            notes: position("Notes"),
        })
    }

    fn read_row(&self, record: &csv::ByteRecord, row: usize) -> RawServiceRow {
        let cell = |column: Option<usize>| read_cell(record, column?, row);
        RawServiceRow {
            name: cell(self.name),
            skin_type: cell(self.skin_type),
            skin_problem: cell(self.skin_problem),
            min_age: cell(self.min_age),
            max_age: cell(self.max_age),
            gender: cell(self.gender),
            price: cell(self.price),
            base_score: cell(self.base_score),
            notes: cell(self.notes),
        }
    }
}

/// Empty and missing cells are absent
fn read_cell(record: &csv::ByteRecord, column: usize, row: usize) -> Option<String> {
    let bytes = record.get(column).filter(|b| !b.is_empty())?;
    match std::str::from_utf8(bytes) {
        Ok(text) => Some(text.to_string()),
        Err(_) => {
            tracing::warn!("Catalog row {} column {} is not valid UTF-8, decoding lossily", row, column + 1);
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

fn collect_options<'a>(tokens: impl Iterator<Item = &'a String>) -> Vec<String> {
    tokens.cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Shared handle to the current catalog snapshot
///
/// Readers clone the inner `Arc` and keep using it even if a reload swaps
/// in a new snapshot meanwhile.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read())
    }

    /// Replace the whole catalog at once
    pub fn replace(&self, catalog: Catalog) {
        *self.current.write() = Arc::new(catalog);
    }

    /// Reload from a CSV file; the current snapshot is kept on failure
    pub fn reload<P: AsRef<Path>>(&self, path: P) -> Result<usize, CatalogError> {
        let catalog = Catalog::load(path)?;
        let count = catalog.len();
        self.replace(catalog);
        Ok(count)
    }
}
