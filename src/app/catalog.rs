// Local movie list for the grid. Accepts a saved TMDB list response
// (`{"page": 1, "results": [...]}`) or a bare array of movies.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::MovieCardInput;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Page { results: Vec<MovieCardInput> },
    List(Vec<MovieCardInput>),
}

impl From<CatalogFile> for Vec<MovieCardInput> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Page { results } => results,
            CatalogFile::List(movies) => movies,
        }
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<MovieCardInput>, serde_json::Error> {
    serde_json::from_str::<CatalogFile>(json).map(Into::into)
}

pub fn load_catalog(path: &Path) -> Result<Vec<MovieCardInput>, CatalogError> {
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let movies = parse_catalog(&data).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("catalog: {} movies from {}", movies.len(), path.display());
    Ok(movies)
}
