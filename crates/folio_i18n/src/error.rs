use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogParseError;
use crate::locale::Locale;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("{locale} catalog: {source}")]
    Catalog {
        locale: Locale,
        #[source]
        source: CatalogParseError,
    },

    #[error("failed to access preferences at {}: {source}", .path.display())]
    PreferenceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preferences file {}: {msg}", .path.display())]
    PreferenceFormat { path: PathBuf, msg: String },
}
