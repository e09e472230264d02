use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MimeStateError {
    #[error("Invalid Content-Transfer-Encoding: {0}")]
    InvalidContentTransferEncoding(String),
    #[error("RECURSE_ALL_MESSAGE cannot be combined with DOWNGRADE")]
    IncompatibleOptions,
}
