mod encoding;
mod error;
mod header_opts;
mod header_token;
mod record;
mod state;

pub use error::MimeStateError;
pub type Result<T> = std::result::Result<T, MimeStateError>;

pub use encoding::*;
pub use header_opts::*;
pub use header_token::*;
pub use record::*;
pub use state::*;
