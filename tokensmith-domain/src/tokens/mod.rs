//! Design tokens: the store, value codecs, serializers and import/export.

pub mod codec;
pub mod defaults;
pub mod errors;
pub mod exchange;
pub mod serializer;
pub mod store;
pub mod types;

pub use errors::{ParseError, TokenError};
pub use exchange::{
    export_file_name, export_tokens, import_json, import_json_file, notice_for, ArtifactSink, ExchangeOutcome, ExportArtifact,
    FileSystemSink, Notice, NoticeKind,
};
pub use store::{ImportSummary, TokenStore};
pub use types::{ExportFormat, PartialTokenSet, TokenCategory, TokenMap, TokenSet};
