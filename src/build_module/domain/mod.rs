pub mod dependency_record;
pub mod document;

pub use dependency_record::{str_field, ArchResolver, ChecksumScheme, DEFAULT_ARCH};
pub use document::{leading_comments, AnnotatedDocument, ConfigDocument};
