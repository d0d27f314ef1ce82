/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, processes, console).
pub mod command_executor;
pub mod eol_repository;
pub mod file_store;
pub mod progress_reporter;

pub use command_executor::{CommandExecutor, Execution, OutputMode};
pub use eol_repository::EolRepository;
pub use file_store::{FileStore, StoredFile};
pub use progress_reporter::ProgressReporter;
