/// Mock implementations for testing
mod mock_command_executor;
mod mock_eol_repository;
mod mock_progress_reporter;

pub use mock_command_executor::MockCommandExecutor;
pub use mock_eol_repository::MockEolRepository;
pub use mock_progress_reporter::MockProgressReporter;
