/// Process adapters for running external build tools
mod system_executor;

pub use system_executor::SystemCommandExecutor;
