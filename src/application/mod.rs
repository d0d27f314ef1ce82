/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// document mutations and external tools through ports.
pub mod dto;
pub mod use_cases;
