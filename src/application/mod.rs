/// Application layer - Use cases and DTOs
///
/// This layer contains the report pipeline, which orchestrates domain
/// services and reaches the remote services through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
