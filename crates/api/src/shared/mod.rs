pub mod auth;
pub mod dispatch;
pub mod usecase;

/// Defaults for the paginated list endpoints
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;
