pub mod client;
pub mod commit;
pub mod endpoint;
pub mod error;
pub mod repository;

pub use client::{GitHubClient, RepositoryApi};
pub use commit::models::CommitRecord;
pub use error::{ApiError, ApiErrorKind};
pub use repository::models::{RepositoryIdentifier, RepositoryRecord};
