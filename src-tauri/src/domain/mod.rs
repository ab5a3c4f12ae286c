//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod user;
mod project;
mod pipeline;
mod status;
mod card;
mod backup;
mod search;

pub use entity::{Entity, DomainError, DomainResult};
pub use user::{User, AuthResponse, LoginRequest, RegisterRequest, ChangePasswordRequest};
pub use project::{Project, CreateProjectRequest, UpdateProjectRequest, validate_name};
pub use pipeline::{
    Pipeline, CreatePipelineRequest, UpdatePipelineRequest, SortEntry, BulkPipelineSortRequest,
};
pub use status::{Status, CreateStatusRequest, UpdateStatusRequest};
pub use card::{
    Card, CreateCardRequest, UpdateCardRequest, MoveCardRequest, BulkCardSortRequest,
    PipelineCardsResponse,
};
pub use backup::{BackupStatus, BackupSettingsRequest, YandexAuthUrlResponse};
pub use search::{CardSearchRequest, CardSearchResult, CardSearchPage};
