// Re-export model types, the store seam and service functions
pub mod dynamo;
pub mod http;
pub mod memory;
pub mod model;
pub mod service;
pub mod store;

pub use dynamo::DynamoStylistStore;
pub use memory::MemoryStylistStore;
pub use model::{
    CreateStylistPayload, Gender, StatusUpdatePayload, StylistRecord, StylistStatus,
    UpdateStylistPayload,
};
pub use service::*;
pub use store::{StoreError, StylistStore};
