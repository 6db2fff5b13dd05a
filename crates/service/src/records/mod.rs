pub mod repository;
pub mod service;

pub use repository::{MemoryRecordRepository, RecordRepository};
pub use service::RecordService;
