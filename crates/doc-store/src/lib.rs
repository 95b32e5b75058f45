pub mod blob;
pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;

pub use blob::{BlobStore, InMemoryBlobStore};
pub use document::{Direction, Document, DocumentStore, OrderBy, Record, record_from};
pub use error::{Result, StoreError};
pub use memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
