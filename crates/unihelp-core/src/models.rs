pub mod page;
pub mod request;

pub use page::Page;
pub use request::{
    Coordinate, CreateRequest, ProcessingStatus, RequestCategory, RequestId, RequestRecord,
};
