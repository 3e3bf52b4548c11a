pub mod decoder;
pub mod extractor;
pub mod pipeline;
pub mod requester;
pub mod task;
pub mod transport;

pub use crate::domain::model::{DecodeMode, EarthquakeEvent, RawResponse, RequestTarget};
pub use crate::domain::ports::{ConfigProvider, EventView, Pipeline, Transport};
pub use crate::utils::error::Result;
