mod method;
mod template;


pub(crate) use method::DEFAULT_CONTENT_TYPE;
pub use method::HttpMethod;
pub use template::{DelayRange, RequestTemplate};
