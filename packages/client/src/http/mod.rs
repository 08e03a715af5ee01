//! Request preparation and results

pub mod fields;
pub mod headers;
pub mod method;
pub mod request;
pub mod response;
pub mod url;

pub use fields::Fields;
pub use headers::header_lines;
pub use method::RequestMethod;
pub use request::PreparedRequest;
pub use response::RequestResult;
pub use url::validate_url;
