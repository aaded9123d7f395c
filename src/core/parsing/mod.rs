mod lens_document;
mod lens_response_parser;

pub use lens_document::LensDocument;
pub use lens_response_parser::parse_lens_response;
