//! JFIF header parsing and generation

pub mod app0;
pub mod layout;

pub use app0::JfifHeader;
pub use layout::TRAILING_OFFSET;
