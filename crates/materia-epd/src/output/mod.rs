//! Output tree: template folder copy and synthesized documents.

pub mod copy;
pub mod writer;

pub use copy::copy_except_folders;
pub use writer::write_document;
