pub mod elements;
pub mod keyword;
pub mod parser;

pub use elements::Elements;
pub use parser::parse;
