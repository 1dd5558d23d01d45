mod page;

pub use page::{IndexPage, index};
