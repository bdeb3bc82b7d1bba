pub mod forms;
pub mod page;

pub use forms::{AdrForm, ListQuery, LoginForm};
pub use page::Page;
