pub mod loader;
pub mod source;
pub mod table;

pub use loader::{Loaded, TableLoader};
pub use source::{FsSource, TableSource};
pub use table::{Dataset, Table};
