pub mod page;
pub mod sections;
pub mod traits;
