pub mod analysis;
pub mod credentials;
pub mod file;
pub mod view;

pub use analysis::*;
pub use credentials::*;
pub use file::*;
pub use view::*;
