pub mod id;
pub mod number;
pub mod user;
pub mod project;
pub mod event;

pub use id::*;
pub use user::*;
pub use project::*;
pub use event::*;
