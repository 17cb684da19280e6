pub mod application;
pub mod components;
pub mod error;
pub mod icon;
pub mod id;
pub mod prelude;
pub mod provider;
pub mod theme;

pub use application::CalmApplication;
pub use error::{Result, SelectError};
pub use provider::CalmProvider;
