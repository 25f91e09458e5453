pub mod builder;
pub mod defaults;
pub mod matcher;
pub mod runtime;
pub mod traits;
