mod types;

pub use types::User;
