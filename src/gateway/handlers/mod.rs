pub mod health;
pub mod order;

// Glob re-exports keep the utoipa-generated path items visible to ApiDoc.
pub use health::*;
pub use order::*;
