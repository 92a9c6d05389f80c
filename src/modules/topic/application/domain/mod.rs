pub mod entities;
pub mod ownership_policy;
