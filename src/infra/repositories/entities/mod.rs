//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Each module converts its `Model` into the matching domain type.

pub mod category;
pub mod course;
pub mod enrollment;
pub mod identity;
pub mod instructor;
