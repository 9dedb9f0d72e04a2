//! Application services. Depend only on domain.

pub mod render;
