/// Grid builder driving the placement sequence
pub mod builder;
/// Seeded random placement fallback
pub mod fallback;
/// First-fit crossing search
pub mod intersection;
