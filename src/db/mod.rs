/// Database access layer
///
/// Function-per-query modules over a shared `PgPool`. No business rules live
/// here; services decide what to call and how to interpret misses.
pub mod posts;
pub mod users;
