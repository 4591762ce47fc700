/// Business logic layer
///
/// Services own validation and the interpretation of store results; handlers
/// only translate between HTTP and these calls.
pub mod posts;
pub mod users;

pub use posts::PostService;
pub use users::UserService;
