/// HTTP handlers
///
/// Thin translation between HTTP and the service layer: parameter
/// extraction, service invocation, status mapping. Business rules do not
/// live here.
pub mod posts;
pub mod users;
