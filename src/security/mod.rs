/// Password hashing and token issuance/verification
pub mod jwt;
pub mod password;
