pub mod accounts;
pub mod middleware;
pub mod system;
pub mod validation;
