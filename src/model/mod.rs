/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Credentials and the session token header
pub mod auth;
/// HTTP transport abstraction and the reqwest implementation
pub mod http;
/// Retry configuration for the auth-failure layer
pub mod retry;
/// Payload shapes for input validation
pub mod shape;
/// Status code to error kind registry
pub mod status;
