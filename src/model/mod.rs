/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Entity type names and API path construction
pub mod entity;
/// HTTP request helper
pub mod http;
/// Request models for API calls
pub mod requests;
