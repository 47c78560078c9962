/// Document service interface
pub mod document;
/// Generic entity service interface
pub mod entity;
/// Support ticket service interface
pub mod support;
/// Trade service interface
pub mod trade;
