//! glogcheck check engine - console sink, call-site resolution, expression
//! extraction and the glog-style `check_*` family

pub mod engine;
pub mod extract;
pub mod message;
pub mod resolver;
pub mod sink;

pub use engine::Logger;
pub use extract::extract;
pub use resolver::CallSiteResolver;
pub use sink::Sink;
