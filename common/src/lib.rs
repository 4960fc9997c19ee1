//! Platform-independent core of the promotions console: the promotion record,
//! the form codec, the search query builder, the REST contract and the action
//! dispatcher. The Yew frontend only adds rendering and a browser transport.

pub mod dispatch;
pub mod model;
pub mod query;
pub mod requests;
