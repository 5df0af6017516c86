// docket-api: wire models shared by docket list clients and servers

pub mod model;

pub use model::{ActionOutcome, ListPage, ListQuery};
