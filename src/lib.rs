extern crate colored;
extern crate serde;
extern crate serde_json;

mod showcase;

pub mod category;
pub mod config;
pub mod draft;
pub mod filter;
pub mod form;
pub mod project;
pub mod seed;
pub mod shell;
pub mod store;
pub mod traits;
pub mod validator;
pub mod viewer;

pub use config::Config;
pub use showcase::*;
