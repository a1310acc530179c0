mod api;
pub use api::*;

mod form;
pub use form::*;

mod horizon;
pub use horizon::*;

mod recipe;
pub use recipe::*;

mod repository;
pub use repository::*;

mod transaction;
pub use transaction::*;
