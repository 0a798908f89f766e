//! In-process engine answering address metadata queries

mod dispatcher;
mod handler;
mod table;

pub use dispatcher::{EventDispatcher, EventHandler, EventReply};
pub use handler::AddressMetadataHandler;
pub use table::LayoutTable;
