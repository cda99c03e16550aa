pub mod timeline_builder;
pub mod timeline_event;
