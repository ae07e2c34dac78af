pub mod bookmark_mapper;
