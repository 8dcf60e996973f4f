//! Kanban board CRUD API: users, boards, lists, cards and card membership
//! over HTTP/JSON, backed by PostgreSQL or SQLite.

pub mod api;
pub mod config;
pub mod db;
pub mod validation;
