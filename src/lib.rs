//! StudyPath: academic planning service.
//!
//! Career roadmaps and course plans are keyword-selected example datasets
//! delivered after a simulated delay. Course recommendations come from a
//! SQLite catalog of courses, students and enrollments.

pub mod api;
pub mod assistant;
pub mod catalog;
pub mod config;
pub mod db;
pub mod models;
pub mod recommender;
pub mod render;
pub mod selector;
pub mod views;
