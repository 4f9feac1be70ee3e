//! Services for the application layer.

pub mod submission_controller;

pub use submission_controller::UrlSubmissionController;
