//! Session plumbing for the Cafehop website.
//!
//! Provides session token issue/validation, the session cookie builders and
//! flash messages carried between a redirect and the next rendered view.

pub mod cookie;
pub mod flash;
pub mod token;
