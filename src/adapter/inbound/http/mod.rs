//! HTTP adapter: HTML form routes served with actix-web.
//!
//! | Method | Path | Effect |
//! |---|---|---|
//! | GET | `/` | list view |
//! | POST | `/` | create, then list view |
//! | GET | `/delete/{id}` | delete, redirect to `/` |
//! | GET | `/update/{id}` | edit form |
//! | POST | `/update/{id}` | apply edit, redirect to `/` |
//! | GET | `/health` | liveness probe |

pub mod error;
pub mod form;
pub mod handler;
pub mod middleware;
pub mod server;
pub mod view;

pub use error::HttpError;
pub use server::{routes, serve};
