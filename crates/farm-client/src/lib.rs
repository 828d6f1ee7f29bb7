//! Farm client - account access, batch browsing and record submission
//!
//! Talks to the farm management REST API. The [`Controller`] owns every user
//! action and reports outcomes through a [`View`], so the same logic drives
//! the browser app and the terminal client.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod io;
pub mod session;
pub mod storage;
pub mod view;


pub use api::{Batch, BatchId, RecordKind};
pub use config::{load_config, Config};
pub use controller::Controller;
pub use error::{FarmError, Result};
pub use forms::{ExpenseForm, FeedingForm, LoginForm, MortalityForm, RegisterForm};
pub use io::{HttpClient, HttpRequest, HttpResponse, Method};
pub use storage::{MemoryTokenStore, TokenStore};
pub use view::{BatchCard, Message, MessageSlot, Page, Tone, View};
