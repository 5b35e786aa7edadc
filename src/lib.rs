//! Simulation core of a single-player vertical arcade shooter plus a terminal host.
//!
//! The core owns no drawing or input code: a [`scheduler::FrameScheduler`] pumps a
//! [`session::Session`] once per display refresh, taking an [`input::InputFrame`]
//! and handing a [`snapshot::Snapshot`] to any [`snapshot::Renderer`].

pub mod collision;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod motion;
pub mod pools;
pub mod rendering;
pub mod scheduler;
pub mod session;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod terminal_io;
pub mod types;
pub mod upgrades;
