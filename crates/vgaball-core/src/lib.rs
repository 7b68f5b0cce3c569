pub mod error;
pub mod validate;

pub mod color;
pub mod config;
pub mod device;
pub mod engine;
pub mod motion;
pub mod session;
pub mod stop;
pub mod wire;

pub use crate::config::AnimationConfig;
pub use crate::device::{BallDevice, MemoryDevice};
pub use crate::engine::{Animator, Frame};
pub use crate::session::{RunSummary, Session, TickReport};
pub use crate::stop::StopToken;
pub use crate::wire::control::{ControlBlock, Position, Rgb};
pub use crate::wire::request::Request;
