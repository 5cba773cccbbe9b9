pub mod host;
pub mod jump;
pub mod scheduler;
pub mod scroll;

pub use host::headless::HeadlessDocument;
pub use host::{Document, Element, ElementRef, Rect, Viewport};
pub use jump::Jumper;
pub use jumpscroll_core::{Axis, Error, Result};
pub use scheduler::{FrameDriver, FrameScheduler, ManualScheduler};
pub use scroll::{Container, Easing, EasingType, JumpConfigExt, JumpDuration, JumpOptions, Target};
