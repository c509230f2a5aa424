pub mod color;
pub mod connections;
pub mod constants;
pub mod floating;
pub mod fragment;
pub mod logo;
pub mod modulation;
pub mod notice;
pub mod rings;
pub mod scene;
pub mod settings;

pub use color::HueClock;
pub use connections::for_each_connection;
pub use constants::*;
pub use notice::Notice;
pub use scene::{Field, FieldKind, Scene};
pub use settings::{ModulationFlags, Param, Settings};
