pub mod camera;
pub mod category;
pub mod clock;
pub mod constants;
pub mod drag;
pub mod effects;
pub mod feedback;
pub mod item;
pub mod params;
pub mod picking;
pub mod placement;
pub mod scene;
pub mod scheduler;
pub mod session;
pub mod spawner;

pub use camera::*;
pub use category::*;
pub use clock::*;
pub use constants::*;
pub use drag::*;
pub use feedback::*;
pub use item::*;
pub use params::*;
pub use picking::*;
pub use placement::{nearest_bin, resolve, Placement};
pub use scene::*;
pub use scheduler::*;
pub use session::*;
pub use spawner::*;
