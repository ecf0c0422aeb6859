pub mod card;
pub mod settings;
pub mod widget;

pub use card::*;
pub use settings::*;
pub use widget::*;
