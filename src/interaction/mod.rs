mod controller;
mod hint;
mod presenter;
pub mod view;

pub use controller::InteractionController;
pub use hint::Hint;
pub use presenter::Presenter;
pub use view::{GridLayout, ViewModel};
