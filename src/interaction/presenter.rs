use super::{Hint, ViewModel};

/// The presentation layer driven by an [`InteractionController`].
///
/// The controller calls into the presenter synchronously at the end of each
/// handled event and never reads anything back.
///
/// [`InteractionController`]: super::InteractionController
pub trait Presenter {
    /// The hint may have changed. `None` hides it.
    fn update_hint(&mut self, hint: Option<Hint>);

    /// Draw one frame.
    fn render(&mut self, view: &ViewModel);
}

/// Headless sessions discard all output.
impl Presenter for () {
    fn update_hint(&mut self, _hint: Option<Hint>) {}

    fn render(&mut self, _view: &ViewModel) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn update_hint(&mut self, hint: Option<Hint>) {
        (**self).update_hint(hint);
    }

    fn render(&mut self, view: &ViewModel) {
        (**self).render(view);
    }
}
