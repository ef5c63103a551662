/// Makes the fallback text visible to the user.
pub trait ShowText {
    fn show_text(&mut self, text: &str);
}

impl<T> ShowText for &mut T
where
    T: ShowText + ?Sized,
{
    fn show_text(&mut self, text: &str) {
        (**self).show_text(text);
    }
}

impl<T> ShowText for Box<T>
where
    T: ShowText + ?Sized,
{
    fn show_text(&mut self, text: &str) {
        (**self).show_text(text);
    }
}

/// Writes the text to the log.
///
/// Desktop windows also carry the text in the title.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogText;

impl ShowText for LogText {
    fn show_text(&mut self, text: &str) {
        log::info!("{text}");
    }
}
