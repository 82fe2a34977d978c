pub(crate) trait PipeMap: tap::Pipe {
    fn pipe_map<O>(self, option: Option<O>, func: impl FnOnce(Self, O) -> Self) -> Self
    where
        Self: Sized,
        O: Sized,
    {
        if let Some(inner) = option {
            func(self, inner)
        } else {
            self
        }
    }

    fn try_pipe_map<O, E>(
        self,
        option: Option<O>,
        func: impl FnOnce(Self, O) -> Result<Self, E>,
    ) -> Result<Self, E>
    where
        Self: Sized,
        O: Sized,
    {
        if let Some(inner) = option {
            func(self, inner)
        } else {
            Ok(self)
        }
    }
}

impl<T: tap::Pipe> PipeMap for T {}

/// Finds the closest `x` not exceeding `index` where `is_char_boundary(x)` is `true`.
pub(crate) fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        // a char boundary is always within four bytes
        (index.saturating_sub(3)..=index)
            .rev()
            .find(|&i| s.is_char_boundary(i))
            .unwrap_or(0)
    }
}

/// Cut `text` to at most `max_len` bytes, preferring to end on a full line.
///
/// Returns the text unchanged if it already fits.
pub(crate) fn clamp_lines(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let cut = &text[..floor_char_boundary(text, max_len)];
    match cut.rfind('\n') {
        Some(newline) => &cut[..newline],
        None => cut,
    }
}
