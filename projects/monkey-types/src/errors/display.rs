use super::*;

impl Error for MonkeyError {}

impl Debug for MonkeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.kind, f)
    }
}

impl Display for MonkeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)?;
        if let MonkeyErrorKind::Parse { messages } = self.kind.as_ref() {
            for message in messages {
                write!(f, "\n\t{}", message)?;
            }
        }
        Ok(())
    }
}
