/// One edit typed at the prompt, tagged by its leading sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    Prepend(&'a str),     // <name
    RemoveFirst(&'a str), // -name
    Append(&'a str),      // >name, or a bare name
}

impl<'a> Directive<'a> {
    /// Returns `None` for empty input.
    pub fn classify(input: &'a str) -> Option<Self> {
        let mut chars = input.chars();
        let directive = match chars.next()? {
            '<' => Directive::Prepend(chars.as_str()),
            '-' => Directive::RemoveFirst(chars.as_str()),
            '>' => Directive::Append(chars.as_str()),
            _ => Directive::Append(input),
        };
        Some(directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_sigils() {
        assert_eq!(Directive::classify("<CSS 1"), Some(Directive::Prepend("CSS 1")));
        assert_eq!(
            Directive::classify("-CSS 1"),
            Some(Directive::RemoveFirst("CSS 1"))
        );
        assert_eq!(Directive::classify(">CSS 1"), Some(Directive::Append("CSS 1")));
    }

    #[test]
    fn test_classify_bare_name_appends_whole_input() {
        assert_eq!(Directive::classify("CSS 1"), Some(Directive::Append("CSS 1")));
        assert_eq!(Directive::classify("C"), Some(Directive::Append("C")));
    }

    #[test]
    fn test_classify_empty_input() {
        assert_eq!(Directive::classify(""), None);
    }

    #[test]
    fn test_only_first_sigil_is_stripped() {
        assert_eq!(Directive::classify(">>x"), Some(Directive::Append(">x")));
        assert_eq!(Directive::classify("<-x"), Some(Directive::Prepend("-x")));
    }

    #[test]
    fn test_classify_multibyte_first_char() {
        assert_eq!(Directive::classify("日本語"), Some(Directive::Append("日本語")));
    }
}
