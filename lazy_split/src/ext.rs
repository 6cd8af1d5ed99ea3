use crate::split_strings::{SplitMode, Splitter};

/// `str` extension for building a [`Splitter`] in method position, e.g.
/// `name.lazy_split('/').iter().last()`.
pub trait LazySplit {
    /// Splits on `delimiter`, keeping empty tokens.
    fn lazy_split(&self, delimiter: char) -> Splitter<'_>;

    fn lazy_split_with(&self, delimiter: char, mode: SplitMode) -> Splitter<'_>;
}

impl LazySplit for str {
    fn lazy_split(&self, delimiter: char) -> Splitter<'_> {
        self.lazy_split_with(delimiter, SplitMode::Keep)
    }

    fn lazy_split_with(&self, delimiter: char, mode: SplitMode) -> Splitter<'_> {
        Splitter::new(self, delimiter, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_or_default() {
        let cases = [
            ("refs/heads/develop", '/', "develop"),
            ("refs/", '/', ""),
            ("refs", '/', "refs"),
            ("", '/', ""),
        ];

        for (name, separator, expected) in cases {
            let last = name.lazy_split(separator).iter().last().unwrap_or_default();
            assert_eq!(last, expected, "{:?}", name);
        }
    }

    #[test]
    fn test_lazy_split_with() {
        let owned = String::from("refs//tags/");
        let tokens: Vec<&str> = owned
            .lazy_split_with('/', SplitMode::RemoveEmpty)
            .into_iter()
            .collect();

        assert_eq!(tokens, vec!["refs", "tags"]);
    }
}
