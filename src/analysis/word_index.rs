use std::collections::HashMap;

/// Occurrence counts of every word in a text
///
/// A word is a maximal run of `[A-Za-z0-9_]`, so looking a name up here
/// counts exactly the matches of `\bname\b` under ASCII word boundaries:
/// `Button` is not found inside `SubmitButton`. Names containing other
/// characters (`$store`, non-ASCII identifiers) fall back to a scan that
/// treats every identifier character as part of the word.
#[derive(Debug, Default)]
pub struct WordIndex<'a> {
    text: &'a str,
    counts: HashMap<&'a str, usize>,
}

impl<'a> WordIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut counts: HashMap<&'a str, usize> = HashMap::new();
        let bytes = text.as_bytes();
        let mut start = None;

        for (i, &b) in bytes.iter().enumerate() {
            match (is_word_byte(b), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    *counts.entry(&text[s..i]).or_default() += 1;
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            *counts.entry(&text[s..]).or_default() += 1;
        }

        Self { text, counts }
    }

    /// Number of word-boundary occurrences of `name`
    pub fn count(&self, name: &str) -> usize {
        if is_plain_word(name) {
            self.counts.get(name).copied().unwrap_or(0)
        } else {
            self.scan(name)
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// Distinct words of the text, used to build tree-wide document counts
    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.counts.keys().copied()
    }

    fn scan(&self, name: &str) -> usize {
        if name.is_empty() {
            return 0;
        }
        self.text
            .match_indices(name)
            .filter(|(pos, _)| {
                let before = self.text[..*pos].chars().next_back();
                let after = self.text[pos + name.len()..].chars().next();
                !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char)
            })
            .count()
    }
}

/// Check that a name only holds `[A-Za-z0-9_]`, so the word table answers it
pub fn is_plain_word(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_word_byte)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
