//! Dictionary membership via a fixed fan-out prefix tree
//!
//! Each node carries one slot per letter of the lowercase ASCII alphabet, so
//! a lookup walks at most `word.len()` nodes regardless of how many words the
//! dictionary holds. The tree is built once at startup and then only read;
//! `&Trie` is freely shareable across threads because nothing is mutated
//! after the build.

use std::fmt;

/// Number of child slots per node, one per letter `a..=z`.
const ALPHABET_SIZE: usize = 26;

/// Error for a word containing a character outside lowercase ASCII `a-z`
///
/// Distinct from a failed lookup: a well-formed word that simply isn't in the
/// dictionary yields `Ok(false)`, never this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidWord {
    word: String,
    position: usize,
    character: char,
}

impl InvalidWord {
    fn new(word: &str, position: usize, character: char) -> Self {
        Self {
            word: word.to_string(),
            position,
            character,
        }
    }

    /// The word that was rejected
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The offending character
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// Character position (not byte offset) of the offending character
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} at position {} of {:?} is not a lowercase letter a-z",
            self.character, self.position, self.word
        )
    }
}

impl std::error::Error for InvalidWord {}

/// One tree node: a terminal marker plus 26 owned child slots
#[derive(Debug, Default)]
struct Node {
    terminal: bool,
    children: [Option<Box<Node>>; ALPHABET_SIZE],
}

/// A prefix tree over lowercase ASCII words
///
/// Lookups cost O(word length) and never depend on dictionary size. Prefixes
/// are only members if they were inserted themselves: after inserting
/// `"aardvark"`, `"aard"` is still absent.
///
/// # Examples
/// ```
/// use shardle::core::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("aardvark").unwrap();
///
/// assert_eq!(trie.contains("aardvark"), Ok(true));
/// assert_eq!(trie.contains("aard"), Ok(false));
/// assert!(trie.contains("Aardvark").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    size: usize,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word
    ///
    /// Returns `Ok(true)` if the word was newly added and `Ok(false)` if it
    /// was already present (or empty). Only newly added words count toward
    /// [`len`](Self::len). The word is validated in full before any node is
    /// touched, so a rejected word leaves the tree unchanged.
    ///
    /// # Errors
    /// Returns [`InvalidWord`] if any character is outside `a..=z`.
    pub fn insert(&mut self, word: &str) -> Result<bool, InvalidWord> {
        check_word(word)?;
        if word.is_empty() {
            return Ok(false);
        }

        let mut node = &mut self.root;
        for slot in word.bytes().map(letter_slot) {
            node = node.children[slot].get_or_insert_with(Box::default);
        }

        if node.terminal {
            return Ok(false);
        }
        node.terminal = true;
        self.size += 1;
        Ok(true)
    }

    /// Test whether a word is in the dictionary
    ///
    /// Walks one node per letter; a missing child slot means the word is
    /// absent. The empty string is never a member.
    ///
    /// # Errors
    /// Returns [`InvalidWord`] if any character is outside `a..=z`. A
    /// malformed query is reported, never folded into "not a word".
    ///
    /// # Examples
    /// ```
    /// use shardle::core::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("cat").unwrap();
    ///
    /// assert_eq!(trie.contains("cat"), Ok(true));
    /// assert_eq!(trie.contains("dog"), Ok(false));
    /// assert_eq!(trie.contains(""), Ok(false));
    /// ```
    pub fn contains(&self, word: &str) -> Result<bool, InvalidWord> {
        check_word(word)?;

        let mut node = &self.root;
        for slot in word.bytes().map(letter_slot) {
            match &node.children[slot] {
                Some(child) => node = child,
                None => return Ok(false),
            }
        }
        Ok(node.terminal && !word.is_empty())
    }

    /// Number of distinct words inserted so far
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the trie holds no words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Reject the word unless every character is lowercase ASCII `a-z`
fn check_word(word: &str) -> Result<(), InvalidWord> {
    for (position, ch) in word.chars().enumerate() {
        if !ch.is_ascii_lowercase() {
            return Err(InvalidWord::new(word, position, ch));
        }
    }
    Ok(())
}

/// Child slot for a letter; caller guarantees `b'a'..=b'z'`
#[inline]
const fn letter_slot(letter: u8) -> usize {
    (letter - b'a') as usize
}
