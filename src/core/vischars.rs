// src/core/vischars.rs
// Visible-text character iterator for an HTML fragment (typically one table cell).
// Skips tags (<...>), decodes entities (&...;), turns line-breaking tags into ' '.
// Whitespace is passed through untouched; canonicalizing it is the normalizer's job.

use super::sanitize::decode_entity;

// Tags whose presence separates words in rendered output.
const BREAKING_TAGS: [&str; 6] = ["br", "p", "div", "li", "tr", "td"];

pub struct VisChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> VisChars<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len() } }

    /// '<' followed by a letter, '/', '!' or '?' opens markup; anything else is text.
    #[inline]
    fn at_tag(&self) -> bool {
        matches!(self.b.get(self.i + 1), Some(c) if c.is_ascii_alphabetic() || matches!(*c, b'/' | b'!' | b'?'))
    }

    /// Called when the current byte is '<'. Returns true for a word-breaking tag.
    #[inline]
    fn skip_tag(&mut self) -> bool {
        let start = self.i + 1;
        let mut end = self.n;
        self.i += 1;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while self.i < self.n {
            match self.b[self.i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"'  if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => { end = self.i; self.i += 1; break; }
                _ => {}
            }
            self.i += 1;
        }
        let body = &self.s[start.min(end)..end];
        let name: String = body
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        BREAKING_TAGS.contains(&name.as_str())
    }

    /// Called when the current byte is '&'. Decodes a known entity; an unknown
    /// or unterminated one yields a literal '&' and leaves the rest as text.
    #[inline]
    fn take_entity(&mut self) -> char {
        let body_start = self.i + 1;
        let semi = self.b[body_start..self.n.min(body_start + 12)]
            .iter()
            .position(|&c| c == b';');
        if let Some(off) = semi {
            if let Some(ch) = decode_entity(&self.s[body_start..body_start + off]) {
                self.i = body_start + off + 1;
                return ch;
            }
        }
        self.i += 1;
        '&'
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s.get(self.i..)?.chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl<'a> Iterator for VisChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' if self.at_tag() => {
                    if self.skip_tag() { return Some(' '); }
                    continue;
                }
                b'&' => return Some(self.take_entity()),
                _ => return self.next_char(),
            }
        }
        None
    }
}

/// Visible text of an HTML fragment, trimmed.
pub fn visible_text(fragment: &str) -> String {
    VisChars::new(fragment).collect::<String>().trim().to_string()
}
