// src/core/html.rs
// Low-level HTML tag scanning.
// No DOM, no validation. Tag and attribute names are
// matched case-insensitively on ASCII, attribute values are quote-aware.

/// One tag as it appears in the source, with byte offsets into the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Lowercased tag name without the leading `/`.
    pub name: String,
    pub is_close: bool,
    /// Raw text after the tag name up to (not including) `>`.
    pub attrs: &'a str,
    /// Offset of `<`.
    pub start: usize,
    /// Offset just past `>`.
    pub end: usize,
}

/// Iterator over the tags of a document. Comments, doctypes and processing
/// instructions are skipped; the bodies of `<script>` and `<style>` are not
/// scanned for tags.
pub struct Tags<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
}

impl<'a> Tags<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0 }
    }

    fn next_byte_pos(&self, from: usize, ch: u8) -> Option<usize> {
        self.b.get(from..)?.iter().position(|&c| c == ch).map(|off| from + off)
    }

    // Position of the closing '>' of a tag opened at `lt`, skipping quoted values.
    fn tag_end(&self, lt: usize) -> Option<usize> {
        let mut in_s = false;
        let mut in_d = false;
        let mut j = lt + 1;
        while j < self.b.len() {
            match self.b[j] {
                b'\'' if !in_d => in_s = !in_s,
                b'"' if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => return Some(j),
                _ => {}
            }
            j += 1;
        }
        None
    }

    // Skip the raw-text body of <script>/<style> up to the matching closer.
    fn skip_raw_text(&mut self, name: &str) {
        let close = join!("</", name);
        let rest = to_lower(&self.s[self.i..]);
        self.i = match rest.find(&close) {
            Some(off) => self.i + off,
            None => self.b.len(),
        };
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.s;
        loop {
            let lt = self.next_byte_pos(self.i, b'<')?;

            if s[lt..].starts_with("<!--") {
                self.i = match s[lt + 4..].find("-->") {
                    Some(off) => lt + 4 + off + 3,
                    None => self.b.len(),
                };
                continue;
            }
            if matches!(self.b.get(lt + 1), Some(b'!') | Some(b'?')) {
                self.i = self.next_byte_pos(lt + 1, b'>').map_or(self.b.len(), |gt| gt + 1);
                continue;
            }

            let is_close = self.b.get(lt + 1) == Some(&b'/');
            let name_start = if is_close { lt + 2 } else { lt + 1 };
            let name_len = self.b.get(name_start..)?
                .iter()
                .take_while(|c| c.is_ascii_alphanumeric())
                .count();
            if name_len == 0 || !self.b[name_start].is_ascii_alphabetic() {
                // A stray '<' in text, e.g. "a < b" or "n<3".
                self.i = lt + 1;
                continue;
            }

            let Some(gt) = self.tag_end(lt) else {
                self.i = self.b.len();
                return None;
            };
            let name_end = name_start + name_len;
            let name = to_lower(&s[name_start..name_end]);
            let attrs = s[name_end..gt].trim_end_matches('/');
            self.i = gt + 1;

            if !is_close && (name == "script" || name == "style") {
                self.skip_raw_text(&name);
            }
            return Some(Tag { name, is_close, attrs, start: lt, end: gt + 1 });
        }
    }
}

/// Value of attribute `name` inside a tag's attribute text.
/// Handles `a="x"`, `a='x'` and unquoted `a=x`.
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(attrs);
    let want = to_lower(name);
    let bytes = lc.as_bytes();
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find(&want) {
        let at = from + rel;
        from = at + want.len();

        // Must be a whole attribute name: preceded by whitespace, followed by '='.
        let boundary_before = at == 0 || bytes[at - 1].is_ascii_whitespace();
        let after = lc[from..].trim_start();
        if !boundary_before || !after.starts_with('=') {
            continue;
        }
        let eq = lc.len() - after.len();
        let val = attrs[eq + 1..].trim_start();
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[start_off..].find(q).map(|e| start_off + e),
            None => val.find(|c: char| c.is_ascii_whitespace()),
        }
        .unwrap_or(val.len());
        return Some(&val[start_off..end]);
    }
    None
}

/// True if the tag's `class` attribute lists `token` (whitespace-separated, case-insensitive).
pub fn has_class(attrs: &str, token: &str) -> bool {
    attr_value(attrs, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(token)))
        .unwrap_or(false)
}

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
