//! A minimal forward-only tag scanner
//!
//! Generated reports are regular enough that a full HTML parser would be
//! wasted on them, but the markup still carries quoted attributes, comments,
//! and an embedded script whose body uses bare `<` characters. The scanner
//! walks tags by byte offset so callers can slice the source verbatim.

/// What a scanned tag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// An opening tag, `<tr ...>`.
    Open,
    /// A self-closed tag, `<td/>`.
    SelfClosing,
    /// A closing tag, `</tr>`.
    Close,
}

#[derive(Debug)]
struct Attr<'a> {
    name: &'a str,
    value: Option<&'a str>,
}

/// One tag, with its byte extent in the scanned source.
///
/// Comments, doctypes, and processing instructions are never surfaced as
/// tags; the scanner steps over them.
#[derive(Debug)]
pub struct Tag<'a> {
    name: &'a str,
    kind: TagKind,
    /// Offset of the leading `<`.
    pub start: usize,
    /// Offset just past the trailing `>`.
    pub end: usize,
    attrs: Vec<Attr<'a>>,
}

impl<'a> Tag<'a> {
    /// The tag name as written, case preserved.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// What kind of tag this is.
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Case-insensitive name check.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// True for opening tags only, not self-closed ones.
    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    /// The raw value of the first attribute called `name`, quotes stripped.
    /// Attribute names compare case-insensitively; values are untouched.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .and_then(|a| a.value)
    }

    /// Whether the `class` attribute carries `token` as a whole
    /// whitespace-separated word. Token comparison is case-sensitive, like
    /// class lookup in a rendered report.
    pub fn class_has_token(&self, token: &str) -> bool {
        self.attr("class")
            .map(|v| v.split_ascii_whitespace().any(|t| t == token))
            .unwrap_or(false)
    }

    /// Whether this tag can enclose content that a matching close tag ends.
    pub fn has_content(&self) -> bool {
        self.kind == TagKind::Open && !is_void(self.name)
    }
}

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| name.eq_ignore_ascii_case(v))
}

/// Forward-only scanner over a source string.
#[derive(Debug)]
pub struct TagScanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    /// Scan `source` from the beginning.
    pub fn new(source: &'a str) -> Self {
        TagScanner { source, pos: 0 }
    }

    /// Current byte position; the next tag is searched from here.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The next tag, or `None` at end of input.
    ///
    /// Text, comments, doctypes, and processing instructions are skipped. A
    /// `<` that does not begin a tag is treated as text. After an opening
    /// `script` or `style` tag the scanner jumps straight to the matching
    /// close tag, so `<` characters inside the element body are inert.
    pub fn next_tag(&mut self) -> Option<Tag<'a>> {
        let bytes = self.source.as_bytes();
        loop {
            let Some(off) = self.source[self.pos..].find('<') else {
                self.pos = self.source.len();
                return None;
            };
            let start = self.pos + off;
            let after = start + 1;
            match bytes.get(after).copied() {
                Some(b'!') => {
                    if self.source[after + 1..].starts_with("--") {
                        self.pos = match self.source[after + 3..].find("-->") {
                            Some(i) => after + 3 + i + 3,
                            None => self.source.len(),
                        };
                    } else {
                        // Doctype or bogus comment, skip to the close angle.
                        self.pos = match self.source[after..].find('>') {
                            Some(i) => after + i + 1,
                            None => self.source.len(),
                        };
                    }
                }
                Some(b'?') => {
                    self.pos = match self.source[after..].find('>') {
                        Some(i) => after + i + 1,
                        None => self.source.len(),
                    };
                }
                Some(b'/') => {
                    let name_start = after + 1;
                    let name_end = scan_name(bytes, name_start);
                    if name_end == name_start {
                        // "</>" or similar, not a tag.
                        self.pos = match self.source[name_start..].find('>') {
                            Some(i) => name_start + i + 1,
                            None => self.source.len(),
                        };
                        continue;
                    }
                    let Some(i) = self.source[name_end..].find('>') else {
                        self.pos = self.source.len();
                        return None;
                    };
                    let end = name_end + i + 1;
                    self.pos = end;
                    return Some(Tag {
                        name: &self.source[name_start..name_end],
                        kind: TagKind::Close,
                        start,
                        end,
                        attrs: Vec::new(),
                    });
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    return self.parse_open(start);
                }
                _ => {
                    // Stray '<' in text content.
                    self.pos = after;
                }
            }
        }
    }

    /// Scan forward to the close tag matching an opening tag named `name`
    /// that was just returned, counting nested same-name elements. Returns
    /// the matching close tag, or `None` if the element never closes.
    pub fn matching_close(&mut self, name: &str) -> Option<Tag<'a>> {
        let mut depth = 1usize;
        while let Some(tag) = self.next_tag() {
            if !tag.is_named(name) {
                continue;
            }
            match tag.kind {
                TagKind::Open => depth += 1,
                TagKind::Close => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(tag);
                    }
                }
                TagKind::SelfClosing => {}
            }
        }
        None
    }

    fn parse_open(&mut self, start: usize) -> Option<Tag<'a>> {
        let bytes = self.source.as_bytes();
        let name_start = start + 1;
        let name_end = scan_name(bytes, name_start);
        let name = &self.source[name_start..name_end];

        let mut attrs = Vec::new();
        let mut self_closing = false;
        let mut i = name_end;
        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i).copied() {
                None => {
                    // Unterminated tag, treat the rest as text.
                    self.pos = self.source.len();
                    return None;
                }
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') => {
                    i += 1;
                    if bytes.get(i).copied() == Some(b'>') {
                        self_closing = true;
                        i += 1;
                        break;
                    }
                }
                Some(_) => {
                    let attr_start = i;
                    while i < bytes.len()
                        && !bytes[i].is_ascii_whitespace()
                        && !matches!(bytes[i], b'=' | b'>' | b'/')
                    {
                        i += 1;
                    }
                    let attr_name = &self.source[attr_start..i];
                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    let value = if bytes.get(i).copied() == Some(b'=') {
                        i += 1;
                        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                            i += 1;
                        }
                        match bytes.get(i).copied() {
                            Some(q @ (b'"' | b'\'')) => {
                                let value_start = i + 1;
                                let Some(j) =
                                    self.source[value_start..].find(q as char)
                                else {
                                    self.pos = self.source.len();
                                    return None;
                                };
                                i = value_start + j + 1;
                                Some(&self.source[value_start..value_start + j])
                            }
                            _ => {
                                let value_start = i;
                                while i < bytes.len()
                                    && !bytes[i].is_ascii_whitespace()
                                    && bytes[i] != b'>'
                                {
                                    i += 1;
                                }
                                Some(&self.source[value_start..i])
                            }
                        }
                    } else {
                        None
                    };
                    if !attr_name.is_empty() {
                        attrs.push(Attr { name: attr_name, value });
                    }
                }
            }
        }

        let end = i;
        self.pos = end;
        if !self_closing
            && (name.eq_ignore_ascii_case("script")
                || name.eq_ignore_ascii_case("style"))
        {
            self.skip_raw_text(name);
        }
        Some(Tag {
            name,
            kind: if self_closing { TagKind::SelfClosing } else { TagKind::Open },
            start,
            end,
            attrs,
        })
    }

    /// Advance to the start of `</name`, leaving the close tag unconsumed.
    /// Script and style bodies are raw text; nothing inside them is markup.
    fn skip_raw_text(&mut self, name: &str) {
        let bytes = self.source.as_bytes();
        let mut i = self.pos;
        loop {
            let Some(off) = self.source[i..].find("</") else {
                self.pos = self.source.len();
                return;
            };
            let candidate = i + off;
            let name_start = candidate + 2;
            let name_end = name_start + name.len();
            if name_end <= bytes.len()
                && bytes[name_start..name_end].eq_ignore_ascii_case(name.as_bytes())
            {
                match bytes.get(name_end).copied() {
                    None | Some(b'>') | Some(b'/') => {
                        self.pos = candidate;
                        return;
                    }
                    Some(c) if c.is_ascii_whitespace() => {
                        self.pos = candidate;
                        return;
                    }
                    _ => {}
                }
            }
            i = candidate + 2;
        }
    }
}

fn scan_name(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tags(source: &str) -> Vec<(String, TagKind)> {
        let mut scanner = TagScanner::new(source);
        let mut tags = Vec::new();
        while let Some(tag) = scanner.next_tag() {
            tags.push((tag.name().to_string(), tag.kind()));
        }
        tags
    }

    #[test]
    fn test_scans_open_and_close_tags_with_extents() {
        let source = "text <td class=\"x\">cell</td> more";
        let mut scanner = TagScanner::new(source);

        let open = scanner.next_tag().unwrap();
        assert_eq!(open.name(), "td");
        assert_eq!(open.kind(), TagKind::Open);
        assert_eq!(&source[open.start..open.end], "<td class=\"x\">");

        let close = scanner.next_tag().unwrap();
        assert_eq!(close.kind(), TagKind::Close);
        assert_eq!(&source[close.start..close.end], "</td>");
        assert!(scanner.next_tag().is_none());
    }

    #[test]
    fn test_attribute_forms() {
        let source = "<td id=\"a\" CLASS='b c' width=120 disabled>";
        let mut scanner = TagScanner::new(source);
        let tag = scanner.next_tag().unwrap();
        assert_eq!(tag.attr("id"), Some("a"));
        assert_eq!(tag.attr("class"), Some("b c"));
        assert_eq!(tag.attr("width"), Some("120"));
        assert_eq!(tag.attr("disabled"), None, "bare attribute has no value");
        assert_eq!(tag.attr("missing"), None);
    }

    #[test]
    fn test_quoted_value_may_contain_angle_bracket() {
        let source = "<a title=\"1 > 0\" href='x'>link</a>";
        let mut scanner = TagScanner::new(source);
        let tag = scanner.next_tag().unwrap();
        assert_eq!(tag.attr("title"), Some("1 > 0"));
        assert_eq!(tag.attr("href"), Some("x"));
        assert_eq!(
            scanner.next_tag().unwrap().kind(),
            TagKind::Close,
            "close tag should follow"
        );
    }

    #[test]
    fn test_class_token_matching_is_exact() {
        let source = "<td class=\"odd ruleColumn wide\"><td class=\"ruleColumnX\">";
        let mut scanner = TagScanner::new(source);
        let first = scanner.next_tag().unwrap();
        assert!(first.class_has_token("ruleColumn"));
        assert!(!first.class_has_token("rule"));
        let second = scanner.next_tag().unwrap();
        assert!(!second.class_has_token("ruleColumn"));
    }

    #[test]
    fn test_comments_and_doctype_are_skipped() {
        let source = "<!DOCTYPE html><!-- <tr> not a row --><p>hi</p>";
        assert_eq!(
            all_tags(source),
            vec![
                ("p".to_string(), TagKind::Open),
                ("p".to_string(), TagKind::Close),
            ]
        );
    }

    #[test]
    fn test_script_body_is_raw_text() {
        let source = "<script>if (a < b) { x = '</span>'; }</script><td>";
        let tags = all_tags(source);
        assert_eq!(
            tags,
            vec![
                ("script".to_string(), TagKind::Open),
                ("script".to_string(), TagKind::Close),
                ("td".to_string(), TagKind::Open),
            ]
        );
    }

    #[test]
    fn test_script_close_is_case_insensitive() {
        let source = "<SCRIPT>var x = 1 < 2;</SCRIPT><b>";
        let tags = all_tags(source);
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[2].0, "b");
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        let source = "a < b <em>c</em>";
        assert_eq!(
            all_tags(source),
            vec![
                ("em".to_string(), TagKind::Open),
                ("em".to_string(), TagKind::Close),
            ]
        );
    }

    #[test]
    fn test_self_closing_and_void_tags() {
        let source = "<br/><hr><td/>";
        let mut scanner = TagScanner::new(source);
        let br = scanner.next_tag().unwrap();
        assert_eq!(br.kind(), TagKind::SelfClosing);
        assert!(!br.has_content());
        let hr = scanner.next_tag().unwrap();
        assert_eq!(hr.kind(), TagKind::Open);
        assert!(!hr.has_content(), "hr is void even without a slash");
        let td = scanner.next_tag().unwrap();
        assert_eq!(td.kind(), TagKind::SelfClosing);
    }

    #[test]
    fn test_matching_close_honors_nesting() {
        let source = "<div><div>inner</div>tail</div><div>next</div>";
        let mut scanner = TagScanner::new(source);
        let outer = scanner.next_tag().unwrap();
        assert_eq!(outer.name(), "div");
        let close = scanner.matching_close("div").unwrap();
        assert_eq!(&source[close.start..close.end], "</div>");
        assert_eq!(&source[outer.end..close.start], "<div>inner</div>tail");
    }

    #[test]
    fn test_matching_close_missing_returns_none() {
        let mut scanner = TagScanner::new("<td>never closed");
        scanner.next_tag().unwrap();
        assert!(scanner.matching_close("td").is_none());
    }

    #[test]
    fn test_tag_names_match_case_insensitively() {
        let source = "<TR CLASS=\"row\"></tr>";
        let mut scanner = TagScanner::new(source);
        let tag = scanner.next_tag().unwrap();
        assert!(tag.is_named("tr"));
        assert_eq!(tag.attr("class"), Some("row"));
    }
}
