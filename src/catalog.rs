//! Gettext-style PO catalogs.
//!
//! Covers the subset of the PO format the sync protocol needs: a header
//! entry, `msgid`/`msgstr` pairs with gettext escaping, and multi-line
//! string continuation. Entries keep insertion order and deduplicate on
//! msgid, so pushing the same source string twice yields one entry.

use anyhow::{bail, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub msgid: String,
    pub msgstr: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source string with no translation yet. Duplicates are ignored.
    pub fn add(&mut self, msgid: &str) {
        self.add_translation(msgid, "");
    }

    /// Add a source string with its translation. Re-adding an existing
    /// msgid updates the translation in place.
    pub fn add_translation(&mut self, msgid: &str, msgstr: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.msgid == msgid) {
            if !msgstr.is_empty() {
                entry.msgstr = msgstr.to_string();
            }
            return;
        }
        self.entries.push(Entry {
            msgid: msgid.to_string(),
            msgstr: msgstr.to_string(),
        });
    }

    /// Translation for `msgid`, if present and non-empty.
    pub fn translation(&self, msgid: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.msgid == msgid && !e.msgstr.is_empty())
            .map(|e| e.msgstr.as_str())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Serialize as a PO file with a standard UTF-8 header entry.
    pub fn to_po(&self) -> String {
        let mut out = String::new();
        out.push_str("msgid \"\"\n");
        out.push_str("msgstr \"\"\n");
        out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
        out.push_str("\"MIME-Version: 1.0\\n\"\n");

        for entry in &self.entries {
            out.push('\n');
            out.push_str(&format!("msgid \"{}\"\n", escape(&entry.msgid)));
            out.push_str(&format!("msgstr \"{}\"\n", escape(&entry.msgstr)));
        }
        out
    }

    /// Parse a PO file. The header entry (empty msgid) is dropped.
    pub fn from_po(input: &str) -> Result<Self> {
        #[derive(PartialEq)]
        enum Field {
            None,
            Msgid,
            Msgstr,
        }

        let mut catalog = Catalog::new();
        let mut msgid = String::new();
        let mut msgstr = String::new();
        let mut field = Field::None;
        let mut seen_entry = false;

        let flush =
            |msgid: &mut String, msgstr: &mut String, catalog: &mut Catalog| {
                if !msgid.is_empty() {
                    catalog.add_translation(msgid, msgstr);
                }
                msgid.clear();
                msgstr.clear();
            };

        for (lineno, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix("msgid ") {
                if seen_entry {
                    flush(&mut msgid, &mut msgstr, &mut catalog);
                }
                seen_entry = true;
                msgid = unquote(rest, lineno)?;
                field = Field::Msgid;
            } else if let Some(rest) = line.strip_prefix("msgstr ") {
                msgstr = unquote(rest, lineno)?;
                field = Field::Msgstr;
            } else if line.starts_with('"') {
                let piece = unquote(line, lineno)?;
                match field {
                    Field::Msgid => msgid.push_str(&piece),
                    Field::Msgstr => msgstr.push_str(&piece),
                    Field::None => bail!("line {}: continuation outside an entry", lineno + 1),
                }
            } else {
                bail!("line {}: unrecognized PO line: {}", lineno + 1, line);
            }
        }
        flush(&mut msgid, &mut msgstr, &mut catalog);

        Ok(catalog)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

fn unquote(s: &str, lineno: usize) -> Result<String> {
    let s = s.trim();
    let inner = s
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| anyhow::anyhow!("line {}: expected quoted string: {}", lineno + 1, s))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => bail!("line {}: dangling escape", lineno + 1),
        }
    }
    Ok(out)
}
