use bitflags::bitflags;

/// Lines of one side of a diff, as loaded from a file.
pub type LineSet = Vec<String>;

/// Canonical identifier for a line's content under the active whitespace policy.
pub type GroupId = usize;

/// Visual width of a tab stop when measuring indentation.
pub const TAB_WIDTH: usize = 8;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LineFlags: u8 {
        const MOVED = 0b01;
        const MOVED_ALT = 0b10;
        const MOVED_MASK = Self::MOVED.bits() | Self::MOVED_ALT.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Context,
    Added,
    Removed,
}

impl Sign {
    pub fn opposite(self) -> Self {
        match self {
            Sign::Added => Sign::Removed,
            Sign::Removed => Sign::Added,
            Sign::Context => unreachable!("context lines have no opposite sign"),
        }
    }

    pub fn is_change(self) -> bool {
        !matches!(self, Sign::Context)
    }

    pub fn marker(self) -> char {
        match self {
            Sign::Context => ' ',
            Sign::Added => '+',
            Sign::Removed => '-',
        }
    }
}

/// Visual width of a line's leading indentation, with tabs expanded to
/// `TAB_WIDTH`-column stops. Lines without any non-whitespace content carry
/// `Blank` instead: they impose no indentation constraint when matching
/// re-indented blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentWidth {
    Blank,
    Columns(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    /// Byte offset of the first character past the leading indentation.
    /// For blank lines this is the full line length.
    pub(crate) offset: usize,
    pub(crate) width: IndentWidth,
}

impl Indent {
    pub fn measure(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut offset = 0;

        // Vertical tabs, form feeds and interior carriage returns count as
        // indentation noise: skip them without widening the indent.
        while offset < bytes.len()
            && (matches!(bytes[offset], b'\x0b' | b'\x0c')
                || (bytes[offset] == b'\r' && offset + 1 < bytes.len()))
        {
            offset += 1;
        }

        let mut width = 0;
        while offset < bytes.len() {
            match bytes[offset] {
                b' ' => width += 1,
                b'\t' => width += TAB_WIDTH - (width % TAB_WIDTH),
                _ => break,
            }
            offset += 1;
        }

        if bytes[offset..].iter().all(u8::is_ascii_whitespace) {
            Indent {
                offset: bytes.len(),
                width: IndentWidth::Blank,
            }
        } else {
            Indent {
                offset,
                width: IndentWidth::Columns(width),
            }
        }
    }
}

/// One emitted line of a rendered diff.
///
/// The text is borrowed from the edit script that produced the line stream;
/// this type never copies content. `group` and `flags` start out unset and
/// are written exactly once by the moved-line detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine<'a> {
    pub(crate) sign: Sign,
    pub(crate) text: &'a str,
    pub(crate) indent: Indent,
    pub(crate) group: Option<GroupId>,
    pub(crate) flags: LineFlags,
}

impl<'a> DiffLine<'a> {
    pub fn new(sign: Sign, text: &'a str) -> Self {
        Self {
            sign,
            text,
            indent: Indent::measure(text),
            group: None,
            flags: LineFlags::empty(),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn flags(&self) -> LineFlags {
        self.flags
    }

    pub fn is_moved(&self) -> bool {
        self.flags.contains(LineFlags::MOVED)
    }

    /// The text as seen by content matching: the full line, or the line with
    /// its leading indentation stripped when indentation changes are allowed.
    pub(crate) fn matchable_text(&self, strip_indent: bool) -> &'a str {
        if strip_indent {
            &self.text[self.indent.offset..]
        } else {
            self.text
        }
    }
}
