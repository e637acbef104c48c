use crate::domain::line::{DiffLine, GroupId};
use crate::domain::policy::WhitespacePolicy;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Bytes of a line that remain visible under a whitespace policy.
///
/// Two lines compare equal under a policy iff their normalized bytes are
/// equal, so the same function backs both the intern table's equality and
/// its hash. The common policies borrow; only run-collapsing allocates.
fn normalized_bytes(text: &str, policy: WhitespacePolicy) -> Cow<'_, [u8]> {
    let bytes = text.as_bytes();

    match policy {
        WhitespacePolicy::Exact => Cow::Borrowed(bytes),
        WhitespacePolicy::IgnoreSpaceAtEol => Cow::Borrowed(trim_trailing(bytes)),
        WhitespacePolicy::IgnoreAllSpace => Cow::Owned(
            bytes
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect(),
        ),
        WhitespacePolicy::IgnoreSpaceChange => {
            let mut normalized = Vec::with_capacity(bytes.len());
            for &b in trim_trailing(bytes) {
                if b.is_ascii_whitespace() {
                    if normalized.last() != Some(&b' ') {
                        normalized.push(b' ');
                    }
                } else {
                    normalized.push(b);
                }
            }
            Cow::Owned(normalized)
        }
    }
}

fn trim_trailing(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |pos| pos + 1);
    &bytes[..end]
}

fn content_hash(text: &str, policy: WhitespacePolicy) -> u64 {
    let mut hasher = DefaultHasher::new();
    hasher.write(&normalized_bytes(text, policy));
    hasher.finish()
}

/// Intern table key: a precomputed content hash plus the borrowed text it
/// was computed from. Equality is policy-aware, so hash collisions between
/// genuinely different contents resolve correctly.
#[derive(Debug, Clone, Copy)]
struct InternKey<'a> {
    hash: u64,
    text: &'a str,
    policy: WhitespacePolicy,
}

impl PartialEq for InternKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && normalized_bytes(self.text, self.policy) == normalized_bytes(other.text, self.policy)
    }
}

impl Eq for InternKey<'_> {}

impl Hash for InternKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// Assigns a canonical group id to every added/removed line of a diff.
///
/// The first line carrying a given normalized content claims a fresh id;
/// later lines with equal content (under the active whitespace policy, and
/// with leading indentation stripped when indentation changes are allowed)
/// get the same id back. Ids are dense and assigned in first-seen order.
///
/// The table borrows the line text and is dropped together with the rest of
/// the detection scratch state at the end of the pass.
pub struct Interner<'a> {
    policy: WhitespacePolicy,
    strip_indent: bool,
    groups: HashMap<InternKey<'a>, GroupId>,
}

impl<'a> Interner<'a> {
    pub fn new(policy: WhitespacePolicy, strip_indent: bool) -> Self {
        Self {
            policy,
            strip_indent,
            groups: HashMap::new(),
        }
    }

    pub fn intern(&mut self, line: &DiffLine<'a>) -> GroupId {
        let text = line.matchable_text(self.strip_indent);
        let key = InternKey {
            hash: content_hash(text, self.policy),
            text,
            policy: self.policy,
        };

        let next = self.groups.len();
        *self.groups.entry(key).or_insert(next)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
