use crate::artifacts::moved::intern::Interner;
use crate::domain::line::{DiffLine, GroupId, Sign};

/// Index of an entry inside the per-diff match arena.
pub type EntryId = usize;

/// Arena record for one added/removed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEntry {
    /// Position of the line in the emitted stream.
    pub(crate) line: usize,
    /// Next entry with the same group id and the same sign, in scan order.
    pub(crate) next_match: Option<EntryId>,
    /// Next entry of the same sign immediately following in emission order.
    /// A context line or a sign change in between breaks the link.
    pub(crate) next_line: Option<EntryId>,
}

#[derive(Debug, Clone, Copy, Default)]
struct CandidateChain {
    head: Option<EntryId>,
    tail: Option<EntryId>,
}

#[derive(Debug, Clone, Copy, Default)]
struct GroupChains {
    added: CandidateChain,
    removed: CandidateChain,
}

/// Per-diff lookup from a content group to every line carrying that content,
/// split by sign, each list in original appearance order.
///
/// Built in the same pass that interns the lines, and discarded with the
/// interner when the detection call returns.
pub struct MatchIndex {
    entries: Vec<MatchEntry>,
    groups: Vec<GroupChains>,
}

impl MatchIndex {
    /// Interns every added/removed line, writes the group id back onto the
    /// line, and records the line in its group's candidate chain.
    pub fn build<'a>(lines: &mut [DiffLine<'a>], interner: &mut Interner<'a>) -> Self {
        let mut index = MatchIndex {
            entries: Vec::new(),
            groups: Vec::new(),
        };
        let mut prev: Option<EntryId> = None;

        for position in 0..lines.len() {
            if !lines[position].sign.is_change() {
                prev = None;
                continue;
            }

            let group = interner.intern(&lines[position]);
            lines[position].group = Some(group);

            let id = index.entries.len();
            index.entries.push(MatchEntry {
                line: position,
                next_match: None,
                next_line: None,
            });

            if let Some(prev_id) = prev {
                let prev_line = index.entries[prev_id].line;
                if lines[prev_line].sign == lines[position].sign {
                    index.entries[prev_id].next_line = Some(id);
                }
            }
            prev = Some(id);

            if group == index.groups.len() {
                index.groups.push(GroupChains::default());
            }
            let chain = match lines[position].sign {
                Sign::Added => &mut index.groups[group].added,
                Sign::Removed => &mut index.groups[group].removed,
                Sign::Context => unreachable!("context lines are never interned"),
            };
            match chain.tail {
                Some(tail) => index.entries[tail].next_match = Some(id),
                None => chain.head = Some(id),
            }
            chain.tail = Some(id);
        }

        index
    }

    /// Head of the candidate chain for a group and sign, if any line of that
    /// sign carries the group's content.
    pub fn candidates(&self, group: GroupId, sign: Sign) -> Option<EntryId> {
        let chains = &self.groups[group];
        match sign {
            Sign::Added => chains.added.head,
            Sign::Removed => chains.removed.head,
            Sign::Context => None,
        }
    }

    pub fn entry(&self, id: EntryId) -> &MatchEntry {
        &self.entries[id]
    }
}
