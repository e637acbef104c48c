use derive_new::new;

/// Alternative spellings accepted for `--color-moved` modes.
pub const MOVED_MODE_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "default" => "zebra",
    "true" => "zebra",
    "false" => "no",
};

/// How detected moved blocks are reported to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovedMode {
    /// Flag every added/removed line that has an opposite-sign twin anywhere
    /// in the diff, without tracking blocks.
    Plain,
    /// Track blocks but keep a single color per side.
    Blocks,
    /// Track blocks and alternate between two colors per side so adjacent
    /// blocks stay distinguishable.
    #[default]
    Zebra,
    /// Like `Zebra`, but the renderer dims the interior of each block.
    DimmedZebra,
}

impl MovedMode {
    /// Parses a `--color-moved` mode name. `Ok(None)` means detection is
    /// switched off.
    pub fn try_parse(raw: &str) -> anyhow::Result<Option<Self>> {
        let canonical = MOVED_MODE_ALIASES.get(raw).copied().unwrap_or(raw);

        match canonical {
            "no" => Ok(None),
            "plain" => Ok(Some(MovedMode::Plain)),
            "blocks" => Ok(Some(MovedMode::Blocks)),
            "zebra" => Ok(Some(MovedMode::Zebra)),
            "dimmed-zebra" => Ok(Some(MovedMode::DimmedZebra)),
            _ => anyhow::bail!("invalid --color-moved mode: '{raw}'"),
        }
    }
}

/// Whitespace treatment when comparing line content for move detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespacePolicy {
    #[default]
    Exact,
    IgnoreSpaceAtEol,
    IgnoreSpaceChange,
    IgnoreAllSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct MovedConfig {
    pub mode: MovedMode,
    pub policy: WhitespacePolicy,
    /// Ignore leading indentation when matching, as long as the indentation
    /// shift is uniform across a whole block.
    pub allow_indentation_change: bool,
}

impl MovedConfig {
    /// Builds the detection configuration from the raw `--color-moved` and
    /// `--color-moved-ws` arguments. `Ok(None)` means detection is off.
    pub fn from_cli(mode: Option<&str>, ws: Option<&str>) -> anyhow::Result<Option<Self>> {
        let Some(mode) = mode else {
            if ws.is_some() {
                anyhow::bail!("--color-moved-ws requires --color-moved");
            }
            return Ok(None);
        };

        let Some(mode) = MovedMode::try_parse(mode)? else {
            return Ok(None);
        };

        let (policy, allow_indentation_change) = match ws {
            Some(ws) => Self::parse_ws(ws)?,
            None => (WhitespacePolicy::Exact, false),
        };

        Ok(Some(Self::new(mode, policy, allow_indentation_change)))
    }

    fn parse_ws(spec: &str) -> anyhow::Result<(WhitespacePolicy, bool)> {
        let mut policy: Option<WhitespacePolicy> = None;
        let mut allow_indentation_change = false;

        for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let parsed = match token {
                "no" => {
                    policy = None;
                    allow_indentation_change = false;
                    continue;
                }
                "allow-indentation-change" => {
                    allow_indentation_change = true;
                    continue;
                }
                "ignore-space-at-eol" => WhitespacePolicy::IgnoreSpaceAtEol,
                "ignore-space-change" => WhitespacePolicy::IgnoreSpaceChange,
                "ignore-all-space" => WhitespacePolicy::IgnoreAllSpace,
                _ => anyhow::bail!("invalid --color-moved-ws mode: '{token}'"),
            };

            if policy.is_some() {
                anyhow::bail!("cannot combine --color-moved-ws whitespace modes");
            }
            policy = Some(parsed);
        }

        if allow_indentation_change && policy.is_some() {
            anyhow::bail!(
                "--color-moved-ws=allow-indentation-change cannot be combined with other whitespace modes"
            );
        }

        Ok((policy.unwrap_or_default(), allow_indentation_change))
    }
}
