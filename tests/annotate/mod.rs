mod adjacent_blocks_alternate_stripe_classes;
mod moved_block_is_flagged_on_both_sides;
mod plain_mode_flags_every_matched_line;
mod reindented_block_is_ignored_without_ws_tolerance;
mod reindented_block_matches_with_allow_indentation_change;
mod respaced_block_matches_with_ignore_space_change;
mod rewound_false_start_prefers_the_longer_block;
mod unique_lines_are_never_flagged;
