mod diff_with_color_always_emits_ansi_codes;
mod identical_files_produce_no_output;
mod show_unified_diff_with_hunk_headers;
