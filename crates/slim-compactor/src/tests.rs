use crate::*;
use crate::rules::{self, rule};
use crate::templates::{self, default_templates};
use slim_core::{BlockTemplate, SlimConfig, SlimError, TemplatesMode, TextDocument};

// ========== Estimator ==========

#[test]
fn test_tokens_deterministic() {
    let arrows = "\u{2192}".repeat(5);
    for text in ["", "a", "hello world", "line\nline\n", arrows.as_str()] {
        let n = approximate_token_count(text);
        assert_eq!(n, approximate_token_count(text));
        assert_eq!(n, slim_core::utf16_len(text).div_ceil(4));
    }
}

#[test]
fn test_potential_in_range() {
    let repeated = "When the build fails, you should rerun it. ".repeat(40);
    let samples: [&str; 4] = [
        "",
        "short",
        "Please note that it is really very important to basically always do this.",
        repeated.as_str(),
    ];
    for s in samples {
        assert!(assess_compression_potential(s) <= 100);
    }
}

// ========== Generic rules ==========

#[test]
fn test_politeness() {
    assert_eq!(apply_generic_rules("Please review it."), "review it.");
}

#[test]
fn test_conditional() {
    assert_eq!(
        apply_generic_rules("When you get a message, reply."),
        "you get a message → reply."
    );
}

#[test]
fn test_filler_removal() {
    assert_eq!(apply_generic_rules("This is really very important."), "This is important.");
}

#[test]
fn test_filler_at_line_start() {
    assert_eq!(apply_generic_rules("Actually, it works."), "it works.");
    assert_eq!(apply_generic_rules("Really good work."), "good work.");
}

#[test]
fn test_filler_before_punctuation() {
    assert_eq!(apply_generic_rules("That was quite."), "That was.");
}

#[test]
fn test_filler_after_comma_at_clause_end() {
    assert_eq!(apply_generic_rules("Do it quickly, really."), "Do it quickly.");
    assert_eq!(apply_generic_rules("It is, really, good."), "It is, good.");
}

#[test]
fn test_filler_not_inside_words() {
    let text = "Every delivery arrives.";
    assert_eq!(apply_generic_rules(text), text);
}

#[test]
fn test_conditional_at_line_end() {
    assert_eq!(apply_generic_rules("When ready,\nnext"), "ready →\nnext");
    assert_eq!(apply_generic_rules("In order to ship,\nbuild"), "GOAL: ship →\nbuild");
}

#[test]
fn test_goal() {
    assert_eq!(
        apply_generic_rules("In order to ship, run the build."),
        "GOAL: ship → run the build."
    );
}

#[test]
fn test_critical_and_directive() {
    assert_eq!(apply_generic_rules("It is important to test."), "CRITICAL: test.");
    assert_eq!(apply_generic_rules("You should run tests."), "DO: run tests.");
}

#[test]
fn test_bullets_normalized() {
    assert_eq!(apply_generic_rules("- a\n* b\n  • c"), "• a\n• b\n  • c");
}

#[test]
fn test_bold_is_not_a_bullet() {
    assert_eq!(rule("bullets").unwrap().apply("**bold** text"), "**bold** text");
}

#[test]
fn test_headers_demoted_once() {
    assert_eq!(apply_generic_rules("# Title\n## Sub"), "## Title\n### Sub");
    assert_eq!(rule("headers").unwrap().apply("###### Deep"), "###### Deep");
}

#[test]
fn test_blank_lines_collapsed() {
    assert_eq!(apply_generic_rules("a\n\n\n\nb"), "a\n\nb");
    assert_eq!(apply_generic_rules("a\n  \n\t\n\nb"), "a\n\nb");
    assert_eq!(apply_generic_rules("a\n\nb"), "a\n\nb");
}

#[test]
fn test_blank_lines_keep_crlf() {
    assert_eq!(apply_generic_rules("a\r\n\r\n\r\n\r\nb"), "a\r\n\r\nb");
    assert_eq!(apply_generic_rules("a\r\n\r\nb"), "a\r\n\r\nb");
}

#[test]
fn test_no_trigger_is_noop() {
    let text = "The cat sat on the mat.\nIt was warm.";
    assert_eq!(apply_generic_rules(text), text);
}

#[test]
fn test_empty_text() {
    assert_eq!(apply_generic_rules(""), "");
}

#[test]
fn test_rule_order_compounds() {
    // conditional runs before politeness, so the action keeps its verb only
    assert_eq!(apply_generic_rules("When ready, please review it."), "ready → review it.");
}

#[test]
fn test_second_pass_is_stable() {
    let once = apply_generic_rules("When you get a message, reply. Please be very brief.");
    assert_eq!(once, "you get a message → reply. be brief.");
    assert_eq!(apply_generic_rules(&once), once);
}

#[test]
fn test_rule_labels_order() {
    assert_eq!(
        rules::rule_labels(),
        vec![
            "conditional", "goal", "critical", "directive", "politeness",
            "filler", "bullets", "headers", "blank-lines",
        ]
    );
}

// ========== Block templates ==========

const AGENTS_SAMPLE: &str = "## Every Session\n\nBefore doing anything else:\n\n1. Read `SOUL.md` — this is who you are\n2. Read `USER.md` — this is who you're helping\n\nDon't ask permission. Just do it.\n";

#[test]
fn test_builtin_templates_compile() {
    let table = BlockTable::compile(&default_templates()).unwrap();
    assert_eq!(table.len(), default_templates().len());
    assert!(table.has_templates_for(templates::MEMORY_FILE));
    assert!(table.has_templates_for(templates::USER_FILE));
    assert!(table.has_templates_for(templates::AGENTS_FILE));
    assert!(!table.has_templates_for("README.md"));
    assert!(!table.has_templates_for(""));
}

#[test]
fn test_agents_session_block() {
    let out = apply_file_specific_blocks(AGENTS_SAMPLE, "AGENTS.md");
    assert_eq!(
        out,
        "## Every Session\n\nSTART: read SOUL.md → USER.md → memory/today+yesterday; main session also MEMORY.md\n"
    );
}

#[test]
fn test_block_requires_known_filename() {
    assert_eq!(apply_file_specific_blocks(AGENTS_SAMPLE, "notes.md"), AGENTS_SAMPLE);
}

#[test]
fn test_block_matches_path_and_case() {
    let a = apply_file_specific_blocks(AGENTS_SAMPLE, "workspace/AGENTS.md");
    let b = apply_file_specific_blocks(AGENTS_SAMPLE, "agents.md");
    assert!(a.contains("START:"));
    assert_eq!(a, b);
}

#[test]
fn test_block_no_match_is_noop() {
    let text = "# Agents\n\nNothing standard here.\n";
    assert_eq!(apply_file_specific_blocks(text, "AGENTS.md"), text);
}

#[test]
fn test_user_profile_block() {
    let text = "I am a freelance designer. Right now my business is growing slowly.\nMy goals are:\n- Land two clients\n- Ship the portfolio\n";
    assert_eq!(
        apply_file_specific_blocks(text, "USER.md"),
        "ROLE: freelance designer\nSTATUS: my business is growing slowly\nGOALS:\n- Land two clients\n- Ship the portfolio\n"
    );
}

#[test]
fn test_memory_dated_lesson() {
    let text = "On 2026-01-05, I learned that backups need testing.";
    assert_eq!(
        apply_file_specific_blocks(text, "MEMORY.md"),
        "[2026-01-05] backups need testing."
    );
}

#[test]
fn test_invalid_template_rejected() {
    let bad = BlockTemplate::new("X.md", "broken", "(unclosed", "");
    match BlockTable::compile(&[bad]) {
        Err(SlimError::InvalidPattern { label, .. }) => assert_eq!(label, "broken"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn test_table_from_config_extend_and_replace() {
    let custom = BlockTemplate::new("NOTES.md", "todo", r"(?m)^TODO: ", "☐ ");
    let mut cfg = SlimConfig::default();
    cfg.templates.push(custom);

    let extended = BlockTable::from_config(&cfg).unwrap();
    assert_eq!(extended.len(), default_templates().len() + 1);

    cfg.templates_mode = TemplatesMode::Replace;
    let replaced = BlockTable::from_config(&cfg).unwrap();
    assert_eq!(replaced.len(), 1);
    assert!(!replaced.has_templates_for("AGENTS.md"));
    assert_eq!(replaced.apply("TODO: ship", "NOTES.md").0, "☐ ship");
}

// ========== Pipeline ==========

#[test]
fn test_savings_percent() {
    assert_eq!(savings_percent(500, 50), 90);
    assert_eq!(savings_percent(0, 0), 0);
    assert_eq!(savings_percent(3, 1), 67);
    assert_eq!(savings_percent(4, 5), -25);
}

#[test]
fn test_compress_empty() {
    let r = compress(&TextDocument::anonymous(""));
    assert_eq!(r.original_tokens, 0);
    assert_eq!(r.compressed_tokens, 0);
    assert_eq!(r.savings_percent, 0);
    assert_eq!(r.compressed_text, "");
    assert!(!r.is_beneficial());
}

#[test]
fn test_compress_generic_document() {
    let text = "Please make sure the tests pass. You should really run them before every commit.";
    let r = compress(&TextDocument::new("notes.md", text));
    assert_eq!(r.compressed_text, "make sure the tests pass. DO: run them before every commit.");
    assert_eq!(r.original_tokens, approximate_token_count(text));
    assert!(r.compressed_tokens < r.original_tokens);
    assert!(r.is_beneficial());
    assert_eq!(r.rules_applied, vec!["directive", "politeness", "filler"]);
    assert_eq!(r.savings_percent, savings_percent(r.original_tokens, r.compressed_tokens));
}

#[test]
fn test_compress_known_file_runs_blocks_then_rules() {
    let r = compress(&TextDocument::new("AGENTS.md", AGENTS_SAMPLE));
    assert!(r.compressed_text.starts_with("### Every Session"));
    assert_eq!(r.rules_applied.first().map(String::as_str), Some("agents-session-start"));
    assert!(r.rules_applied.contains(&"headers".to_string()));
}

#[test]
fn test_compress_unchanged_not_beneficial() {
    let r = Compactor::builtin().compress_text("plain words only");
    assert_eq!(r.compressed_text, r.original_text);
    assert_eq!(r.tokens_saved(), 0);
    assert!(!r.is_beneficial());
    assert!(r.rules_applied.is_empty());
}

#[test]
fn test_header_only_text_grows() {
    let r = Compactor::builtin().compress_text("# A\n# B\n# C\n# D");
    assert!(r.compressed_tokens > r.original_tokens);
    assert!(r.savings_percent < 0);
    assert!(!r.is_beneficial());
}

struct WordCount;

impl TokenEstimator for WordCount {
    fn name(&self) -> &str {
        "words"
    }

    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[test]
fn test_custom_estimator() {
    let c = Compactor::builtin().with_estimator(Box::new(WordCount));
    let r = c.compress_text("Please review it.");
    assert_eq!(r.original_tokens, 3);
    assert_eq!(r.compressed_tokens, 2);
    assert_eq!(r.savings_percent, 33);
    assert_eq!(c.estimator().name(), "words");
}

struct Shout;

impl Transform for Shout {
    fn label(&self) -> &str {
        "shout"
    }

    fn apply(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

#[test]
fn test_extra_rule_runs_last() {
    let c = Compactor::builtin().with_rule(Box::new(Shout));
    assert_eq!(c.rule_labels().last(), Some(&"shout"));
    assert_eq!(c.compress_text("Please go.").compressed_text, "GO.");
}

#[test]
fn test_result_serializes() {
    let r = compress(&TextDocument::new("a.md", "Please go."));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["compressed_text"], "go.");
    assert_eq!(json["filename"], "a.md");
}
