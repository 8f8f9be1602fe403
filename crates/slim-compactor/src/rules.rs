//! Generic rewrite rules: ordered regex substitutions over prose.
//!
//! Each rule is a global substitution applied to the output of the previous
//! one, so the order of [`default_rules`] is part of the behaviour.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::traits::Transform;

/// Replacement side of a rule.
pub enum Replacement {
    /// `regex` replacement template, may reference `$1` / `${name}`.
    Template(&'static str),
    Function(fn(&Captures<'_>) -> String),
}

/// A labelled pattern → replacement rule.
pub struct CompressionRule {
    pub label: &'static str,
    pub matcher: Regex,
    pub replacement: Replacement,
}

// Built-in patterns only; they are covered by the rule tests.
impl CompressionRule {
    pub(crate) fn template(label: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            label,
            matcher: Regex::new(pattern).unwrap(),
            replacement: Replacement::Template(template),
        }
    }

    pub(crate) fn function(
        label: &'static str,
        pattern: &str,
        f: fn(&Captures<'_>) -> String,
    ) -> Self {
        Self {
            label,
            matcher: Regex::new(pattern).unwrap(),
            replacement: Replacement::Function(f),
        }
    }
}

impl Transform for CompressionRule {
    fn label(&self) -> &str {
        self.label
    }

    fn apply(&self, text: &str) -> String {
        match &self.replacement {
            Replacement::Template(t) => self.matcher.replace_all(text, *t).into_owned(),
            Replacement::Function(f) => self
                .matcher
                .replace_all(text, |c: &Captures<'_>| f(c))
                .into_owned(),
        }
    }
}

pub const FILLER_WORDS: &[&str] = &[
    "very", "quite", "rather", "really", "actually", "basically", "essentially",
];

/// Keep one separator when the filler sat between two words; drop the
/// whitespace when it touched punctuation or a line edge. A comma before the
/// filler survives only if more words follow.
fn drop_filler(caps: &Captures<'_>) -> String {
    let comma = caps.name("comma").map_or("", |m| m.as_str());
    let lead = caps.name("lead").map_or("", |m| m.as_str());
    let trail = caps.name("trail").map_or("", |m| m.as_str());
    if trail.is_empty() {
        return String::new();
    }
    if !lead.is_empty() {
        format!("{comma}{lead}")
    } else {
        comma.to_string()
    }
}

/// `A → B`, without a dangling space when the clause ends at the comma.
fn arrow(cause: &str, effect: &str) -> String {
    if effect.is_empty() {
        format!("{cause} →")
    } else {
        format!("{cause} → {effect}")
    }
}

fn conditional(caps: &Captures<'_>) -> String {
    arrow(&caps[1], &caps[2])
}

fn goal(caps: &Captures<'_>) -> String {
    format!("GOAL: {}", arrow(&caps[1], &caps[2]))
}

fn demote_header(caps: &Captures<'_>) -> String {
    format!("#{}{}", &caps["hashes"], &caps["sep"])
}

/// The built-in rule list, in application order.
pub fn default_rules() -> Vec<CompressionRule> {
    let fillers = FILLER_WORDS.join("|");
    vec![
        CompressionRule::function(
            "conditional",
            r"\bWhen ([^,\n]+),[ \t]*([^.!?\n]*)",
            conditional,
        ),
        CompressionRule::function(
            "goal",
            r"\bIn order to ([^,\n]+),[ \t]*([^.!?\n]*)",
            goal,
        ),
        CompressionRule::template("critical", r"\b[Ii]t is important to[ \t]+", "CRITICAL: "),
        CompressionRule::template("directive", r"\b[Yy]ou should[ \t]+", "DO: "),
        CompressionRule::template("politeness", r"\b[Pp]lease,?[ \t]+", ""),
        CompressionRule::function(
            "filler",
            &format!(r"(?i)(?P<comma>,)?(?P<lead>[ \t]*)\b(?:{fillers})\b,?(?P<trail>[ \t]*)"),
            drop_filler,
        ),
        CompressionRule::template("bullets", r"(?m)^([ \t]*)[-*•][ \t]+", "${1}• "),
        CompressionRule::function(
            "headers",
            r"(?m)^(?P<hashes>#{1,5})(?P<sep>[ \t])",
            demote_header,
        ),
        CompressionRule::template(
            "blank-lines",
            r"(?P<eol>\r?\n)(?:[ \t\r]*\n){2,}",
            "${eol}${eol}",
        ),
    ]
}

static GENERIC_RULES: LazyLock<Vec<CompressionRule>> = LazyLock::new(default_rules);

/// Apply every generic rule, in order, to `text`.
pub fn apply_generic_rules(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    GENERIC_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Look up a single built-in rule, for testing it in isolation.
pub fn rule(label: &str) -> Option<&'static CompressionRule> {
    GENERIC_RULES.iter().find(|r| r.label == label)
}

/// Labels of the built-in rules, in application order.
pub fn rule_labels() -> Vec<&'static str> {
    GENERIC_RULES.iter().map(|r| r.label).collect()
}
