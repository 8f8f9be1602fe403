//! Built-in block templates for the three well-known workspace files.
//!
//! These match the prose of a stock agent workspace and are unlikely to fire
//! on hand-written files; the config file can replace or extend them.

use slim_core::BlockTemplate;

pub const MEMORY_FILE: &str = "MEMORY.md";
pub const USER_FILE: &str = "USER.md";
pub const AGENTS_FILE: &str = "AGENTS.md";

fn t(filename: &str, label: &str, pattern: &str, replacement: &str) -> BlockTemplate {
    BlockTemplate::new(filename, label, pattern, replacement)
}

/// Default template table, in application order.
pub fn default_templates() -> Vec<BlockTemplate> {
    vec![
        // MEMORY.md
        t(
            MEMORY_FILE,
            "memory-preamble",
            r"(?s)This (?:file|document) (?:is|contains) (?:my|your|the) (?:curated )?long-term memory\.[^\n]*(?:\n[^\n#]+)*\n?",
            "LONG-TERM MEMORY (curated; daily notes → memory/YYYY-MM-DD.md)\n",
        ),
        t(
            MEMORY_FILE,
            "memory-dated-lesson",
            r"(?m)^On (?P<date>\d{4}-\d{2}-\d{2}),? (?:I|we) (?:learned|discovered|realized|noticed) that (?P<fact>[^\n]+)$",
            "[${date}] ${fact}",
        ),
        t(
            MEMORY_FILE,
            "memory-preference",
            r"(?m)^(?:[-*•][ \t]+)?(?:My human|The user|They) (?:prefers?|likes?|wants?) (?P<pref>[^\n.]+)\.?[ \t]*$",
            "PREF: ${pref}",
        ),
        // USER.md
        t(
            USER_FILE,
            "user-profile",
            r"(?si)(?:I am|I'm|They are|He is|She is) an? (?P<role>[^.\n]+)\.[^\n]*?(?P<status>(?:my|our|their) (?:business|company|startup|project) (?:is|has) [^.\n]+)\.(?:.*?)(?:my|our|their) (?:main |current )?goals? (?:are|is|include)?:?[ \t]*\n(?P<goals>(?:[ \t]*(?:[-*•]|\d+\.)[ \t]+[^\n]+(?:\n|\z))+)",
            "ROLE: ${role}\nSTATUS: ${status}\nGOALS:\n${goals}",
        ),
        t(
            USER_FILE,
            "user-contact",
            r"(?m)^(?:[-*•][ \t]+)?\*\*(?P<key>Name|Timezone|Pronouns|What to call them):\*\*[ \t]*(?P<value>[^\n]+)$",
            "${key}: ${value}",
        ),
        // AGENTS.md
        t(
            AGENTS_FILE,
            "agents-session-start",
            r"(?s)Before doing anything else:[ \t]*\n+(?:[ \t]*\d+\.[^\n]*(?:\n|\z))+(?:\n*Don't ask permission\. Just do it\.[ \t]*\n?)?",
            "START: read SOUL.md → USER.md → memory/today+yesterday; main session also MEMORY.md\n",
        ),
        t(
            AGENTS_FILE,
            "agents-safety",
            r"(?s)(?P<heading>#+ Safety)[ \t]*\n+[ \t]*[-*•][ \t]+Don't exfiltrate private data\. Ever\.[^\n]*\n(?:[ \t]*[-*•][^\n]*(?:\n|\z))*",
            "${heading}\n• NO exfiltration · NO destructive cmds w/o asking · trash > rm · unsure → ask\n",
        ),
        t(
            AGENTS_FILE,
            "agents-group-chat",
            r"(?s)You have access to your human's stuff\. That doesn't mean you share their stuff\.[^\n]*(?:\n[^\n#]+)*\n?",
            "GROUP CHAT: participant, not proxy; never leak human's private context\n",
        ),
    ]
}
