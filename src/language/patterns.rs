//! Static per-language keyword tables for the weighted classifier.
//!
//! Heavier weight means a more language-specific token. Generic tokens that
//! several ecosystems share (`var `, `import `) carry deliberately low
//! weights so they can never clear the confidence threshold on their own.

/// One candidate language: canonical tag plus its (substring, weight) pairs.
pub struct LanguagePatterns {
    pub tag: &'static str,
    pub patterns: &'static [(&'static str, u32)],
}

/// Candidate table for the weighted scorer. Slice order is the tie-break
/// order: on equal top scores the earlier entry wins, so this must stay an
/// explicitly ordered slice rather than a map.
pub static PATTERN_TABLE: &[LanguagePatterns] = &[
    LanguagePatterns {
        tag: "go",
        patterns: &[
            ("package main", 10),
            ("func main()", 10),
            ("import (", 8),
            ("type ", 6),
            ("struct {", 8),
            ("var ", 2),
            (":=", 7),
            ("fmt.", 8),
            ("json:\"", 7),
            ("net/http", 9),
            ("encoding/json", 9),
            ("log.", 6),
            ("func (", 7),
        ],
    },
    LanguagePatterns {
        tag: "javascript",
        patterns: &[
            ("console.log", 8),
            ("document.", 9),
            ("window.", 9),
            (".addeventlistener", 9),
            ("require(", 7),
            ("module.exports", 8),
            ("const ", 4),
            ("let ", 6),
            ("var ", 2),
            ("=>", 5),
            ("function(", 7),
            ("function ", 6),
            ("async ", 6),
            ("await ", 6),
            ("import ", 3),
        ],
    },
    LanguagePatterns {
        tag: "typescript",
        patterns: &[
            ("interface ", 10),
            (": string", 8),
            (": number", 8),
            (": boolean", 8),
            ("extends ", 6),
            ("implements ", 8),
            ("enum ", 9),
            ("<t>", 7),
            ("namespace ", 9),
        ],
    },
    LanguagePatterns {
        tag: "python",
        patterns: &[
            ("def ", 8),
            ("if __name__", 10),
            ("self.", 8),
            ("elif ", 9),
            ("isinstance(", 9),
            ("range(", 8),
            ("enumerate(", 9),
            ("lambda ", 8),
            ("yield ", 9),
            ("print(", 6),
            ("import ", 3),
            ("from ", 4),
        ],
    },
    LanguagePatterns {
        tag: "html",
        patterns: &[
            ("<!doctype", 10),
            ("<html", 9),
            ("<head>", 8),
            ("<body>", 8),
            ("<div", 6),
            ("<script", 7),
            ("<style", 7),
        ],
    },
    LanguagePatterns {
        tag: "css",
        patterns: &[
            ("background:", 7),
            ("color:", 6),
            ("font-", 6),
            ("margin:", 7),
            ("padding:", 7),
            ("display:", 7),
            ("position:", 7),
            ("width:", 5),
            ("height:", 5),
        ],
    },
    // JSON has no distinguishing keywords; it is scored by the structural
    // check in the classifier, not by this table.
    LanguagePatterns {
        tag: "json",
        patterns: &[],
    },
    LanguagePatterns {
        tag: "java",
        patterns: &[
            ("public class", 10),
            ("public static void main", 10),
            ("system.out.", 9),
            ("string[] args", 9),
            ("public ", 4),
            ("private ", 4),
            ("protected ", 6),
            ("extends ", 5),
            ("implements ", 6),
        ],
    },
    LanguagePatterns {
        tag: "csharp",
        patterns: &[
            ("using system", 10),
            ("namespace ", 7),
            ("console.writeline", 9),
            ("public class", 6),
            ("static void main", 10),
            ("string[] args", 8),
        ],
    },
    LanguagePatterns {
        tag: "rust",
        patterns: &[
            ("fn main()", 10),
            ("let mut", 8),
            ("println!", 9),
            ("use std::", 9),
            ("impl ", 7),
            ("match ", 7),
            ("enum ", 6),
        ],
    },
    LanguagePatterns {
        tag: "cpp",
        patterns: &[
            ("#include", 9),
            ("std::", 8),
            ("cout <<", 9),
            ("cin >>", 9),
            ("int main()", 10),
            ("namespace std", 8),
            ("using namespace", 7),
        ],
    },
    LanguagePatterns {
        tag: "sql",
        patterns: &[
            ("select ", 7),
            ("insert into", 9),
            ("update ", 5),
            ("delete from", 9),
            ("create table", 10),
            ("alter table", 10),
            ("drop table", 10),
            ("where ", 5),
            ("join ", 6),
            ("group by", 8),
        ],
    },
    LanguagePatterns {
        tag: "bash",
        patterns: &[
            ("#!/bin/", 10),
            ("echo ", 5),
            ("mkdir ", 6),
            ("grep ", 6),
            ("sed ", 6),
            ("awk ", 6),
            ("curl ", 6),
            ("wget ", 6),
            ("chmod ", 7),
            ("export ", 4),
        ],
    },
];
