//! Clause keywords recognized by the default SQL rule set.
//!
//! Every variant maps to exactly one canonical, lowercase surface form which
//! `dialect::sql_registry` registers as a literal pattern. Multi-word clauses
//! such as `group by` are a single keyword; the matcher accepts any whitespace
//! run between the words.
//!
//! Design notes:
//! - Keywords are tags inside `TokenKind::Keyword`, never a separate token
//!   category hierarchy.
//! - `ALL` fixes the registration order of the keywords, which keeps
//!   tie-breaking between patterns stable.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Join,
    Left,
    Right,
    Full,
    Where,
    GroupBy,
    Having,
    Limit,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Case,
    When,
    Else,
    Then,
    End,
}

impl Keyword {
    /// Every keyword, in registration order.
    pub const ALL: [Self; 20] = [
        Keyword::Select,
        Keyword::From,
        Keyword::Join,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Where,
        Keyword::GroupBy,
        Keyword::Having,
        Keyword::Limit,
        Keyword::Insert,
        Keyword::Into,
        Keyword::Values,
        Keyword::Update,
        Keyword::Set,
        Keyword::Case,
        Keyword::When,
        Keyword::Else,
        Keyword::Then,
        Keyword::End,
    ];

    /// Canonical lowercase pattern of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "select",
            From => "from",
            Join => "join",
            Left => "left",
            Right => "right",
            Full => "full",
            Where => "where",
            GroupBy => "group by",
            Having => "having",
            Limit => "limit",
            Insert => "insert",
            Into => "into",
            Values => "values",
            Update => "update",
            Set => "set",
            Case => "case",
            When => "when",
            Else => "else",
            Then => "then",
            End => "end",
        }
    }

    /// True for the keywords that open a `case` expression or one of its arms.
    pub const fn is_case_part(self) -> bool {
        matches!(
            self,
            Keyword::Case | Keyword::When | Keyword::Then | Keyword::Else | Keyword::End
        )
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn patterns_are_unique_and_lowercase() {
        let patterns: HashSet<_> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(patterns.len(), Keyword::ALL.len());
        for p in patterns {
            assert_eq!(p, p.to_ascii_lowercase(), "{p} should be lowercase");
        }
    }

    #[test]
    fn display_matches_as_str() {
        for kw in Keyword::ALL {
            assert_eq!(kw.to_string(), kw.as_str());
        }
        assert_eq!(Keyword::GroupBy.to_string(), "group by");
    }

    #[test]
    fn case_parts() {
        assert!(Keyword::When.is_case_part());
        assert!(Keyword::End.is_case_part());
        assert!(!Keyword::Select.is_case_part());
        assert!(!Keyword::Set.is_case_part());
    }
}
