//! Magic-byte signatures.

use super::{FileType, Identifier};
use std::path::Path;

/// Bytes read from the start of a file; covers the longest signature.
pub const MAGIC_PREFIX_LEN: usize = 8;

/// A byte pattern at a fixed offset and the label it identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRule {
    /// Offset of the pattern from the start of the file
    pub offset: usize,
    /// The expected bytes
    pub magic: &'static [u8],
    /// Label returned on a match
    pub file_type: FileType,
}

impl SignatureRule {
    /// Whether the prefix carries this rule's pattern.
    ///
    /// A prefix too short to hold the pattern never matches.
    #[must_use]
    pub fn matches(&self, prefix: &[u8]) -> bool {
        prefix
            .get(self.offset..self.offset + self.magic.len())
            .is_some_and(|window| window == self.magic)
    }
}

/// Reference rules, in priority order. First match wins.
pub static SIGNATURE_RULES: &[SignatureRule] = &[
    SignatureRule {
        offset: 0,
        magic: b"\x7fELF",
        file_type: FileType::Elf,
    },
    SignatureRule {
        offset: 0,
        magic: b"MZ",
        file_type: FileType::Pe,
    },
    SignatureRule {
        offset: 0,
        magic: b"\xd0\xcf\x11\xe0\xa1\xb1\x1a\xe1",
        file_type: FileType::Ole,
    },
];

/// Classify a byte prefix against the reference rules.
#[must_use]
pub fn identify(prefix: &[u8]) -> Option<FileType> {
    MagicIdentifier::new().identify_prefix(prefix)
}

/// Identifier that matches leading bytes against an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct MagicIdentifier {
    rules: &'static [SignatureRule],
}

impl Default for MagicIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MagicIdentifier {
    /// Identifier over [`SIGNATURE_RULES`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: SIGNATURE_RULES,
        }
    }

    /// Identifier over a custom rule table, tried in slice order
    #[must_use]
    pub const fn with_rules(rules: &'static [SignatureRule]) -> Self {
        Self { rules }
    }

    /// The first rule matching the prefix, if any
    #[must_use]
    pub fn identify_prefix(&self, prefix: &[u8]) -> Option<FileType> {
        self.rules
            .iter()
            .find(|rule| rule.matches(prefix))
            .map(|rule| rule.file_type)
    }
}

impl Identifier for MagicIdentifier {
    fn identify(&self, _path: &Path, prefix: &[u8]) -> Option<FileType> {
        self.identify_prefix(prefix)
    }

    fn name(&self) -> &'static str {
        "magic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_signatures() {
        assert_eq!(
            identify(&[0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01, 0x01, 0x00]),
            Some(FileType::Elf)
        );
        assert_eq!(identify(&[0x4D, 0x5A, 0x90, 0x00]), Some(FileType::Pe));
        assert_eq!(
            identify(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
            Some(FileType::Ole)
        );
    }

    #[test]
    fn test_short_prefix_is_unknown() {
        assert_eq!(identify(&[]), None);
        assert_eq!(identify(&[0x7F, 0x45, 0x4C]), None);
        assert_eq!(identify(b"M"), None);
        // Seven of the eight OLE bytes
        assert_eq!(identify(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A]), None);
    }

    #[test]
    fn test_no_match_is_unknown() {
        assert_eq!(identify(b"#!/bin/sh\n"), None);
        assert_eq!(identify(b"PK\x03\x04"), None);
    }

    #[test]
    fn test_earlier_rule_wins_on_overlap() {
        static OVERLAPPING: &[SignatureRule] = &[
            SignatureRule {
                offset: 0,
                magic: b"MZ",
                file_type: FileType::Pe,
            },
            SignatureRule {
                offset: 0,
                magic: b"MZ\x90\x00",
                file_type: FileType::Ole,
            },
        ];

        let forward = MagicIdentifier::with_rules(OVERLAPPING);
        assert_eq!(forward.identify_prefix(b"MZ\x90\x00"), Some(FileType::Pe));

        static REVERSED: &[SignatureRule] = &[
            SignatureRule {
                offset: 0,
                magic: b"MZ\x90\x00",
                file_type: FileType::Ole,
            },
            SignatureRule {
                offset: 0,
                magic: b"MZ",
                file_type: FileType::Pe,
            },
        ];
        let reversed = MagicIdentifier::with_rules(REVERSED);
        assert_eq!(reversed.identify_prefix(b"MZ\x90\x00"), Some(FileType::Ole));
    }

    #[test]
    fn test_offset_rule() {
        let rule = SignatureRule {
            offset: 2,
            magic: b"LF",
            file_type: FileType::Elf,
        };
        assert!(rule.matches(b"\x7fELF"));
        assert!(!rule.matches(b"LF\x00\x00"));
        assert!(!rule.matches(b"\x7fEL"));
    }

    #[test]
    fn test_prefix_len_covers_rules() {
        for rule in SIGNATURE_RULES {
            assert!(rule.offset + rule.magic.len() <= MAGIC_PREFIX_LEN);
        }
    }
}
