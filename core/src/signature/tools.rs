//! Encryption-tool header signatures.
//!
//! Sector directive: `0` scans the whole input, a positive `N` probes the
//! `N`-th block from the start (1-based), a negative `N` probes the `|N|`-th
//! block back from the end.

/// `(tool name, hex pattern, sector)` for every targeted encryption tool.
pub const ENCRYPTION_TOOL_SIGNATURES: &[(&str, &str, i64)] = &[
    ("FreeBSD GELI", "(?i)(47454f4d3a3a454c49)", -1),
    ("BitLocker", "(?i)(eb58902d4656452d46532d0002080000)", 1),
    ("LUKSv1", "(?i)4c554b53babe0001", 1),
    ("LUKSv2", "(?i)4c554b53babe0002", 1),
    ("FileVault v2", "(?i)41505342.{456}0800000000000000", 0),
    ("PGP WDE", "(?i)(eb489050475047554152440000000000)", 1),
];
