//! Supported territories and `TERRITORY=PATH` input arguments
//!
//! The territory set is closed and its order is the column order of the
//! output table. It never changes at runtime.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::{Error, Result};

/// A market with its own channel-listing export format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum TerritoryCode {
    Al,
    Cz,
    De,
    Ie,
    Pt,
    Ro,
    Gr,
}

impl TerritoryCode {
    /// Every supported territory, in output column order
    pub const ALL: [TerritoryCode; 7] = [
        TerritoryCode::Al,
        TerritoryCode::Cz,
        TerritoryCode::De,
        TerritoryCode::Ie,
        TerritoryCode::Pt,
        TerritoryCode::Ro,
        TerritoryCode::Gr,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(self) -> &'static str {
        match self {
            TerritoryCode::Al => "AL",
            TerritoryCode::Cz => "CZ",
            TerritoryCode::De => "DE",
            TerritoryCode::Ie => "IE",
            TerritoryCode::Pt => "PT",
            TerritoryCode::Ro => "RO",
            TerritoryCode::Gr => "GR",
        }
    }

    /// Position of this territory's flag in a presence vector
    pub fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TerritoryCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerritoryCode {
    type Err = Error;

    /// Codes are matched exactly; `al` is not `AL`.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownTerritory(s.to_string()))
    }
}

/// One `TERRITORY=PATH` command-line input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub territory: TerritoryCode,
    pub path: PathBuf,
}

impl FromStr for InputSpec {
    type Err = Error;

    /// Splits on the first `=`; the path may itself contain `=`.
    fn from_str(arg: &str) -> Result<Self> {
        let (code, path) = arg
            .split_once('=')
            .ok_or_else(|| Error::InvalidArgument(arg.to_string()))?;
        Ok(InputSpec {
            territory: code.parse()?,
            path: PathBuf::from(path),
        })
    }
}

/// Parse every input argument, failing on the first malformed one.
///
/// A territory given twice keeps its first position but takes the later
/// path.
pub fn parse_inputs<S: AsRef<str>>(args: &[S]) -> Result<Vec<InputSpec>> {
    let mut inputs: Vec<InputSpec> = Vec::with_capacity(args.len());
    for arg in args {
        let spec: InputSpec = arg.as_ref().parse()?;
        match inputs.iter_mut().find(|i| i.territory == spec.territory) {
            Some(existing) => {
                warn!(
                    territory = %spec.territory,
                    previous = %existing.path.display(),
                    replacement = %spec.path.display(),
                    "territory given more than once, using the later path"
                );
                existing.path = spec.path;
            }
            None => inputs.push(spec),
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_is_fixed() {
        let codes: Vec<&str> = TerritoryCode::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(codes, ["AL", "CZ", "DE", "IE", "PT", "RO", "GR"]);
        for (i, t) in TerritoryCode::ALL.iter().enumerate() {
            assert_eq!(t.column(), i);
        }
    }

    #[test]
    fn test_parse_code_is_case_sensitive() {
        assert_eq!("RO".parse::<TerritoryCode>().unwrap(), TerritoryCode::Ro);
        assert!(matches!(
            "ro".parse::<TerritoryCode>(),
            Err(Error::UnknownTerritory(code)) if code == "ro"
        ));
        assert!("UK".parse::<TerritoryCode>().is_err());
    }

    #[test]
    fn test_input_spec_splits_on_first_equals() {
        let spec: InputSpec = "PT=inputs/a=b.txt".parse().unwrap();
        assert_eq!(spec.territory, TerritoryCode::Pt);
        assert_eq!(spec.path, PathBuf::from("inputs/a=b.txt"));
    }

    #[test]
    fn test_input_spec_without_equals() {
        assert!(matches!(
            "inputs/albania.txt".parse::<InputSpec>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_repeated_territory_keeps_position_takes_later_path() {
        let inputs = parse_inputs(&["AL=a.txt", "GR=g.txt", "AL=a2.txt"]).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].territory, TerritoryCode::Al);
        assert_eq!(inputs[0].path, PathBuf::from("a2.txt"));
        assert_eq!(inputs[1].territory, TerritoryCode::Gr);
    }

    #[test]
    fn test_parse_inputs_rejects_unknown_code() {
        let err = parse_inputs(&["AL=a.txt", "XX=x.txt"]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "Unknown territory: XX");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&TerritoryCode::Ie).unwrap();
        assert_eq!(json, "\"IE\"");
    }
}
