use std::ffi::OsString;

use clap::Parser;
use nalgebra::Vector3;
use sez_core::{EcefCoord, SezError};

pub const USAGE: &str = "Usage: ecef-to-sez o_x_km o_y_km o_z_km x_km y_km z_km";

const ARG_NAMES: [&str; 6] = ["o_x_km", "o_y_km", "o_z_km", "x_km", "y_km", "z_km"];

// Every token is positional: no help/version flags, hyphenated tokens are values
#[derive(Parser, Debug)]
#[command(name = "ecef-to-sez", version)]
#[command(about = "Convert an ECEF position into SEZ coordinates relative to an ECEF origin")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// SEZ origin (o_x_km o_y_km o_z_km) followed by the target (x_km y_km z_km), ECEF km
    #[arg(value_name = "KM", allow_hyphen_values = true, trailing_var_arg = true)]
    pub values: Vec<String>,
}

/// Observer and target positions read from the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invocation {
    pub observer: EcefCoord,
    pub target: EcefCoord,
}

impl Cli {
    /// Parse a full argv (program name first), keeping every typed token as a value
    pub fn from_tokens<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut cli = Cli::try_parse_from(&argv)?;

        // clap swallows a leading `--` as the end-of-options marker
        let typed = argv.get(1..).unwrap_or_default();
        if cli.values.len() != typed.len() {
            cli.values = typed
                .iter()
                .map(|token| token.to_string_lossy().into_owned())
                .collect();
        }
        Ok(cli)
    }

    /// Validate arity and parse every argument as a finite number of kilometers
    pub fn invocation(&self) -> Result<Invocation, SezError> {
        if self.values.len() != ARG_NAMES.len() {
            return Err(SezError::Usage {
                got: self.values.len(),
            });
        }

        let mut km = [0.0; 6];
        for (i, (token, name)) in self.values.iter().zip(ARG_NAMES).enumerate() {
            km[i] = parse_km(i + 1, name, token)?;
        }

        Ok(Invocation {
            observer: Vector3::new(km[0], km[1], km[2]),
            target: Vector3::new(km[3], km[4], km[5]),
        })
    }
}

fn parse_km(position: usize, name: &'static str, token: &str) -> Result<f64, SezError> {
    let value: f64 = token.trim().parse().map_err(|source| SezError::Parse {
        position,
        name,
        token: token.to_string(),
        source,
    })?;

    if !value.is_finite() {
        return Err(SezError::NonFiniteArgument {
            position,
            name,
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(values: &[&str]) -> Cli {
        let mut argv = vec!["ecef-to-sez"];
        argv.extend_from_slice(values);
        Cli::from_tokens(argv).unwrap()
    }

    #[test]
    fn test_six_arguments() {
        let inv = cli(&["6378.137", "0", "0", "6378.137", "0", "10"])
            .invocation()
            .unwrap();

        assert_eq!(inv.observer, Vector3::new(6378.137, 0.0, 0.0));
        assert_eq!(inv.target, Vector3::new(6378.137, 0.0, 10.0));
    }

    #[test]
    fn test_negative_numbers_are_values() {
        let inv = cli(&["-6378.137", "-0.5", "-1000", "1", "-2", "3"])
            .invocation()
            .unwrap();

        assert_eq!(inv.observer, Vector3::new(-6378.137, -0.5, -1000.0));
        assert_eq!(inv.target, Vector3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_leading_dot_decimals() {
        let inv = cli(&["-.5", ".25", "0", "6378.137", "0", "10"])
            .invocation()
            .unwrap();

        assert_eq!(inv.observer, Vector3::new(-0.5, 0.25, 0.0));
    }

    #[test]
    fn test_dash_tokens_reach_arity_check() {
        for values in [&["-x"][..], &["--help"][..], &["-V"][..], &["--"][..]] {
            let err = cli(values).invocation().unwrap_err();
            assert!(matches!(err, SezError::Usage { got: 1 }));
        }
    }

    #[test]
    fn test_double_dash_is_counted() {
        let parsed = cli(&["1", "2", "3", "--", "4", "5", "6"]);
        assert_eq!(parsed.values.len(), 7);
        assert!(matches!(parsed.invocation(), Err(SezError::Usage { got: 7 })));

        let parsed = cli(&["--", "1", "2", "3", "4", "5"]);
        assert_eq!(parsed.values[0], "--");
        assert!(matches!(
            parsed.invocation(),
            Err(SezError::Parse { position: 1, .. })
        ));
    }

    #[test]
    fn test_dash_token_is_parse_error() {
        let err = cli(&["1", "2", "3", "4", "5", "-x"])
            .invocation()
            .unwrap_err();
        assert!(matches!(err, SezError::Parse { position: 6, name: "z_km", .. }));
    }

    #[test]
    fn test_wrong_count_is_usage_error() {
        for values in [&[][..], &["1", "2", "3", "4", "5"][..], &["1"; 7][..]] {
            let err = cli(values).invocation().unwrap_err();
            assert!(err.is_usage());
            assert!(matches!(err, SezError::Usage { got } if got == values.len()));
        }
    }

    #[test]
    fn test_non_numeric_argument() {
        let err = cli(&["1", "2", "3", "abc", "5", "6"])
            .invocation()
            .unwrap_err();

        assert!(!err.is_usage());
        assert!(matches!(
            err,
            SezError::Parse { position: 4, name: "x_km", ref token, .. } if token == "abc"
        ));
    }

    #[test]
    fn test_non_finite_argument() {
        let err = cli(&["1", "2", "inf", "4", "5", "6"])
            .invocation()
            .unwrap_err();
        assert!(matches!(
            err,
            SezError::NonFiniteArgument { position: 3, name: "o_z_km", .. }
        ));

        let err = cli(&["1", "2", "3", "4", "5", "NaN"])
            .invocation()
            .unwrap_err();
        assert!(matches!(err, SezError::NonFiniteArgument { position: 6, .. }));

        let err = cli(&["1", "2", "3", "4", "5", "-inf"])
            .invocation()
            .unwrap_err();
        assert!(matches!(err, SezError::NonFiniteArgument { position: 6, .. }));
    }
}
