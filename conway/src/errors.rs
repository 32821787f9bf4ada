use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    io,
    num::ParseIntError,
};

pub struct LifeError {
    err: anyhow::Error,
}

impl Debug for LifeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let anyhow_str = format!("{:?}", self.err).replace('\n', " ");
        f.debug_tuple("LifeError").field(&anyhow_str).finish()
    }
}

impl Display for LifeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({:#})", self.err)
    }
}

impl std::error::Error for LifeError {}

impl From<anyhow::Error> for LifeError {
    fn from(err: anyhow::Error) -> LifeError {
        LifeError { err }
    }
}

impl From<ParseIntError> for LifeError {
    fn from(err: ParseIntError) -> LifeError {
        let msg = format!("parse int err: '{:#}'", err);
        LifeError { err: anyhow::Error::msg(msg) }
    }
}

impl From<io::Error> for LifeError {
    fn from(err: io::Error) -> LifeError {
        let msg = format!("io error: '{:#}'", err);
        LifeError { err: anyhow::Error::msg(msg) }
    }
}

#[cfg(test)]
mod tests {
    use super::LifeError;
    use anyhow::anyhow;

    #[test]
    fn debug_output_stays_on_one_line() {
        let err: LifeError = anyhow!("first").context("second").into();
        let debug = format!("{:?}", err);
        assert!(!debug.contains('\n'), "got {debug}");
        assert!(debug.contains("second"));
    }

    #[test]
    fn parse_errors_keep_their_message() {
        let err: LifeError = "x".parse::<i64>().unwrap_err().into();
        assert!(err.to_string().contains("parse int err"));
    }
}
