use crate::error::ScanlistError;

pub type ScanlistResult<T> = Result<T, ScanlistError>;
