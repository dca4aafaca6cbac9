use crate::error::SmartBookError;

pub type SmartBookResult<T> = Result<T, SmartBookError>;
