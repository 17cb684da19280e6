use gpui::SharedString;
use thiserror::Error;

/// Errors raised by select state mutations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SelectError {
    /// The label does not belong to any option of the select.
    #[error("no option labeled `{label}` in select `{id}`")]
    UnknownOption { id: SharedString, label: SharedString },
}

pub type Result<T> = std::result::Result<T, SelectError>;
