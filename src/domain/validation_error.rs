/// Reasons a welcome submission is turned down before any email work happens.
///
/// The `Display` text is what the browser form shows to the user.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nome e email são obrigatórios")]
    MissingField,
    #[error("Formato de email inválido")]
    InvalidEmailFormat,
    #[error("Nome deve ter pelo menos 2 caracteres")]
    NameTooShort,
}
