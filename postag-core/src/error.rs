//! Erros do núcleo estatístico.
//!
//! Só duas condições de falha existem de fato: treinar sem dados e
//! consultar um etiquetador não treinado. Todo o resto (contagem,
//! suavização, decodificação) é determinístico e total.

use thiserror::Error;

/// Alias de resultado usado em todo o crate.
pub type Result<T> = std::result::Result<T, TaggerError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaggerError {
    /// O corpus de treinamento está vazio — nenhuma distribuição pode ser
    /// estimada a partir de zero observações.
    #[error("corpus de treinamento vazio: impossível estimar distribuições")]
    InsufficientData,

    /// `predict`/`loss` foram chamados antes de `train`. A condição não é
    /// recuperável por retry: o chamador precisa treinar primeiro.
    #[error("etiquetador ainda não treinado: chame train antes de predict/loss")]
    NotTrained,
}
