//! # Avaliação — Partição Conhecidas vs. Desconhecidas
//!
//! A métrica central do sistema não é uma taxa de erro única, mas uma
//! partição: erro sobre palavras **vistas** no treinamento (conhecidas) e
//! erro sobre palavras **não vistas** (desconhecidas). É essa separação que
//! isola quanto do erro total vem do problema de esparsidade que a
//! suavização e as pseudo-palavras atacam.
//!
//! A partição é exaustiva e disjunta: toda palavra avaliada cai em
//! exatamente uma das duas classes, e `conhecidas + desconhecidas = total`.

use std::fmt;

use serde::Serialize;

use crate::corpus::{Sentence, Tag};

/// Relatório de erro de uma avaliação.
///
/// Taxas são `erros / total` dentro de cada partição; partição vazia tem
/// taxa 0 por definição (ocorre com pseudo-palavras ativas, quando nenhuma
/// palavra é de fato desconhecida para o mapeador).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LossReport {
    pub known_errors: usize,
    pub known_total: usize,
    pub unknown_errors: usize,
    pub unknown_total: usize,
}

impl LossReport {
    fn rate(errors: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            errors as f64 / total as f64
        }
    }

    /// Taxa de erro sobre palavras vistas no treinamento.
    pub fn known_error_rate(&self) -> f64 {
        Self::rate(self.known_errors, self.known_total)
    }

    /// Taxa de erro sobre palavras não vistas no treinamento.
    pub fn unknown_error_rate(&self) -> f64 {
        Self::rate(self.unknown_errors, self.unknown_total)
    }

    /// Taxa de erro global.
    pub fn total_error_rate(&self) -> f64 {
        Self::rate(
            self.known_errors + self.unknown_errors,
            self.known_total + self.unknown_total,
        )
    }

    /// Total de palavras avaliadas.
    pub fn total(&self) -> usize {
        self.known_total + self.unknown_total
    }
}

impl fmt::Display for LossReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Taxa de erro (conhecidas):    {:.4} ({}/{})",
            self.known_error_rate(),
            self.known_errors,
            self.known_total
        )?;
        writeln!(
            f,
            "Taxa de erro (desconhecidas): {:.4} ({}/{})",
            self.unknown_error_rate(),
            self.unknown_errors,
            self.unknown_total
        )?;
        write!(f, "Taxa de erro (total):         {:.4}", self.total_error_rate())
    }
}

/// Compara predições com o gabarito, particionando por `is_known`.
///
/// `test` e `predictions` devem estar alinhados sentença a sentença e
/// posição a posição (contrato de [`predict`](crate::tagger::HmmTagger::predict),
/// que preserva ordem e comprimento).
pub fn evaluate<F>(test: &[Sentence], predictions: &[Vec<Tag>], is_known: F) -> LossReport
where
    F: Fn(&str) -> bool,
{
    let mut report = LossReport::default();

    for (sentence, pred_tags) in test.iter().zip(predictions) {
        for ((word, gold), pred) in sentence.iter().zip(pred_tags) {
            let wrong = gold != pred;
            if is_known(word) {
                report.known_total += 1;
                if wrong {
                    report.known_errors += 1;
                }
            } else {
                report.unknown_total += 1;
                if wrong {
                    report.unknown_errors += 1;
                }
            }
        }
    }

    report
}

/// Achata (gabarito, predição) de todas as sentenças avaliadas, na ordem
/// original — material suficiente para um colaborador externo montar uma
/// matriz de confusão ou gravá-la em arquivo.
pub fn flatten_pairs(test: &[Sentence], predictions: &[Vec<Tag>]) -> Vec<(Tag, Tag)> {
    test.iter()
        .zip(predictions)
        .flat_map(|(sentence, pred_tags)| {
            sentence
                .iter()
                .zip(pred_tags)
                .map(|((_, gold), pred)| (gold.clone(), pred.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_data() -> (Vec<Sentence>, Vec<Vec<Tag>>) {
        let test = vec![vec![
            ("o".to_string(), "ART".to_string()),
            ("gato".to_string(), "N".to_string()),
            ("zzz".to_string(), "V".to_string()),
        ]];
        let preds = vec![vec!["ART".to_string(), "V".to_string(), "N".to_string()]];
        (test, preds)
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let (test, preds) = test_data();
        let known = |w: &str| w != "zzz";
        let report = evaluate(&test, &preds, known);

        assert_eq!(report.known_total + report.unknown_total, 3);
        assert_eq!(report.known_total, 2);
        assert_eq!(report.unknown_total, 1);
    }

    #[test]
    fn test_error_rates() {
        let (test, preds) = test_data();
        let report = evaluate(&test, &preds, |w| w != "zzz");

        // "gato" errado entre as conhecidas; "zzz" errado entre as desconhecidas
        assert!((report.known_error_rate() - 0.5).abs() < 1e-12);
        assert!((report.unknown_error_rate() - 1.0).abs() < 1e-12);
        assert!((report.total_error_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_partition_rate_is_zero() {
        let (test, preds) = test_data();
        // Tudo conhecido: a partição de desconhecidas fica vazia
        let report = evaluate(&test, &preds, |_| true);
        assert_eq!(report.unknown_total, 0);
        assert_eq!(report.unknown_error_rate(), 0.0);
    }

    #[test]
    fn test_flatten_pairs_preserves_order() {
        let (test, preds) = test_data();
        let pairs = flatten_pairs(&test, &preds);
        assert_eq!(
            pairs,
            vec![
                ("ART".to_string(), "ART".to_string()),
                ("N".to_string(), "V".to_string()),
                ("V".to_string(), "N".to_string()),
            ]
        );
    }
}
