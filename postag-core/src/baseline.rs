//! # Baseline de Frequência
//!
//! O etiquetador mais simples possível: para cada palavra conhecida, devolve
//! a tag majoritária observada no treino; para palavras desconhecidas,
//! devolve a tag mais frequente do corpus inteiro. Nenhum contexto é
//! considerado.
//!
//! Serve de régua para os modelos de sequência: qualquer HMM que não supere
//! esta tabela de lookup não está aproveitando a estrutura sequencial.

use std::collections::HashMap;

use crate::corpus::{Sentence, Tag, Word};
use crate::error::{Result, TaggerError};
use crate::eval::{evaluate, LossReport};

/// Etiquetador por tag majoritária palavra a palavra.
pub struct BaselineTagger {
    /// palavra → tag mais frequente para ela no treino.
    majority: HashMap<Word, Tag>,
    /// Tag mais frequente do corpus, usada para palavras desconhecidas.
    fallback_tag: Tag,
    trained: bool,
}

impl BaselineTagger {
    pub fn new() -> Self {
        Self {
            majority: HashMap::new(),
            fallback_tag: Tag::new(),
            trained: false,
        }
    }

    /// Conta (palavra, tag) no treino e congela a tabela de maiorias.
    ///
    /// `test` é aceito apenas por simetria de interface com o HMM; nada dele
    /// é usado para ajustar a tabela. Empates são resolvidos pela ordem
    /// alfabética da tag, para que o treinamento seja determinístico.
    pub fn train(&mut self, train: &[Sentence], _test: &[Sentence]) -> Result<()> {
        let mut per_word: HashMap<Word, HashMap<Tag, u32>> = HashMap::new();
        let mut tag_totals: HashMap<Tag, u32> = HashMap::new();
        let mut token_count = 0usize;

        for sentence in train {
            for (word, tag) in sentence {
                *per_word
                    .entry(word.clone())
                    .or_default()
                    .entry(tag.clone())
                    .or_insert(0) += 1;
                *tag_totals.entry(tag.clone()).or_insert(0) += 1;
                token_count += 1;
            }
        }

        if token_count == 0 {
            return Err(TaggerError::InsufficientData);
        }

        self.majority = per_word
            .into_iter()
            .map(|(word, tags)| (word, argmax_tag(&tags)))
            .collect();
        self.fallback_tag = argmax_tag(&tag_totals);
        self.trained = true;

        tracing::debug!(
            vocabulario = self.majority.len(),
            fallback = %self.fallback_tag,
            "baseline treinado"
        );
        Ok(())
    }

    /// Etiqueta cada sentença por lookup, preservando ordem e comprimento.
    pub fn predict(&self, sentences: &[Sentence]) -> Result<Vec<Vec<Tag>>> {
        if !self.trained {
            return Err(TaggerError::NotTrained);
        }
        Ok(sentences
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .map(|(word, _)| {
                        self.majority
                            .get(word)
                            .cloned()
                            .unwrap_or_else(|| self.fallback_tag.clone())
                    })
                    .collect()
            })
            .collect())
    }

    /// Taxas de erro sobre o conjunto de teste (ver [`crate::eval`]).
    pub fn loss(&self, test: &[Sentence], predictions: Option<&[Vec<Tag>]>) -> Result<LossReport> {
        if !self.trained {
            return Err(TaggerError::NotTrained);
        }
        let computed;
        let preds = match predictions {
            Some(p) => p,
            None => {
                computed = self.predict(test)?;
                &computed
            }
        };
        Ok(evaluate(test, preds, |w| self.is_known(w)))
    }

    /// A palavra foi vista no treinamento?
    pub fn is_known(&self, word: &str) -> bool {
        self.majority.contains_key(word)
    }

    /// Tag atribuída a palavras desconhecidas.
    pub fn fallback_tag(&self) -> &str {
        &self.fallback_tag
    }
}

impl Default for BaselineTagger {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag com maior contagem; empate resolvido pela menor ordem alfabética.
fn argmax_tag(counts: &HashMap<Tag, u32>) -> Tag {
    counts
        .iter()
        .max_by(|(ta, ca), (tb, cb)| ca.cmp(cb).then_with(|| tb.cmp(ta)))
        .map(|(t, _)| t.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_train() -> Vec<Sentence> {
        vec![
            vec![
                ("o".into(), "ART".into()),
                ("canto".into(), "N".into()),
            ],
            vec![
                ("eu".into(), "PRO".into()),
                ("canto".into(), "V".into()),
            ],
            vec![
                ("o".into(), "ART".into()),
                ("canto".into(), "N".into()),
            ],
        ]
    }

    #[test]
    fn test_majority_tag_per_word() {
        let mut tagger = BaselineTagger::new();
        tagger.train(&toy_train(), &[]).unwrap();

        // "canto" é N duas vezes e V uma: a maioria vence
        let preds = tagger
            .predict(&[vec![("canto".into(), "N".into())]])
            .unwrap();
        assert_eq!(preds[0], vec!["N"]);
    }

    #[test]
    fn test_unknown_word_gets_global_majority() {
        let mut tagger = BaselineTagger::new();
        tagger.train(&toy_train(), &[]).unwrap();

        // N e ART empatam com 2; o desempate alfabético escolhe ART
        assert_eq!(tagger.fallback_tag(), "ART");
        let preds = tagger
            .predict(&[vec![("inédita".into(), "N".into())]])
            .unwrap();
        assert_eq!(preds[0], vec!["ART"]);
    }

    #[test]
    fn test_untrained_is_an_error() {
        let tagger = BaselineTagger::new();
        assert_eq!(tagger.predict(&[]).unwrap_err(), TaggerError::NotTrained);
        assert_eq!(tagger.loss(&[], None).unwrap_err(), TaggerError::NotTrained);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let mut tagger = BaselineTagger::new();
        assert_eq!(
            tagger.train(&[], &[]).unwrap_err(),
            TaggerError::InsufficientData
        );
    }

    #[test]
    fn test_loss_partitions_by_vocabulary() {
        let mut tagger = BaselineTagger::new();
        tagger.train(&toy_train(), &[]).unwrap();

        let test = vec![vec![
            ("canto".to_string(), "N".to_string()),
            ("inédita".to_string(), "ART".to_string()),
        ]];
        let report = tagger.loss(&test, None).unwrap();

        assert_eq!(report.known_total, 1);
        assert_eq!(report.unknown_total, 1);
        assert_eq!(report.known_errors, 0);
        // "inédita" recebe o fallback ART, que por acaso é o gabarito
        assert_eq!(report.unknown_errors, 0);
    }
}
