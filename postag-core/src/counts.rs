//! # Acumulador de Contagens
//!
//! Uma única passada sobre as sentenças de treino produz as contagens brutas
//! de que o HMM precisa: transições tag→tag (com pseudo-tags de fronteira de
//! sentença), emissões tag→palavra e unigramas de tag.
//!
//! ## Invariantes
//!
//! - Toda contagem é um inteiro não-negativo.
//! - A soma das emissões de uma tag é igual ao unigrama da tag.
//! - Cada ocorrência de tag contribui exatamente uma transição de saída
//!   (para a tag seguinte ou para [`STOP_TAG`]), então a soma da linha de
//!   transições de uma tag também é igual ao seu unigrama.
//!
//! As sentenças são pontuadas de forma independente: não há dependência
//! entre o fim de uma sentença e o começo da seguinte.

use std::collections::{HashMap, HashSet};

use crate::corpus::{Sentence, Tag, Word};
use crate::error::{Result, TaggerError};
use crate::vocab::PseudoWordMapper;

/// Pseudo-tag de início de sentença.
pub const START_TAG: &str = "<s>";

/// Pseudo-tag de fim de sentença.
pub const STOP_TAG: &str = "</s>";

/// Contagens brutas extraídas do corpus de treinamento.
#[derive(Debug, Clone)]
pub struct CountTable {
    /// (tag_anterior, tag_atual) → contagem. Inclui [`START_TAG`] como
    /// anterior da primeira tag e [`STOP_TAG`] como sucessora da última.
    pub transitions: HashMap<(Tag, Tag), u32>,
    /// (tag, palavra_mapeada) → contagem.
    pub emissions: HashMap<(Tag, Word), u32>,
    /// tag → total de ocorrências no treino.
    pub tag_unigrams: HashMap<Tag, u32>,
    /// Tags distintas observadas, em ordem alfabética (determinística).
    pub tags: Vec<Tag>,
    /// Vocabulário efetivo (palavras pós-mapeamento de pseudo-palavras).
    pub vocab: HashSet<Word>,
    /// Número de sentenças não vazias contadas.
    pub sentence_count: usize,
}

/// Varre o treino e acumula todas as contagens.
///
/// Cada palavra passa pelo mapeador em contexto de treinamento antes de ser
/// contada, de modo que palavras raras contribuam para as estatísticas da
/// sua categoria de forma. Sentenças vazias são ignoradas.
///
/// # Erros
/// [`TaggerError::InsufficientData`] se nenhuma sentença não-vazia existir.
pub fn accumulate(train: &[Sentence], mapper: &PseudoWordMapper) -> Result<CountTable> {
    let mut transitions: HashMap<(Tag, Tag), u32> = HashMap::new();
    let mut emissions: HashMap<(Tag, Word), u32> = HashMap::new();
    let mut tag_unigrams: HashMap<Tag, u32> = HashMap::new();
    let mut tag_set: HashSet<Tag> = HashSet::new();
    let mut vocab: HashSet<Word> = HashSet::new();
    let mut sentence_count = 0usize;

    for sentence in train {
        if sentence.is_empty() {
            continue;
        }
        sentence_count += 1;

        let mut prev: Tag = START_TAG.to_string();
        for (word, tag) in sentence {
            let mapped = mapper.transform(word, true);

            tag_set.insert(tag.clone());
            *tag_unigrams.entry(tag.clone()).or_insert(0) += 1;
            vocab.insert(mapped.clone());
            *emissions.entry((tag.clone(), mapped)).or_insert(0) += 1;
            *transitions.entry((prev, tag.clone())).or_insert(0) += 1;

            prev = tag.clone();
        }
        // Fronteira final: a última tag transita para </s>
        *transitions.entry((prev, STOP_TAG.to_string())).or_insert(0) += 1;
    }

    if sentence_count == 0 {
        return Err(TaggerError::InsufficientData);
    }

    let mut tags: Vec<Tag> = tag_set.into_iter().collect();
    tags.sort(); // ordem determinística para o Viterbi

    Ok(CountTable {
        transitions,
        emissions,
        tag_unigrams,
        tags,
        vocab,
        sentence_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_train() -> Vec<Sentence> {
        vec![
            vec![
                ("o".into(), "ART".into()),
                ("gato".into(), "N".into()),
                ("dorme".into(), "V".into()),
            ],
            vec![
                ("o".into(), "ART".into()),
                ("cão".into(), "N".into()),
                ("late".into(), "V".into()),
            ],
        ]
    }

    #[test]
    fn test_boundary_transitions() {
        let mapper = PseudoWordMapper::new(false);
        let counts = accumulate(&toy_train(), &mapper).unwrap();

        assert_eq!(counts.transitions[&(START_TAG.into(), "ART".into())], 2);
        assert_eq!(counts.transitions[&("V".into(), STOP_TAG.into())], 2);
        assert_eq!(counts.transitions[&("ART".into(), "N".into())], 2);
        assert_eq!(counts.sentence_count, 2);
    }

    #[test]
    fn test_emission_sums_match_unigrams() {
        let mapper = PseudoWordMapper::new(false);
        let counts = accumulate(&toy_train(), &mapper).unwrap();

        for (tag, &unigram) in &counts.tag_unigrams {
            let emitted: u32 = counts
                .emissions
                .iter()
                .filter(|((t, _), _)| t == tag)
                .map(|(_, &c)| c)
                .sum();
            assert_eq!(emitted, unigram, "emissões de {} não fecham", tag);
        }
    }

    #[test]
    fn test_transition_rows_match_unigrams() {
        let mapper = PseudoWordMapper::new(false);
        let counts = accumulate(&toy_train(), &mapper).unwrap();

        // Cada ocorrência de tag tem exatamente um sucessor (tag ou </s>)
        for (tag, &unigram) in &counts.tag_unigrams {
            let outgoing: u32 = counts
                .transitions
                .iter()
                .filter(|((prev, _), _)| prev == tag)
                .map(|(_, &c)| c)
                .sum();
            assert_eq!(outgoing, unigram, "transições de {} não fecham", tag);
        }
    }

    #[test]
    fn test_tags_are_sorted() {
        let mapper = PseudoWordMapper::new(false);
        let counts = accumulate(&toy_train(), &mapper).unwrap();
        let mut sorted = counts.tags.clone();
        sorted.sort();
        assert_eq!(counts.tags, sorted);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let mapper = PseudoWordMapper::new(false);
        assert_eq!(
            accumulate(&[], &mapper).unwrap_err(),
            TaggerError::InsufficientData
        );
        // Só sentenças vazias também não servem
        let empties: Vec<Sentence> = vec![vec![], vec![]];
        assert_eq!(
            accumulate(&empties, &mapper).unwrap_err(),
            TaggerError::InsufficientData
        );
    }

    #[test]
    fn test_rare_words_counted_as_categories() {
        let mut mapper = PseudoWordMapper::new(true);
        let train = toy_train();
        mapper.fit(&train);

        // Todas as palavras do corpus de brinquedo são raras (freq < 5),
        // então nenhuma emissão literal deve sobrar
        let counts = accumulate(&train, &mapper).unwrap();
        assert!(counts.vocab.iter().all(|w| w.starts_with("<UNK")));
    }
}
