//! # Fachada do Etiquetador HMM
//!
//! Orquestra o fluxo completo de treinamento e inferência:
//!
//! ```text
//! train:   sentenças → mapper.fit → accumulate → smoothing → HmmModel::fit
//! predict: sentenças → mapper.transform (inferência) → HmmModel::decode
//! loss:    predições vs. gabarito → partição conhecidas/desconhecidas
//! ```
//!
//! ## Máquina de estados
//!
//! Cada instância nasce **não treinada**; `train` bem-sucedido a move para
//! **treinada**, e a partir daí `predict`/`loss` podem ser chamados
//! quantas vezes for preciso. Um novo `train` descarta os parâmetros
//! anteriores por inteiro — não existe treinamento parcial ou incremental.

use rayon::prelude::*;

use crate::corpus::{Sentence, Tag, Word};
use crate::counts::accumulate;
use crate::error::{Result, TaggerError};
use crate::eval::{evaluate, LossReport};
use crate::hmm::HmmModel;
use crate::smoothing::{no_smoothing, SmoothingFn};
use crate::vocab::PseudoWordMapper;

/// Etiquetador morfossintático por HMM + Viterbi.
///
/// A estratégia de suavização e o uso de pseudo-palavras são fixados na
/// construção; o estado treinado (mapeador ajustado + modelo) vive em
/// `model`/`mapper` e é substituído a cada `train`.
pub struct HmmTagger {
    smoothing: SmoothingFn,
    use_pseudo_words: bool,
    mapper: PseudoWordMapper,
    model: Option<HmmModel>,
}

impl HmmTagger {
    /// Sem suavização (MLE) e sem pseudo-palavras — a configuração que
    /// ilustra o colapso por esparsidade.
    pub fn new() -> Self {
        Self::with_options(no_smoothing, false)
    }

    /// Com a estratégia de suavização dada, sem pseudo-palavras.
    pub fn with_smoothing(smoothing: SmoothingFn) -> Self {
        Self::with_options(smoothing, false)
    }

    /// Configuração completa: suavização injetada + pseudo-palavras.
    pub fn with_options(smoothing: SmoothingFn, use_pseudo_words: bool) -> Self {
        Self {
            smoothing,
            use_pseudo_words,
            mapper: PseudoWordMapper::new(use_pseudo_words),
            model: None,
        }
    }

    /// Treina o etiquetador: ajusta o mapeador, acumula contagens e estima
    /// as tabelas suavizadas.
    ///
    /// `test` pode ser inspecionado apenas para relatório — nunca entra na
    /// estimativa dos parâmetros. Em caso de sucesso, o estado anterior é
    /// descartado; em caso de erro, o estado anterior permanece intacto.
    pub fn train(&mut self, train: &[Sentence], test: &[Sentence]) -> Result<()> {
        let mut mapper = PseudoWordMapper::new(self.use_pseudo_words);
        mapper.fit(train);

        let counts = accumulate(train, &mapper)?;
        let model = HmmModel::fit(&counts, self.smoothing);

        tracing::info!(
            sentencas_treino = train.len(),
            sentencas_teste = test.len(),
            tags = counts.tags.len(),
            vocabulario = counts.vocab.len(),
            pseudo_palavras = self.use_pseudo_words,
            "HMM treinado"
        );

        self.mapper = mapper;
        self.model = Some(model);
        Ok(())
    }

    /// Decodifica cada sentença, preservando ordem e comprimento.
    ///
    /// As tags de entrada são ignoradas (só as palavras contam); cada
    /// sentença é independente das demais, então a decodificação corre em
    /// paralelo sobre parâmetros somente-leitura.
    pub fn predict(&self, sentences: &[Sentence]) -> Result<Vec<Vec<Tag>>> {
        let model = self.model.as_ref().ok_or(TaggerError::NotTrained)?;

        Ok(sentences
            .par_iter()
            .map(|sentence| {
                let words: Vec<Word> = sentence
                    .iter()
                    .map(|(word, _)| self.mapper.transform(word, false))
                    .collect();
                model.decode(&words)
            })
            .collect())
    }

    /// Taxas de erro sobre o teste: conhecidas, desconhecidas e total.
    ///
    /// Se as predições não forem fornecidas, são computadas via
    /// [`predict`](Self::predict). Com pseudo-palavras ativas nenhuma
    /// palavra é desconhecida para o mapeador, então a partição de
    /// desconhecidas fica vazia (taxa 0).
    pub fn loss(&self, test: &[Sentence], predictions: Option<&[Vec<Tag>]>) -> Result<LossReport> {
        if self.model.is_none() {
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

    /// A palavra é conhecida do modelo?
    ///
    /// Sem pseudo-palavras: pertencer ao vocabulário de treino. Com
    /// pseudo-palavras: sempre — o coringa do mapeador garante classificação
    /// para qualquer palavra.
    pub fn is_known(&self, word: &str) -> bool {
        self.use_pseudo_words || self.mapper.contains(word)
    }

    /// O etiquetador já foi treinado?
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }
}

impl Default for HmmTagger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::BaselineTagger;
    use crate::smoothing::add_one_smoothing;

    fn sent(pairs: &[(&str, &str)]) -> Sentence {
        pairs
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect()
    }

    fn toy_train() -> Vec<Sentence> {
        vec![
            sent(&[("o", "ART"), ("gato", "N"), ("dorme", "V")]),
            sent(&[("a", "ART"), ("menina", "N"), ("corre", "V")]),
            sent(&[("o", "ART"), ("cão", "N"), ("late", "V")]),
        ]
    }

    #[test]
    fn test_untrained_is_an_error() {
        let tagger = HmmTagger::new();
        assert_eq!(tagger.predict(&[]).unwrap_err(), TaggerError::NotTrained);
        assert_eq!(tagger.loss(&[], None).unwrap_err(), TaggerError::NotTrained);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let mut tagger = HmmTagger::with_smoothing(add_one_smoothing);
        assert_eq!(
            tagger.train(&[], &[]).unwrap_err(),
            TaggerError::InsufficientData
        );
        assert!(!tagger.is_trained());
    }

    #[test]
    fn test_predict_preserves_shape() {
        let mut tagger = HmmTagger::with_smoothing(add_one_smoothing);
        tagger.train(&toy_train(), &[]).unwrap();

        let test = vec![
            sent(&[("o", "ART"), ("gato", "N")]),
            sent(&[]),
            sent(&[("late", "V")]),
        ];
        let preds = tagger.predict(&test).unwrap();

        assert_eq!(preds.len(), 3);
        assert_eq!(preds[0].len(), 2);
        assert!(preds[1].is_empty());
        assert_eq!(preds[2].len(), 1);
    }

    #[test]
    fn test_loss_partition_covers_every_word() {
        let mut tagger = HmmTagger::with_smoothing(add_one_smoothing);
        tagger.train(&toy_train(), &[]).unwrap();

        let test = vec![sent(&[("o", "ART"), ("dinossauro", "N"), ("dorme", "V")])];
        let report = tagger.loss(&test, None).unwrap();

        assert_eq!(report.known_total, 2);
        assert_eq!(report.unknown_total, 1);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_loss_accepts_precomputed_predictions() {
        let mut tagger = HmmTagger::with_smoothing(add_one_smoothing);
        tagger.train(&toy_train(), &[]).unwrap();

        let test = vec![sent(&[("o", "ART"), ("gato", "N"), ("dorme", "V")])];
        let preds = tagger.predict(&test).unwrap();

        let from_preds = tagger.loss(&test, Some(&preds)).unwrap();
        let recomputed = tagger.loss(&test, None).unwrap();
        assert_eq!(from_preds, recomputed);
    }

    #[test]
    fn test_retrain_is_idempotent() {
        let mut tagger = HmmTagger::with_smoothing(add_one_smoothing);
        let test = vec![sent(&[("o", "ART"), ("gato", "N"), ("dorme", "V")])];

        tagger.train(&toy_train(), &[]).unwrap();
        let first = tagger.predict(&test).unwrap();

        tagger.train(&toy_train(), &[]).unwrap();
        let second = tagger.predict(&test).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pseudo_words_make_every_word_known() {
        let mut tagger = HmmTagger::with_options(add_one_smoothing, true);
        tagger.train(&toy_train(), &[]).unwrap();

        let test = vec![sent(&[("extraterrestre", "N"), ("dorme", "V")])];
        let report = tagger.loss(&test, None).unwrap();

        // Nenhuma palavra é desconhecida para o mapeador
        assert_eq!(report.unknown_total, 0);
        assert_eq!(report.unknown_error_rate(), 0.0);
        assert_eq!(report.known_total, 2);
    }

    /// Cenário do corpus de brinquedo: 2 sentenças, 3 tags, com palavras
    /// raras colapsadas em categorias. A decodificação com pseudo-palavras
    /// deve diferir da decodificação literal para a mesma sentença.
    #[test]
    fn test_pseudo_words_change_decoding() {
        let train = vec![
            sent(&[("gato", "N"), ("dorme", "V"), ("muito", "ADV")]),
            sent(&[("sono", "N"), ("vence", "V"), ("gato", "N")]),
        ];
        let target = vec![sent(&[("sono", "N"), ("vence", "V"), ("gato", "N")])];

        let mut plain = HmmTagger::with_smoothing(add_one_smoothing);
        plain.train(&train, &[]).unwrap();
        let plain_preds = plain.predict(&target).unwrap();

        let mut pseudo = HmmTagger::with_options(add_one_smoothing, true);
        pseudo.train(&train, &[]).unwrap();
        let pseudo_preds = pseudo.predict(&target).unwrap();

        // Com evidência lexical, a sentença decodifica no gabarito; com as
        // palavras colapsadas em categorias de forma, o caminho muda
        assert_eq!(plain_preds[0], vec!["N", "V", "N"]);
        assert_ne!(plain_preds, pseudo_preds);
    }

    /// Sem suavização, a política degenerada do HMM coincide com a política
    /// de palavras desconhecidas do baseline: ambos caem na tag majoritária,
    /// então a taxa de erro sobre desconhecidas é a mesma.
    #[test]
    fn test_mle_unknown_error_matches_baseline() {
        // "N" é a tag majoritária disparada (aparece 4 vezes)
        let train = vec![
            sent(&[("o", "ART"), ("gato", "N"), ("dorme", "V")]),
            sent(&[("gato", "N"), ("come", "V"), ("peixe", "N")]),
            sent(&[("peixe", "N"), ("nada", "V")]),
        ];
        let test = vec![sent(&[("tubarão", "N"), ("nada", "V")])];

        let mut hmm = HmmTagger::new();
        hmm.train(&train, &test).unwrap();
        let hmm_report = hmm.loss(&test, None).unwrap();

        let mut baseline = BaselineTagger::new();
        baseline.train(&train, &test).unwrap();
        let baseline_report = baseline.loss(&test, None).unwrap();

        assert_eq!(
            hmm_report.unknown_error_rate(),
            baseline_report.unknown_error_rate()
        );
        // E o HMM sem suavização erra também nas conhecidas da sentença
        // contaminada, ficando atrás do baseline no total
        assert!(hmm_report.total_error_rate() >= baseline_report.total_error_rate());
    }
}
