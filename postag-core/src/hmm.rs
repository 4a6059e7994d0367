//! # Hidden Markov Model (HMM) para Etiquetagem Morfossintática
//!
//! Implementação clássica de HMM de primeira ordem onde:
//! - **Estados Ocultos**: Tags POS (ART, N, V, etc.)
//! - **Observações**: Palavras (pós-mapeamento de pseudo-palavras)
//!
//! O modelo estima, a partir das contagens do treino:
//! 1. Probabilidade Inicial: P(tag | `<s>`)
//! 2. Probabilidade de Transição: P(tag_atual | tag_anterior), incluindo a
//!    transição final para `</s>`
//! 3. Probabilidade de Emissão: P(palavra | tag)
//!
//! A decodificação é feita via algoritmo de Viterbi, maximizando P(tags | palavras).
//!
//! # Armazenamento
//! As probabilidades são armazenadas em **log-space** para evitar underflow
//! numérico ao somar os escores de sentenças longas:
//! $$ \log(A \cdot B) = \log(A) + \log(B) $$
//! Isso é requisito de correção, não otimização: o produto de centenas de
//! probabilidades pequenas estoura o limite inferior do `f64`.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::counts::{CountTable, START_TAG, STOP_TAG};
use crate::corpus::{Tag, Word};
use crate::smoothing::SmoothingFn;

/// Converte uma probabilidade em log-prob, mapeando p ≤ 0 para `-inf`.
fn logp(p: f64) -> f64 {
    if p > 0.0 {
        p.ln()
    } else {
        f64::NEG_INFINITY
    }
}

/// Modelo HMM treinado.
///
/// Todas as tabelas são somente-leitura após [`HmmModel::fit`]: a inferência
/// nunca as altera, o que torna a decodificação paralelizável por sentença
/// sem nenhum lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmmModel {
    /// P(next | prev) em log-space. Chave: `(prev, next)`.
    /// Inclui a linha de [`START_TAG`] e a coluna de [`STOP_TAG`].
    transition_probs: HashMap<(Tag, Tag), f64>,
    /// P(palavra | tag) em log-space. Chave: `(tag, palavra)`.
    /// Cobre todo o vocabulário efetivo do treino.
    emission_probs: HashMap<(Tag, Word), f64>,
    /// P(palavra fora do vocabulário | tag) em log-space, pré-computada no
    /// `fit` com contagem zero (é `-inf` sob MLE, positiva sob Add-1).
    unseen_emission: HashMap<Tag, f64>,
    /// Lista ordenada de todas as tags — a ordem fixa é o desempate
    /// determinístico do Viterbi.
    all_tags: Vec<Tag>,
    /// Vocabulário efetivo (pós-mapeamento), para distinguir lookup direto
    /// de massa de palavra inédita.
    vocab: HashSet<Word>,
    /// Tag mais frequente do treino: o resultado degradado quando nenhuma
    /// sequência tem probabilidade positiva.
    fallback_tag: Tag,
}

impl HmmModel {
    /// Estima as tabelas de probabilidade aplicando a estratégia de
    /// suavização às contagens acumuladas.
    ///
    /// Alfabetos usados nos denominadores:
    /// - Transições: número de tags + 1 (o desfecho `</s>` conta).
    /// - Emissões: tamanho do vocabulário efetivo do treino.
    ///
    /// Com qualquer uma das duas estratégias fornecidas, cada linha soma 1
    /// sobre seu alfabeto (propriedade coberta nos testes).
    pub fn fit(counts: &CountTable, smoothing: SmoothingFn) -> Self {
        let n_tags = counts.tags.len() as f64;
        let vocab_size = counts.vocab.len() as f64;
        // O alfabeto de transição inclui o desfecho </s>
        let trans_alphabet = n_tags + 1.0;

        let mut transition_probs = HashMap::new();
        let mut emission_probs = HashMap::new();
        let mut unseen_emission = HashMap::new();

        // Sucessores possíveis: todas as tags mais </s>
        let successors: Vec<Tag> = counts
            .tags
            .iter()
            .cloned()
            .chain(std::iter::once(STOP_TAG.to_string()))
            .collect();

        // Linha do <s>: o "unigrama" do estado inicial é o número de sentenças
        let total_starts = counts.sentence_count as f64;
        for next in &successors {
            let c = *counts
                .transitions
                .get(&(START_TAG.to_string(), next.clone()))
                .unwrap_or(&0) as f64;
            let p = smoothing(c, total_starts, trans_alphabet);
            transition_probs.insert((START_TAG.to_string(), next.clone()), logp(p));
        }

        // Linhas das tags: cada ocorrência tem exatamente um sucessor,
        // então o denominador é o unigrama da tag
        for prev in &counts.tags {
            let total = *counts.tag_unigrams.get(prev).unwrap_or(&0) as f64;
            for next in &successors {
                let c = *counts
                    .transitions
                    .get(&(prev.clone(), next.clone()))
                    .unwrap_or(&0) as f64;
                let p = smoothing(c, total, trans_alphabet);
                transition_probs.insert((prev.clone(), next.clone()), logp(p));
            }
        }

        // Emissões: P(palavra | tag) sobre o vocabulário efetivo
        for tag in &counts.tags {
            let total = *counts.tag_unigrams.get(tag).unwrap_or(&0) as f64;
            for word in &counts.vocab {
                let c = *counts
                    .emissions
                    .get(&(tag.clone(), word.clone()))
                    .unwrap_or(&0) as f64;
                let p = smoothing(c, total, vocab_size);
                emission_probs.insert((tag.clone(), word.clone()), logp(p));
            }
            // Massa para palavras fora do vocabulário: contagem zero
            let p_unseen = smoothing(0.0, total, vocab_size);
            unseen_emission.insert(tag.clone(), logp(p_unseen));
        }

        // Tag mais frequente; empate resolvido alfabeticamente
        let fallback_tag = counts
            .tag_unigrams
            .iter()
            .max_by(|(ta, ca), (tb, cb)| ca.cmp(cb).then_with(|| tb.cmp(ta)))
            .map(|(t, _)| t.clone())
            .unwrap_or_default();

        Self {
            transition_probs,
            emission_probs,
            unseen_emission,
            all_tags: counts.tags.clone(),
            vocab: counts.vocab.clone(),
            fallback_tag,
        }
    }

    /// Decodifica uma sequência de palavras na melhor sequência de tags.
    ///
    /// **Algoritmo de Viterbi** em log-space:
    ///
    /// ```text
    /// Inicialização: viterbi[0][s] = log P(s | <s>) + log P(w_0 | s)
    /// Recursão:      viterbi[t][s] = max_s' [viterbi[t-1][s'] + log P(s | s')] + log P(w_t | s)
    /// Terminação:    melhor s com viterbi[n-1][s] + log P(</s> | s)
    /// Backtracking:  reconstrói o caminho de trás para frente
    /// ```
    ///
    /// # Complexidade
    /// $O(N \cdot T^2)$ para $N$ palavras e $T$ tags; o lookup de emissão é
    /// O(1), independente do tamanho do vocabulário.
    ///
    /// # Determinismo
    /// Empates são desfeitos pela ordem fixa (alfabética) de `all_tags`:
    /// a comparação estrita `>` mantém o primeiro máximo encontrado.
    ///
    /// # Caso degenerado
    /// Sob MLE, uma palavra com emissão zero em todas as tags torna toda a
    /// sentença impontuável (escore final `-inf`). Nesse caso o decodificador
    /// não levanta erro: devolve a tag mais frequente do treino em todas as
    /// posições. É esse comportamento que produz as taxas de erro
    /// catastróficas do HMM sem suavização.
    pub fn decode(&self, words: &[Word]) -> Vec<Tag> {
        if words.is_empty() {
            return Vec::new();
        }

        let n_words = words.len();
        let n_tags = self.all_tags.len();

        // viterbi[t][s] = log-prob do melhor caminho terminando em t com estado s
        let mut viterbi = vec![vec![f64::NEG_INFINITY; n_tags]; n_words];
        // backptr[t][s] = índice do estado anterior que maximizou viterbi[t][s]
        let mut backptr = vec![vec![0usize; n_tags]; n_words];

        // 1. Inicialização (t = 0)
        for (s, tag) in self.all_tags.iter().enumerate() {
            viterbi[0][s] = self.transition_logp(START_TAG, tag) + self.emission_logp(tag, &words[0]);
        }

        // 2. Recursão (t = 1..N)
        for t in 1..n_words {
            for (s, curr) in self.all_tags.iter().enumerate() {
                let emit = self.emission_logp(curr, &words[t]);

                let mut best_score = f64::NEG_INFINITY;
                let mut best_prev = 0usize;
                for (ps, prev) in self.all_tags.iter().enumerate() {
                    let score = viterbi[t - 1][ps] + self.transition_logp(prev, curr);
                    if score > best_score {
                        best_score = score;
                        best_prev = ps;
                    }
                }

                viterbi[t][s] = best_score + emit;
                backptr[t][s] = best_prev;
            }
        }

        // 3. Terminação: melhor estado final ponderado pela transição para </s>
        let mut best_final = f64::NEG_INFINITY;
        let mut best_idx = 0usize;
        for (s, tag) in self.all_tags.iter().enumerate() {
            let score = viterbi[n_words - 1][s] + self.transition_logp(tag, STOP_TAG);
            if score > best_final {
                best_final = score;
                best_idx = s;
            }
        }

        // Nenhum caminho com probabilidade positiva: degrada para a tag
        // mais frequente em vez de falhar
        if best_final == f64::NEG_INFINITY {
            return vec![self.fallback_tag.clone(); n_words];
        }

        // 4. Backtracking
        let mut path = vec![Tag::new(); n_words];
        let mut curr = best_idx;
        path[n_words - 1] = self.all_tags[curr].clone();
        for t in (1..n_words).rev() {
            curr = backptr[t][curr];
            path[t - 1] = self.all_tags[curr].clone();
        }

        path
    }

    /// Log-prob de transição; pares fora da tabela valem `-inf`.
    fn transition_logp(&self, prev: &str, next: &str) -> f64 {
        self.transition_probs
            .get(&(prev.to_string(), next.to_string()))
            .copied()
            .unwrap_or(f64::NEG_INFINITY)
    }

    /// Log-prob de emissão: lookup direto para palavras do vocabulário,
    /// massa pré-computada de contagem zero para as demais.
    fn emission_logp(&self, tag: &str, word: &str) -> f64 {
        if self.vocab.contains(word) {
            self.emission_probs
                .get(&(tag.to_string(), word.to_string()))
                .copied()
                .unwrap_or(f64::NEG_INFINITY)
        } else {
            self.unseen_emission
                .get(tag)
                .copied()
                .unwrap_or(f64::NEG_INFINITY)
        }
    }

    /// Tags do modelo, em ordem fixa.
    pub fn tags(&self) -> &[Tag] {
        &self.all_tags
    }

    /// Tag mais frequente do treino (alvo do fallback degenerado).
    pub fn fallback_tag(&self) -> &str {
        &self.fallback_tag
    }
}
