//! # postag-core — Etiquetagem Morfossintática (POS Tagging) com HMM
//!
//! Este crate implementa o motor estatístico de um etiquetador de classes
//! gramaticais para Português Brasileiro. Ele foi projetado para ser
//! didático, modular e extensível, permitindo comparar estratégias de
//! etiquetagem de sofisticação crescente sobre o mesmo corpus:
//!
//! 1. **Baseline de frequência** ([`baseline`]): tag majoritária por palavra,
//!    sem nenhum contexto.
//! 2. **HMM sem suavização**: Viterbi sobre estimativas de máxima
//!    verossimilhança — colapsa diante de palavras nunca vistas.
//! 3. **HMM + Add-1** ([`smoothing`]): a suavização de Laplace elimina os
//!    zeros e devolve o modelo ao jogo.
//! 4. **HMM + Add-1 + pseudo-palavras** ([`vocab`]): palavras raras e
//!    desconhecidas são colapsadas em categorias de forma superficial,
//!    atacando a esparsidade na raiz.
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui num pipeline linear de treinamento:
//!
//! 1. **Corpus** ([`corpus`]): sentenças anotadas (palavra, tag), com
//!    partição determinística treino/teste.
//! 2. **Mapeamento** ([`vocab`]): vocabulário + pseudo-palavras por regras
//!    de forma ordenadas.
//! 3. **Contagem** ([`counts`]): transições (com fronteiras de sentença),
//!    emissões e unigramas em uma passada.
//! 4. **Suavização** ([`smoothing`]): contagens → probabilidades, estratégia
//!    injetável.
//! 5. **Modelo** ([`hmm`]): tabelas em log-space + decodificador Viterbi.
//! 6. **Fachada** ([`tagger`]): orquestra treino/predição e calcula as
//!    métricas por partição ([`eval`]).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use postag_core::corpus::{train_test_split, CorpusProvider, EmbeddedCorpus};
//! use postag_core::smoothing::add_one_smoothing;
//! use postag_core::tagger::HmmTagger;
//!
//! let sentences = EmbeddedCorpus.tagged_sents(None);
//! let (train, test) = train_test_split(&sentences, 0.9);
//!
//! let mut tagger = HmmTagger::with_options(add_one_smoothing, true);
//! tagger.train(&train, &test).unwrap();
//!
//! let report = tagger.loss(&test, None).unwrap();
//! println!("{report}");
//! ```

pub mod baseline;
pub mod corpus;
pub mod counts;
pub mod error;
pub mod eval;
pub mod hmm;
pub mod smoothing;
pub mod tagger;
pub mod vocab;

pub use baseline::BaselineTagger;
pub use error::{Result, TaggerError};
pub use eval::{flatten_pairs, LossReport};
pub use smoothing::{add_one_smoothing, no_smoothing, SmoothingFn};
pub use tagger::HmmTagger;
